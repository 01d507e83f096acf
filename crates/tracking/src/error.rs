use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Unsupported color: {0}")]
    UnsupportedColor(String),

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Unsupported config format. Please use .toml or .json files")]
    UnsupportedConfigFormat,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackingError>;
