use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackingError},
    profile::TrackedColor,
};

pub const DEFAULT_MIN_AREA: u32 = 200;
pub const DEFAULT_THRESHOLD_STEP: u32 = 50;

/// Start-up settings for a tracking session
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Color tracked on the first frame
    pub initial_color: TrackedColor,
    /// Regions must enclose strictly more than this many square pixels
    pub min_area: u32,
    /// Amount the threshold moves per increase/decrease command
    pub threshold_step: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            initial_color: TrackedColor::Blue,
            min_area: DEFAULT_MIN_AREA,
            threshold_step: DEFAULT_THRESHOLD_STEP,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(TrackingError::UnsupportedConfigFormat),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save configuration, picking the format from the file extension
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        let content = match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => self.to_toml()?,
            Some("json") => self.to_json()?,
            _ => return Err(TrackingError::UnsupportedConfigFormat),
        };
        fs::write(path_ref, content)?;
        Ok(())
    }
}
