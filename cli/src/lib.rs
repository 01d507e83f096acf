pub mod keys;
pub mod overlay;

use std::{fmt::Display, path::Path};

use image::RgbImage;
use thiserror::Error;
use tracing::warn;
use tracking::{TrackingCommand, TrackingError, TrackingSession};

pub use keys::{HostAction, decode_key, parse_key_script};
pub use overlay::{overlay_caption, render_overlay, render_region_mask};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Tracking(#[from] TrackingError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unknown key '{0}' in key script")]
    UnknownKey(String),
}

/// Decode a frame image from disk as 8-bit RGB.
pub fn open_frame(path: &Path) -> Result<RgbImage, CliError> {
    Ok(image::open(path)?.to_rgb8())
}

/// Give up on one frame without losing the key pressed alongside it.
pub fn skip_frame(
    session: &mut TrackingSession,
    command: TrackingCommand,
    path: &Path,
    reason: impl Display,
) {
    session.apply(command);
    warn!("Skipping {}: {}", path.display(), reason);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecodable_frame_is_an_image_error() {
        let path = std::env::temp_dir().join(format!("color_tracker_{}_garbage.png", std::process::id()));
        std::fs::write(&path, b"not a png").unwrap();

        let result = open_frame(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(CliError::Image(_))));
    }

    #[test]
    fn skipped_frame_still_applies_its_key() {
        let mut session = TrackingSession::new();
        let path = Path::new("broken.png");

        skip_frame(&mut session, TrackingCommand::ToggleColor, path, "cannot decode");
        skip_frame(&mut session, TrackingCommand::IncreaseThreshold, path, "cannot decode");

        assert_eq!(session.active_profile().name(), "Red");
        assert_eq!(session.min_area(), 250);
    }
}
