use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};
use tracing::{debug, info};

use crate::{
    config::TrackerConfig,
    error::Result,
    pipeline::Pipeline,
    position::{self, PositionLabel},
    profile::{ColorProfile, TrackedColor},
    types::{DetectionResult, Frame, Region},
};

#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum TrackingCommand {
    /// Switch to the other built-in color
    #[serde(rename = "toggle_color")]
    ToggleColor,

    /// Raise the minimum region area by one step
    #[serde(rename = "increase_threshold")]
    IncreaseThreshold,

    /// Lower the minimum region area by one step, stopping at zero
    #[serde(rename = "decrease_threshold")]
    DecreaseThreshold,

    /// Leave the session untouched
    #[default]
    #[serde(rename = "no_op")]
    NoOp,
}

impl TrackingCommand {
    /// Get the JSON schema for all commands
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(TrackingCommand)
    }

    /// Get a list of all available command names
    pub fn command_names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ToggleColor => "Switch detection between the Blue and Red profiles",
            Self::IncreaseThreshold => "Increase the minimum contour area",
            Self::DecreaseThreshold => "Decrease the minimum contour area (never below zero)",
            Self::NoOp => "Keep the current color and threshold",
        }
    }
}

/// Everything a host needs to present one processed frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameReport {
    pub label: PositionLabel,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    /// Regions that passed the area filter
    pub regions: Vec<Region>,
    pub centroid: Option<(i32, i32)>,
    pub midpoint: (i32, i32),
    pub active_color_name: String,
    /// Threshold in force when this frame was processed
    pub min_area: u32,
}

impl FrameReport {
    fn new(detection: DetectionResult, color: TrackedColor, min_area: u32) -> Self {
        let position = position::classify(detection.centroid, detection.midpoint);
        Self {
            label: position.label,
            offset_x: position.offset_x,
            offset_y: position.offset_y,
            regions: detection.regions,
            centroid: detection.centroid,
            midpoint: detection.midpoint,
            active_color_name: color.name().to_string(),
            min_area,
        }
    }

    pub fn detected(&self) -> bool {
        self.centroid.is_some()
    }
}

/// Mutable tracking state carried from frame to frame.
///
/// Holds the active color and the area threshold; commands change them, and
/// [`TrackingSession::process_frame`] always applies its command before looking
/// at the frame.
pub struct TrackingSession {
    profile: ColorProfile,
    min_area: u32,
    threshold_step: u32,
    pipeline: Pipeline,
}

impl TrackingSession {
    /// Blue profile, threshold 200
    pub fn new() -> Self {
        Self::from_config(&TrackerConfig::default())
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::with_pipeline(config, Pipeline::default())
    }

    /// Create a session that runs frames through a custom pipeline
    pub fn with_pipeline(config: &TrackerConfig, pipeline: Pipeline) -> Self {
        Self {
            profile: config.initial_color.profile(),
            min_area: config.min_area,
            threshold_step: config.threshold_step,
            pipeline,
        }
    }

    pub fn active_profile(&self) -> &ColorProfile {
        &self.profile
    }

    pub fn min_area(&self) -> u32 {
        self.min_area
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn apply(&mut self, command: TrackingCommand) {
        match command {
            TrackingCommand::ToggleColor => {
                let from = self.profile.color;
                self.profile = from.cycle().profile();
                info!(%from, to = %self.profile.color, "switched tracked color");
            }
            TrackingCommand::IncreaseThreshold => {
                self.min_area = self.min_area.saturating_add(self.threshold_step);
                info!(min_area = self.min_area, "raised area threshold");
            }
            TrackingCommand::DecreaseThreshold => {
                self.min_area = self.min_area.saturating_sub(self.threshold_step);
                info!(min_area = self.min_area, "lowered area threshold");
            }
            TrackingCommand::NoOp => {}
        }
    }

    /// Apply `command`, then detect and classify the object in `frame`.
    ///
    /// The command takes effect even when the frame is rejected.
    pub fn process_frame(&mut self, frame: &Frame<'_>, command: TrackingCommand) -> Result<FrameReport> {
        self.apply(command);

        let detection = self.pipeline.detect(frame, &self.profile, self.min_area)?;
        let report = FrameReport::new(detection, self.profile.color, self.min_area);
        debug!(label = %report.label, offset_x = ?report.offset_x, offset_y = ?report.offset_y, "classified frame");

        Ok(report)
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrackingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackingSession")
            .field("profile", &self.profile)
            .field("min_area", &self.min_area)
            .field("threshold_step", &self.threshold_step)
            .finish_non_exhaustive()
    }
}

/// Start a session with the default settings.
pub fn initialize() -> TrackingSession {
    TrackingSession::new()
}
