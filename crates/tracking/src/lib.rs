//! # Color Object Tracking Library
//!
//! Finds the dominant object of a chosen color in a video frame and reports
//! where it sits on a 3x3 grid around the frame center.
//!
//! ## Core Features
//!
//! - **HSV Segmentation**: Built-in color profiles with inclusive HSV bounds
//! - **Outer Contours**: Only top-level region boundaries are considered
//! - **Area Filtering**: A tunable minimum area discards noise
//! - **Grid Classification**: Nine position labels plus a "no contours" sentinel
//! - **Session State**: Color and threshold changes driven by commands
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tracking::{Frame, TrackingCommand, TrackingSession};
//!
//! let mut session = TrackingSession::new();
//!
//! let image = image::open("frame.png")?.to_rgb8();
//! let frame = Frame::from_rgb_image(&image)?;
//! let report = session.process_frame(&frame, TrackingCommand::NoOp)?;
//!
//! println!("{} ({:?}, {:?})", report.label, report.offset_x, report.offset_y);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use tracking::{Pipeline, TrackerConfig, TrackingSession, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .set_segmenter(HsvSegmenter)
//!     .set_selector(LargestRegionSelector)
//!     .build();
//! let session = TrackingSession::with_pipeline(&TrackerConfig::default(), pipeline);
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod profile;
pub mod algorithms;
pub mod moments;
pub mod position;
pub mod pipeline;
pub mod config;
pub mod session;

// Re-exports for convenience
pub use error::{Result, TrackingError};
pub use types::{DetectionResult, Frame, Hsv, Mask, PixelLayout, Region};
pub use traits::*;
pub use profile::{ColorProfile, TrackedColor};
pub use position::{Position, PositionLabel};
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use config::TrackerConfig;
pub use session::{FrameReport, TrackingCommand, TrackingSession, initialize};
