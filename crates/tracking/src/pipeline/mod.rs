pub mod builder;

use tracing::debug;

use crate::{
    algorithms::filter_by_area,
    error::Result,
    moments,
    profile::ColorProfile,
    traits::{ContourExtractor, RegionSelector, Segmenter},
    types::{DetectionResult, Frame, Mask},
};

/// The per-frame detection stages, composed from swappable parts
pub struct Pipeline {
    segmenter: Box<dyn Segmenter>,
    contour_extractor: Box<dyn ContourExtractor>,
    selector: Box<dyn RegionSelector>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        segmenter: Box<dyn Segmenter>,
        contour_extractor: Box<dyn ContourExtractor>,
        selector: Box<dyn RegionSelector>,
    ) -> Self {
        Self {
            segmenter,
            contour_extractor,
            selector,
        }
    }

    /// Only the segmentation stage, for callers that want to show the raw mask
    pub fn segment(&self, frame: &Frame<'_>, profile: &ColorProfile) -> Result<Mask> {
        self.segmenter.segment(frame, profile)
    }

    /// Run a frame through every stage
    pub fn detect(
        &self,
        frame: &Frame<'_>,
        profile: &ColorProfile,
        min_area: u32,
    ) -> Result<DetectionResult> {
        let midpoint = frame.midpoint();

        // Step 1: Select in-range pixels
        let mask = self.segmenter.segment(frame, profile)?;

        // Step 2: Trace outer boundaries and drop small ones
        let contours = self.contour_extractor.extract_contours(&mask)?;
        let found = contours.len();
        let regions = filter_by_area(contours, min_area);

        // Step 3: Pick the tracked region and locate it
        let centroid = self.selector.select(&regions).and_then(|region| {
            debug!(area = region.area, "selected region");
            moments::centroid(region)
        });

        debug!(found, large = regions.len(), min_area, ?centroid, "detection finished");

        Ok(DetectionResult {
            centroid,
            regions,
            midpoint,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        builder::PipelineBuilder::new().build()
    }
}
