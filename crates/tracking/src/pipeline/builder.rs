use crate::{
    algorithms::{ExternalContourExtractor, HsvSegmenter, LargestRegionSelector},
    pipeline::Pipeline,
    traits::{ContourExtractor, RegionSelector, Segmenter},
};

/// Builder for creating detection pipelines with a fluent API
#[derive(Default)]
pub struct PipelineBuilder {
    segmenter: Option<Box<dyn Segmenter>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    selector: Option<Box<dyn RegionSelector>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmenter (replaces any existing one)
    pub fn set_segmenter<S>(mut self, segmenter: S) -> Self
    where
        S: Segmenter + 'static,
    {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the region selector (replaces any existing one)
    pub fn set_selector<R>(mut self, selector: R) -> Self
    where
        R: RegionSelector + 'static,
    {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Build the pipeline with default components if not specified
    pub fn build(self) -> Pipeline {
        let segmenter = self.segmenter.unwrap_or_else(|| Box::new(HsvSegmenter));

        let contour_extractor = self
            .contour_extractor
            .unwrap_or_else(|| Box::new(ExternalContourExtractor));

        let selector = self
            .selector
            .unwrap_or_else(|| Box::new(LargestRegionSelector));

        Pipeline::new(segmenter, contour_extractor, selector)
    }
}
