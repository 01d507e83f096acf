use crate::{
    error::Result,
    profile::ColorProfile,
    types::{Frame, Mask, Region},
};

/// Trait for color segmentation algorithms
pub trait Segmenter: Send + Sync {
    /// Select the pixels of `frame` that fall inside the profile's bounds
    fn segment(&self, frame: &Frame<'_>, profile: &ColorProfile) -> Result<Mask>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract the outer boundaries of the mask's foreground regions, in scan order
    fn extract_contours(&self, mask: &Mask) -> Result<Vec<Region>>;
}

/// Trait for picking the tracked region out of the ones that passed filtering
pub trait RegionSelector: Send + Sync {
    fn select<'r>(&self, regions: &'r [Region]) -> Option<&'r Region>;
}
