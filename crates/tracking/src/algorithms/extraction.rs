use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use tracing::debug;

use crate::{
    error::Result,
    traits::{ContourExtractor, RegionSelector},
    types::{Mask, Region},
};

/// Imageproc-based extractor that reports outermost boundaries only.
///
/// Hole borders, and anything nested inside a hole, are dropped. Regions come
/// out in raster order of the first boundary pixel met when scanning the mask
/// top-to-bottom, left-to-right.
#[derive(Debug, Clone, Default)]
pub struct ExternalContourExtractor;

impl ContourExtractor for ExternalContourExtractor {
    fn extract_contours(&self, mask: &Mask) -> Result<Vec<Region>> {
        let contours = find_contours::<i32>(&padded(mask));
        let total = contours.len();

        let regions: Vec<Region> = contours
            .into_iter()
            .filter(|c| c.parent.is_none() && matches!(c.border_type, BorderType::Outer))
            .map(|c| Region::new(c.points.iter().map(|p| [p.x - 1, p.y - 1]).collect()))
            .collect();

        debug!(total, external = regions.len(), "extracted contours");
        Ok(regions)
    }
}

/// Copy of the mask inside a one-pixel unset border.
///
/// `find_contours` mislabels blobs that touch the image edge, so tracing runs
/// on the padded copy and points are shifted back by one.
fn padded(mask: &Mask) -> GrayImage {
    let source = mask.as_image();
    let mut out = GrayImage::new(mask.width() + 2, mask.height() + 2);
    for (x, y, pixel) in source.enumerate_pixels() {
        out.put_pixel(x + 1, y + 1, *pixel);
    }
    out
}

/// Keep the regions whose area strictly exceeds `min_area`, preserving order.
pub fn filter_by_area(regions: Vec<Region>, min_area: u32) -> Vec<Region> {
    let threshold = min_area as f64;
    regions.into_iter().filter(|r| r.area > threshold).collect()
}

/// Extract outer regions from `mask` and drop the ones at or below `min_area`.
pub fn extract(mask: &Mask, min_area: u32) -> Result<Vec<Region>> {
    let regions = ExternalContourExtractor.extract_contours(mask)?;
    Ok(filter_by_area(regions, min_area))
}

/// Picks the region with the largest area. Equal areas resolve to the one
/// seen first in scan order.
#[derive(Debug, Clone, Default)]
pub struct LargestRegionSelector;

impl RegionSelector for LargestRegionSelector {
    fn select<'r>(&self, regions: &'r [Region]) -> Option<&'r Region> {
        select_largest(regions)
    }
}

pub fn select_largest(regions: &[Region]) -> Option<&Region> {
    regions.iter().fold(None, |best: Option<&Region>, r| match best {
        Some(b) if b.area >= r.area => Some(b),
        _ => Some(r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::mask_from_fn;

    fn two_squares() -> Mask {
        // 10x10 square at (5,5) and 30x30 square at (40,40)
        mask_from_fn(100, 100, |x, y| {
            ((5..15).contains(&x) && (5..15).contains(&y))
                || ((40..70).contains(&x) && (40..70).contains(&y))
        })
    }

    #[test]
    fn finds_each_blob_once() {
        let regions = ExternalContourExtractor
            .extract_contours(&two_squares())
            .expect("Should extract contours");
        assert_eq!(regions.len(), 2);
        assert!(regions[0].area < regions[1].area);
    }

    #[test]
    fn drops_regions_at_or_below_threshold() {
        let regions = extract(&two_squares(), 81).unwrap();
        // The small square traces a 9x9 polygon
        assert_eq!(regions.len(), 1);
        assert!(regions.iter().all(|r| r.area > 81.0));

        let regions = extract(&two_squares(), 80).unwrap();
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn ignores_blob_inside_hole() {
        // Ring with an island in its hole
        let mask = mask_from_fn(60, 60, |x, y| {
            let ring = (5..55).contains(&x) && (5..55).contains(&y)
                && !((15..45).contains(&x) && (15..45).contains(&y));
            let island = (25..35).contains(&x) && (25..35).contains(&y);
            ring || island
        });

        let regions = ExternalContourExtractor.extract_contours(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounding_box(), Some(([5, 5], [54, 54])));
    }

    #[test]
    fn blob_on_left_edge_is_found() {
        let mask = mask_from_fn(300, 300, |x, y| x < 60 && (100..160).contains(&y));
        let regions = ExternalContourExtractor.extract_contours(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounding_box(), Some(([0, 100], [59, 159])));
    }

    #[test]
    fn blob_in_origin_corner_is_found() {
        let mask = mask_from_fn(300, 300, |x, y| x < 60 && y < 60);
        let regions = ExternalContourExtractor.extract_contours(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounding_box(), Some(([0, 0], [59, 59])));
        assert!((regions[0].area - 3481.0).abs() < 1e-9);
    }

    #[test]
    fn blob_on_right_and_bottom_edges_is_found() {
        let mask = mask_from_fn(300, 300, |x, y| x >= 240 && y >= 240);
        let regions = ExternalContourExtractor.extract_contours(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounding_box(), Some(([240, 240], [299, 299])));
    }

    #[test]
    fn full_mask_is_one_region() {
        let mask = mask_from_fn(40, 20, |_, _| true);
        let regions = ExternalContourExtractor.extract_contours(&mask).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounding_box(), Some(([0, 0], [39, 19])));
    }

    #[test]
    fn empty_mask_has_no_regions() {
        let mask = mask_from_fn(20, 20, |_, _| false);
        assert!(extract(&mask, 0).unwrap().is_empty());
    }

    #[test]
    fn largest_wins_and_ties_keep_first() {
        let a = Region::new(vec![[0, 0], [4, 0], [4, 4], [0, 4]]);
        let b = Region::new(vec![[10, 0], [20, 0], [20, 10], [10, 10]]);
        let c = Region::new(vec![[30, 0], [40, 0], [40, 10], [30, 10]]);
        let regions = vec![a, b.clone(), c];

        let picked = LargestRegionSelector.select(&regions).unwrap();
        assert_eq!(picked.boundary, b.boundary);
        assert!(select_largest(&[]).is_none());
    }
}
