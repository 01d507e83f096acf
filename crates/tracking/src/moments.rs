//! Area moments of a region boundary.
//!
//! The boundary is treated as a closed polygon and integrated with Green's
//! theorem, so a region's moments depend only on its traced outline.

use serde::{Deserialize, Serialize};

use crate::types::Region;

/// Raw spatial moments up to first order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

impl Moments {
    pub fn of_polygon(points: &[[i32; 2]]) -> Self {
        if points.len() < 3 {
            return Self::default();
        }

        let (mut a00, mut a10, mut a01) = (0.0, 0.0, 0.0);
        let mut prev = points[points.len() - 1];
        for &cur in points {
            let (xp, yp) = (prev[0] as f64, prev[1] as f64);
            let (xc, yc) = (cur[0] as f64, cur[1] as f64);
            let cross = xp * yc - xc * yp;
            a00 += cross;
            a10 += cross * (xp + xc);
            a01 += cross * (yp + yc);
            prev = cur;
        }

        // Orientation only flips the sign; keep mass positive.
        let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
        Self {
            m00: sign * a00 / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
        }
    }

    /// Center of mass, or `None` for a massless outline.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

/// Integer centroid of a region, truncated toward zero.
///
/// Degenerate outlines (a single pixel, a one-pixel-wide line) enclose no
/// area and yield `None`.
pub fn centroid(region: &Region) -> Option<(i32, i32)> {
    Moments::of_polygon(&region.boundary)
        .centroid()
        .map(|(x, y)| (x as i32, y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::ExternalContourExtractor,
        traits::ContourExtractor,
        types::Mask,
    };
    use image::{GrayImage, Luma};
    use imageproc::drawing::draw_filled_circle_mut;

    #[test]
    fn square_moments() {
        let m = Moments::of_polygon(&[[0, 0], [10, 0], [10, 10], [0, 10]]);
        assert_eq!(m.m00, 100.0);
        assert_eq!(m.centroid(), Some((5.0, 5.0)));
    }

    #[test]
    fn orientation_does_not_change_result() {
        let cw = Moments::of_polygon(&[[0, 0], [0, 10], [10, 10], [10, 0]]);
        let ccw = Moments::of_polygon(&[[0, 0], [10, 0], [10, 10], [0, 10]]);
        assert_eq!(cw, ccw);
    }

    #[test]
    fn zero_mass_has_no_centroid() {
        let line = Region::new(vec![[0, 0], [5, 0], [10, 0], [5, 0]]);
        assert_eq!(centroid(&line), None);

        let dot = Region::new(vec![[3, 3]]);
        assert_eq!(centroid(&dot), None);
    }

    #[test]
    fn filled_circle_centroid_and_area() {
        let (cx, cy, r) = (120, 80, 30);
        let mut img = GrayImage::new(240, 160);
        draw_filled_circle_mut(&mut img, (cx, cy), r, Luma([Mask::SET]));

        let regions = ExternalContourExtractor
            .extract_contours(&Mask::from_image(img))
            .expect("Should extract contours");
        assert_eq!(regions.len(), 1);

        let region = &regions[0];
        let expected_area = std::f64::consts::PI * (r * r) as f64;
        assert!(
            (region.area - expected_area).abs() / expected_area < 0.05,
            "area {} too far from {}",
            region.area,
            expected_area
        );

        let (x, y) = centroid(region).expect("circle has mass");
        assert!((x - cx).abs() <= 1, "x = {}", x);
        assert!((y - cy).abs() <= 1, "y = {}", y);
    }
}
