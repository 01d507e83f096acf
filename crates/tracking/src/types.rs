use geo_types::{Coord, LineString, Polygon};
use image::{GrayImage, RgbImage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackingError};

/// Channel order of an interleaved 8-bit, 3-channel frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PixelLayout {
    /// Blue, green, red. What most capture devices hand out.
    Bgr8,
    /// Red, green, blue. What `image` decodes to.
    Rgb8,
}

/// A borrowed view over one captured frame.
///
/// The buffer is owned by the capture side and only borrowed for the
/// duration of a single processing cycle.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl<'a> Frame<'a> {
    pub const CHANNELS: usize = 3;

    /// Wrap a raw interleaved buffer, checking that it matches the dimensions.
    pub fn new(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TrackingError::InvalidFrame(format!(
                "frame has zero extent ({}x{})",
                width, height
            )));
        }

        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(TrackingError::InvalidFrame(format!(
                "buffer holds {} bytes, {}x{} needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Self { data, width, height, layout })
    }

    pub fn from_rgb_image(image: &'a RgbImage) -> Result<Self> {
        Self::new(image.as_raw(), image.width(), image.height(), PixelLayout::Rgb8)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate pixels in row-major order as `[r, g, b]`, whatever the layout.
    pub fn rgb_pixels(&self) -> impl Iterator<Item = [u8; 3]> + 'a {
        let layout = self.layout;
        self.data.chunks_exact(Self::CHANNELS).map(move |px| match layout {
            PixelLayout::Rgb8 => [px[0], px[1], px[2]],
            PixelLayout::Bgr8 => [px[2], px[1], px[0]],
        })
    }

    /// Geometric center of the frame, the origin for position classification.
    pub fn midpoint(&self) -> (i32, i32) {
        crate::position::midpoint(self.width, self.height)
    }
}

/// 8-bit hue/saturation/value triple.
///
/// Hue is stored as degrees halved (`0..=180`) so it fits a byte; saturation
/// and value span `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Convert an RGB pixel.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = (max - min) as f32;

        let s = if max == 0 {
            0.0
        } else {
            255.0 * delta / max as f32
        };

        let mut h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (g as f32 - b as f32) / delta
        } else if max == g {
            120.0 + 60.0 * (b as f32 - r as f32) / delta
        } else {
            240.0 + 60.0 * (r as f32 - g as f32) / delta
        };
        if h < 0.0 {
            h += 360.0;
        }

        // Hues just under 360 degrees round up to 180, which is red again
        Self {
            h: ((h / 2.0).round() as u32 % 180) as u8,
            s: s.round() as u8,
            v: max,
        }
    }

    /// Inclusive channel-wise range test.
    pub fn within(&self, lower: &Hsv, upper: &Hsv) -> bool {
        (lower.h..=upper.h).contains(&self.h)
            && (lower.s..=upper.s).contains(&self.s)
            && (lower.v..=upper.v).contains(&self.v)
    }
}

/// Binary selection of in-range pixels. Set pixels hold 255, the rest 0.
#[derive(Debug, Clone)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    pub const SET: u8 = 255;

    pub fn from_image(image: GrayImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y).0[0] != 0
    }

    /// Number of selected pixels.
    pub fn count(&self) -> usize {
        self.image.as_raw().iter().filter(|&&v| v != 0).count()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }
}

/// A connected foreground area of a mask, described by its outer boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    /// Boundary pixels in tracing order
    pub boundary: Vec<[i32; 2]>,
    /// Polygon area enclosed by the boundary
    pub area: f64,
}

impl Region {
    pub fn new(boundary: Vec<[i32; 2]>) -> Self {
        use geo::Area;

        let mut region = Self { boundary, area: 0.0 };
        region.area = region.to_geo_polygon().unsigned_area();
        region
    }

    /// Convert to geo-types Polygon for geometric operations
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .boundary
            .iter()
            .map(|&[x, y]| Coord { x: x as f64, y: y as f64 })
            .collect();
        Polygon::new(LineString::new(coords), vec![])
    }

    /// Get the bounding box of the region as (min, max) corners
    pub fn bounding_box(&self) -> Option<([i32; 2], [i32; 2])> {
        let first = *self.boundary.first()?;
        let bounds = self.boundary.iter().fold((first, first), |(min, max), &[x, y]| {
            ([min[0].min(x), min[1].min(y)], [max[0].max(x), max[1].max(y)])
        });
        Some(bounds)
    }
}

/// Everything the detection stages produced for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResult {
    /// Centroid of the largest qualifying region, absent when nothing qualified
    pub centroid: Option<(i32, i32)>,
    /// Regions whose area exceeded the threshold, in scan order
    pub regions: Vec<Region>,
    pub midpoint: (i32, i32),
}
