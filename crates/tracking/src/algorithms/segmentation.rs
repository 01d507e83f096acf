use image::{GrayImage, Luma};
use tracing::{debug, warn};

use crate::{
    error::{Result, TrackingError},
    profile::ColorProfile,
    traits::Segmenter,
    types::{Frame, Hsv, Mask},
};

/// Per-pixel HSV range thresholding
#[derive(Debug, Clone, Default)]
pub struct HsvSegmenter;

impl Segmenter for HsvSegmenter {
    fn segment(&self, frame: &Frame<'_>, profile: &ColorProfile) -> Result<Mask> {
        let (width, height) = (frame.width(), frame.height());
        let pixel_count = width as usize * height as usize;
        if pixel_count == 0 || frame.data().len() != pixel_count * Frame::CHANNELS {
            warn!(width, height, bytes = frame.data().len(), "rejecting malformed frame");
            return Err(TrackingError::InvalidFrame(format!(
                "{}x{} frame with {} bytes",
                width,
                height,
                frame.data().len()
            )));
        }

        let raw: Vec<u8> = frame
            .rgb_pixels()
            .map(|rgb| {
                if profile.accepts(&Hsv::from_rgb(rgb)) {
                    Mask::SET
                } else {
                    0
                }
            })
            .collect();

        let image = GrayImage::from_raw(width, height, raw).ok_or_else(|| {
            TrackingError::InvalidFrame("mask buffer does not match frame size".to_string())
        })?;

        let mask = Mask::from_image(image);
        debug!(color = profile.name(), selected = mask.count(), "segmented frame");
        Ok(mask)
    }
}

/// Build a mask from a predicate over pixel coordinates. Handy for synthetic inputs.
pub fn mask_from_fn<F>(width: u32, height: u32, mut selected: F) -> Mask
where
    F: FnMut(u32, u32) -> bool,
{
    let image = GrayImage::from_fn(width, height, |x, y| {
        if selected(x, y) {
            Luma([Mask::SET])
        } else {
            Luma([0])
        }
    });
    Mask::from_image(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{profile::TrackedColor, types::PixelLayout};
    use image::{Rgb, RgbImage};

    #[test]
    fn selects_only_in_range_pixels() {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(1, 0, Rgb([0, 0, 255]));
        img.put_pixel(3, 1, Rgb([20, 40, 200]));
        img.put_pixel(2, 1, Rgb([255, 255, 255]));

        let frame = Frame::from_rgb_image(&img).unwrap();
        let mask = HsvSegmenter
            .segment(&frame, &TrackedColor::Blue.profile())
            .expect("Should segment");

        assert_eq!((mask.width(), mask.height()), (4, 2));
        assert!(mask.is_set(1, 0));
        assert!(mask.is_set(3, 1));
        assert!(!mask.is_set(2, 1));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn honours_bgr_layout() {
        // Pure blue stored as B, G, R
        let data = [255u8, 0, 0];
        let frame = Frame::new(&data, 1, 1, PixelLayout::Bgr8).unwrap();
        let mask = HsvSegmenter
            .segment(&frame, &TrackedColor::Blue.profile())
            .unwrap();
        assert!(mask.is_set(0, 0));
    }

    #[test]
    fn red_profile_ignores_blue() {
        let img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 255]));
        let frame = Frame::from_rgb_image(&img).unwrap();
        let mask = HsvSegmenter
            .segment(&frame, &TrackedColor::Red.profile())
            .unwrap();
        assert_eq!(mask.count(), 0);
    }
}
