use image::RgbaImage;

use crate::error::{Error, Result};
use crate::filter::{self, Filter};
use crate::pixel::{from_rgba, merge_argb, to_rgba};

/// An owned `0xAARRGGBB` image, stored row-major.
///
/// `pixels.len() == width * height` always holds, so filters can be run on
/// it without further checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Sprite {
    /// A fully transparent sprite.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = pixel_count(width, height).ok_or(Error::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        if pixel_count(width, height) != Some(pixels.len()) {
            return Err(Error::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a sprite from tightly packed RGBA8 bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(Error::PartialPixel { bytes: data.len() });
        }

        let pixels = data
            .chunks_exact(4)
            .map(|px| merge_argb([px[3], px[0], px[1], px[2]]))
            .collect();

        Self::from_pixels(width, height, pixels)
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(from_rgba).collect(),
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            to_rgba(self.pixels[self.index(x, y)])
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn apply(&mut self, filter: &mut dyn Filter) -> Result<()> {
        filter::apply(filter, self.width, self.height, &mut self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// `width * height`, or `None` where that overflows `usize`.
fn pixel_count(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::GrayNoise;
    use image::Rgba;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_new_is_transparent() {
        let sprite = Sprite::new(3, 2).unwrap();
        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.pixels(), &[0; 6]);
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let err = Sprite::from_pixels(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { len: 3, .. }));
    }

    #[test]
    fn test_from_rgba_bytes_channel_order() {
        let sprite = Sprite::from_rgba_bytes(2, 1, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(sprite.pixels(), &[0x04010203, 0x08050607]);
    }

    #[test]
    fn test_from_rgba_bytes_rejects_partial_pixel() {
        let err = Sprite::from_rgba_bytes(2, 2, &[0; 5]).unwrap_err();
        assert!(matches!(err, Error::PartialPixel { bytes: 5 }));
        assert_eq!(err.to_string(), "5 bytes is not a whole number of RGBA pixels");
    }

    #[test]
    fn test_from_rgba_bytes_reports_pixel_count_on_mismatch() {
        let err = Sprite::from_rgba_bytes(2, 2, &[0; 8]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { len: 2, .. }));
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(pixel_count(0, 9), Some(0));
        assert_eq!(pixel_count(640, 480), Some(307_200));
    }

    #[test]
    fn test_new_empty_sprite() {
        let sprite = Sprite::new(0, 0).unwrap();
        assert!(sprite.pixels().is_empty());
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_new_rejects_overflowing_size() {
        assert_eq!(pixel_count(u32::MAX, 2), None);
        let err = Sprite::new(u32::MAX, 2).unwrap_err();
        assert!(matches!(err, Error::TooLarge { .. }));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_pixel_count_of_largest_size_fits() {
        assert_eq!(
            pixel_count(u32::MAX, u32::MAX),
            Some(u32::MAX as usize * u32::MAX as usize)
        );
    }

    #[test]
    fn test_image_conversion() {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(1, 0, Rgba([0xff, 0x00, 0x00, 0xff]));
        image.put_pixel(0, 1, Rgba([0x00, 0x00, 0xff, 0x80]));

        let sprite = Sprite::from_image(&image);
        assert_eq!(sprite.pixel(1, 0), Some(0xffff0000));
        assert_eq!(sprite.pixel(0, 1), Some(0x800000ff));
        assert_eq!(sprite.pixel(2, 0), None);
        assert_eq!(sprite.to_image(), image);
    }

    #[test]
    fn test_apply_runs_filter() {
        let mut sprite = Sprite::from_pixels(2, 1, vec![0xffff0000, 0xff00ff00]).unwrap();
        let mut noise = GrayNoise::with_rng(0.0, StdRng::seed_from_u64(0));
        sprite.apply(&mut noise).unwrap();
        assert_eq!(sprite.pixels(), &[0xffff0000, 0xff00ff00]);

        sprite.pixels_mut()[0] = 0;
        assert_eq!(sprite.pixel(0, 0), Some(0));
    }
}
