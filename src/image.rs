//! Displayable images and the decoder seam.

use std::sync::Arc;

use image_rs::{Rgba, RgbaImage};

use crate::DecodeError;

/// An immutable RGBA8 bitmap ready to be drawn.
///
/// Clones share the pixel buffer.
#[derive(Clone, Debug)]
pub struct DisplayImage {
    pixels: Arc<RgbaImage>,
}

impl DisplayImage {
    /// Wrap an already decoded bitmap.
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    /// A flat single-color image, handy for placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

impl PartialEq for DisplayImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
            || (self.width() == other.width()
                && self.height() == other.height()
                && self.as_raw() == other.as_raw())
    }
}

impl Eq for DisplayImage {}

/// Turns raw bytes into a [`DisplayImage`].
///
/// The view only cares whether decoding produced an image. Errors are
/// logged and then treated as "not available yet".
#[cfg_attr(test, mockall::automock)]
pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DisplayImage, DecodeError>;
}

/// Decoder backed by the `image` crate.
///
/// Sniffs the format from the bytes. PNG, JPEG, GIF and WebP are enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformDecoder;

impl ImageDecoder for PlatformDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DisplayImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let decoded = image_rs::load_from_memory(bytes)?;
        Ok(DisplayImage::from_rgba(decoded.into_rgba8()))
    }
}
