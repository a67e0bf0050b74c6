//! Owned RGBA pixel buffers and the errors raised when validating them.

use thiserror::Error;

use crate::{Rect, CHANNELS};

/// Errors raised when a pixel buffer or a rectangle does not fit its image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PixelError {
    /// Buffer length doesn't match width * height * 4
    #[error("Pixel buffer size mismatch: expected {expected} bytes (width * height * 4), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Rectangle is empty or extends past the image
    #[error("Invalid rectangle {rect:?} for a {width}x{height} image")]
    InvalidRect { rect: Rect, width: u32, height: u32 },
}

/// Expected byte length of a `width x height` RGBA buffer.
///
/// Returns `None` when the length doesn't fit in `usize` (on wasm32 that is
/// anything past 4 GiB).
#[inline]
pub fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

/// An RGBA image snapshot, such as pixels read back from a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length is width * height * 4.
    pub pixels: Vec<u8>,
}

impl RgbaFrame {
    /// Create a frame, checking that `pixels` holds exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PixelError> {
        let frame = Self {
            width,
            height,
            pixels,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Check that the buffer holds exactly `width * height` RGBA pixels.
    ///
    /// Fields are public, so frames built by hand can be out of sync.
    ///
    /// # Errors
    /// * `InvalidDimensions` if `width * height * 4` overflows `usize`
    /// * `SizeMismatch` if the buffer length is different
    pub fn validate(&self) -> Result<(), PixelError> {
        let expected = rgba_len(self.width, self.height).ok_or(PixelError::InvalidDimensions {
            width: self.width,
            height: self.height,
        })?;
        if self.pixels.len() != expected {
            return Err(PixelError::SizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Create a frame where every pixel is `color`.
    ///
    /// # Panics
    /// Like `vec!`, panics if the buffer size overflows or cannot be allocated.
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let len = rgba_len(width, height).unwrap_or(usize::MAX);
        let pixels = color.iter().copied().cycle().take(len).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a frame from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage. Returns `None` if the buffer is too short.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the RGBA value at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = self.pixels.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Rectangle covering the whole frame.
    pub fn bounds(&self) -> Rect {
        Rect::full(self.width, self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
