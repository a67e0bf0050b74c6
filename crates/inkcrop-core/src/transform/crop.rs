//! Pixel-rectangle cropping.
//!
//! Used after [`crate::find_bounding_box`] to cut the detected ink out of the
//! captured frame.
//!
//! # Behavior
//!
//! - The rectangle is clamped to the frame
//! - Minimum output dimension is 1x1 pixels, so a zero-size detection (a
//!   single ink pixel) still yields that pixel
//! - A rectangle covering the whole frame returns a copy of it

use crate::frame::RgbaFrame;
use crate::{Rect, CHANNELS};

/// Copy the pixels inside `rect` into a new frame.
///
/// # Arguments
///
/// * `frame` - Source frame
/// * `rect` - Region to keep, in pixel coordinates
///
/// A frame whose buffer length doesn't match `width * height * 4` is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use inkcrop_core::{crop_frame, Rect, RgbaFrame};
///
/// let frame = RgbaFrame::filled(100, 100, [255, 255, 255, 255]);
/// let cropped = crop_frame(&frame, Rect::new(25, 25, 50, 50));
/// assert_eq!(cropped.width, 50);
/// assert_eq!(cropped.height, 50);
/// ```
pub fn crop_frame(frame: &RgbaFrame, rect: Rect) -> RgbaFrame {
    // Nothing to copy from, or a buffer that disagrees with its dimensions;
    // also covers the full-frame fast path
    if frame.is_empty()
        || frame.validate().is_err()
        || (rect.x == 0 && rect.y == 0 && rect.width >= frame.width && rect.height >= frame.height)
    {
        return frame.clone();
    }

    // Clamp to image bounds
    let left = rect.x.min(frame.width - 1);
    let top = rect.y.min(frame.height - 1);
    let right = left.saturating_add(rect.width).min(frame.width);
    let bottom = top.saturating_add(rect.height).min(frame.height);

    // Ensure minimum dimensions
    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let src_stride = frame.width as usize * CHANNELS;
    let row_bytes = out_width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in top..top + out_height {
        let start = y as usize * src_stride + left as usize * CHANNELS;
        output.extend_from_slice(&frame.pixels[start..start + row_bytes]);
    }

    RgbaFrame {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

impl RgbaFrame {
    /// Crop this frame to `rect`. See [`crop_frame`].
    pub fn crop(&self, rect: Rect) -> RgbaFrame {
        crop_frame(self, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test frame where each pixel has a unique value based on position.
    fn test_frame(width: u32, height: u32) -> RgbaFrame {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        RgbaFrame {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_full_crop() {
        let frame = test_frame(100, 100);
        let result = crop_frame(&frame, Rect::full(100, 100));

        assert_eq!(result, frame);
    }

    #[test]
    fn test_center_crop() {
        let frame = test_frame(10, 10);
        let result = crop_frame(&frame, Rect::new(2, 2, 6, 6));

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 6);

        // Value at (2, 2) = 2 * 10 + 2 = 22
        assert_eq!(result.pixel(0, 0), Some([22, 22, 22, 255]));
        // Value at (7, 7) = 77
        assert_eq!(result.pixel(5, 5), Some([77, 77, 77, 255]));
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let frame = test_frame(10, 10);
        let result = crop_frame(&frame, Rect::new(8, 8, 5, 5));

        // Only the remaining 2x2 pixels
        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
        assert_eq!(result.pixel(1, 1), Some([99, 99, 99, 255]));
    }

    #[test]
    fn test_crop_origin_outside_frame() {
        let frame = test_frame(10, 10);
        let result = crop_frame(&frame, Rect::new(50, 50, 5, 5));

        // Clamped to the last pixel
        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        assert_eq!(result.pixel(0, 0), Some([99, 99, 99, 255]));
    }

    #[test]
    fn test_zero_size_rect_keeps_one_pixel() {
        let frame = test_frame(10, 10);
        // Single-pixel detection at (4, 3)
        let result = crop_frame(&frame, Rect::new(4, 3, 0, 0));

        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        assert_eq!(result.pixel(0, 0), Some([34, 34, 34, 255]));
    }

    #[test]
    fn test_crop_rectangular() {
        let frame = test_frame(200, 100);
        let result = crop_frame(&frame, Rect::new(0, 0, 50, 100));

        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
        assert_eq!(result.byte_size(), 50 * 100 * 4);
    }

    #[test]
    fn test_crop_preserves_alpha() {
        let mut frame = test_frame(4, 4);
        frame.pixels[(4 + 1) * 4 + 3] = 17;
        let result = frame.crop(Rect::new(1, 1, 2, 2));

        assert_eq!(result.pixel(0, 0), Some([5, 5, 5, 17]));
    }

    #[test]
    fn test_crop_short_buffer_returns_copy() {
        let frame = RgbaFrame {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        let result = crop_frame(&frame, Rect::new(1, 1, 2, 2));
        assert_eq!(result, frame);
    }

    #[test]
    fn test_crop_empty_frame() {
        let frame = RgbaFrame::filled(0, 0, [0, 0, 0, 0]);
        let result = crop_frame(&frame, Rect::new(0, 0, 5, 5));
        assert!(result.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
