//! Ink bounding-box detection.
//!
//! Scans a transformed RGBA buffer (see [`crate::luminance`]) and reports the
//! smallest rectangle containing every pixel whose red sample is strictly
//! above a threshold.
//!
//! # Result Semantics
//!
//! - No qualifying pixel: the whole image, `(0, 0, width, height)`, so that
//!   cropping falls back to the full frame.
//! - Otherwise width and height are the *distance* between the extreme
//!   qualifying coordinates, not an inclusive pixel count. A single ink pixel
//!   at (x, y) yields `(x, y, 0, 0)`. Existing callers rely on this.

use crate::frame::{rgba_len, RgbaFrame};
use crate::{Rect, CHANNELS};

/// Find the bounding box of all pixels whose red sample exceeds `threshold`.
///
/// # Arguments
/// * `pixels` - Transformed RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - Signal level a pixel must strictly exceed to count as ink
///
/// The threshold is not clamped: a negative value admits every pixel and a
/// value of 255 or more admits none.
///
/// # Example
/// ```
/// use inkcrop_core::{find_bounding_box, Rect};
///
/// let mut pixels = vec![0u8; 4 * 4 * 4];
/// pixels[(4 + 2) * 4] = 255; // ink at (2, 1)
/// assert_eq!(find_bounding_box(&pixels, 4, 4, 128.0), Rect::new(2, 1, 0, 0));
/// ```
///
/// # Performance
/// Always visits every pixel once, O(n), no allocation.
pub fn find_bounding_box(pixels: &[u8], width: u32, height: u32, threshold: f64) -> Rect {
    // Zero-sized images have nothing to scan (and no row width to divide by)
    if width == 0 || height == 0 {
        return Rect::full(width, height);
    }

    debug_assert!(
        rgba_len(width, height) == Some(pixels.len()),
        "Pixel data size mismatch. Expected {:?}, got {}",
        rgba_len(width, height),
        pixels.len()
    );

    let row = width as usize;
    let mut extent: Option<Extent> = None;

    for (idx, chunk) in pixels.chunks_exact(CHANNELS).enumerate() {
        if f64::from(chunk[0]) > threshold {
            let x = (idx % row) as u32;
            let y = (idx / row) as u32;
            match extent.as_mut() {
                Some(e) => e.include(x, y),
                None => extent = Some(Extent::at(x, y)),
            }
        }
    }

    match extent {
        Some(e) => e.to_rect(),
        None => Rect::full(width, height),
    }
}

/// Running min/max of qualifying coordinates.
#[derive(Debug, Clone, Copy)]
struct Extent {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl Extent {
    fn at(x: u32, y: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x,
            bottom: y,
        }
    }

    #[inline]
    fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.right = self.right.max(x);
        self.top = self.top.min(y);
        self.bottom = self.bottom.max(y);
    }

    fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.right - self.left,
            self.bottom - self.top,
        )
    }
}

impl RgbaFrame {
    /// Bounding box of the ink in this (already transformed) frame.
    pub fn bounding_box(&self, threshold: f64) -> Rect {
        find_bounding_box(&self.pixels, self.width, self.height, threshold)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
