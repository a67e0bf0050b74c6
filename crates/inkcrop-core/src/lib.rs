//! Inkcrop Core - Pixel and geometry primitives
//!
//! This crate provides the building blocks of the capture-and-crop pipeline:
//! inverted grayscale transforms, ink bounding-box detection, fitted drawing
//! and a small HSV color helper.
//!
//! # Pipeline
//!
//! 1. Capture an RGBA snapshot (`RgbaFrame`, 4 bytes per pixel, row-major)
//! 2. Apply a luminance transform in place (`luminance`)
//! 3. Scan for the ink bounding box (`bounds`)
//! 4. Crop or redraw the detected region (`transform`)

pub mod bounds;
pub mod color;
pub mod detect;
pub mod frame;
pub mod luminance;
pub mod transform;

pub use bounds::find_bounding_box;
pub use color::hsv_to_rgb;
pub use detect::{detect_content_bounds, DetectOptions};
pub use frame::{PixelError, RgbaFrame};
pub use luminance::{blue_to_grayscale_inverted, to_grayscale_inverted, LuminanceModel};
pub use transform::{crop_frame, draw_image_fitted, fit_placement, FilterType, Placement};

/// Number of bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Axis-aligned rectangle in pixel coordinates.
///
/// `x`/`y` is the top-left corner. Produced by the bounding-box scanner and
/// consumed by the crop and fitted-draw transforms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Check if the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge (`x + width`), saturating.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge (`y + height`), saturating.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}
