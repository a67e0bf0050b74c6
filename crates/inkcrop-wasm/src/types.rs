//! WASM-compatible wrapper types for frames and rectangles.
//!
//! This module provides JavaScript-friendly types that wrap the core inkcrop types,
//! handling the conversion between Rust and JavaScript data representations.

use inkcrop_core::{FilterType, Rect, RgbaFrame};
use wasm_bindgen::prelude::*;

use crate::console;

/// An RGBA frame wrapper for JavaScript.
///
/// Holds the same layout as a canvas `ImageData`: 4 bytes per pixel,
/// row-major, with straight (non-premultiplied) alpha.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `image_data()`
/// copy it out to JavaScript.
#[wasm_bindgen]
pub struct JsRgbaImage {
    inner: RgbaFrame,
}

#[wasm_bindgen]
impl JsRgbaImage {
    /// Create a new JsRgbaImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Fails if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRgbaImage, JsValue> {
        RgbaFrame::new(width, height, pixels)
            .map(Self::from_frame)
            .map_err(console::to_js_error)
    }

    /// Create an image filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> JsRgbaImage {
        Self::from_frame(RgbaFrame::filled(width, height, [r, g, b, a]))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Returns RGBA pixel data as a Uint8ClampedArray, ready for `new ImageData(...)`.
    pub fn image_data(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(self.inner.pixels.as_slice())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRgbaImage {
    pub(crate) fn from_frame(frame: RgbaFrame) -> Self {
        Self { inner: frame }
    }

    pub(crate) fn frame(&self) -> &RgbaFrame {
        &self.inner
    }

    pub(crate) fn frame_mut(&mut self) -> &mut RgbaFrame {
        &mut self.inner
    }
}

/// A pixel rectangle for JavaScript (`x`, `y`, `width`, `height`).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsRect {
    inner: Rect,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> JsRect {
        Self {
            inner: Rect::new(x, y, width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

impl From<Rect> for JsRect {
    fn from(inner: Rect) -> Self {
        Self { inner }
    }
}

impl From<JsRect> for Rect {
    fn from(rect: JsRect) -> Self {
        rect.inner
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, keeps hard edges)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}
