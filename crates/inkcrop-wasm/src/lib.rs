//! Inkcrop WASM - WebAssembly bindings for inkcrop
//!
//! This crate exposes the inkcrop-core primitives to the browser, where the
//! pixels come from canvas `ImageData` (RGBA, 4 bytes per pixel).
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for frames and rectangles
//! - `detect` - Luminance transforms, bounding-box scan, detection pipeline
//! - `transform` - Cropping and fitted drawing
//! - `color` - HSV to RGB conversion
//!
//! # Usage
//!
//! ```typescript
//! import init, { to_grayscale_inverted, find_bounding_box } from '@inkcrop/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! to_grayscale_inverted(data.data);
//! const box = find_bounding_box(data.data, data.width, data.height, 128);
//! ```

use wasm_bindgen::prelude::*;

mod color;
mod console;
mod detect;
mod transform;
mod types;

// Re-export public types
pub use color::hsv2rgb;
pub use detect::{
    blue_to_grayscale_inverted, detect_content_bounds, find_bounding_box, to_grayscale_inverted,
    JsDetectOptions,
};
pub use transform::{crop_to_rect, draw_image_fitted, draw_image_fitted_region};
pub use types::{JsRect, JsRgbaImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Route panics to the browser console
    console_error_panic_hook::set_once();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
