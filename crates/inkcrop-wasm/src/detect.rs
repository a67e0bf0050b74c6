//! Ink detection WASM bindings.
//!
//! Exposes the in-place luminance transforms, the bounding-box scanner and
//! the combined detection pipeline.

use inkcrop_core::frame::rgba_len;
use inkcrop_core::{
    blue_to_grayscale_inverted as core_blue_to_grayscale_inverted,
    detect_content_bounds as core_detect_content_bounds,
    find_bounding_box as core_find_bounding_box,
    to_grayscale_inverted as core_to_grayscale_inverted, DetectOptions, LuminanceModel, Rect,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

use crate::console;
use crate::types::{JsRect, JsRgbaImage};

/// Detection settings wrapper for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsDetectOptions {
    inner: DetectOptions,
}

#[wasm_bindgen]
impl JsDetectOptions {
    /// Create options with default values (standard model, threshold 0)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Luminance model: 0 = standard, 1 = blue ink
    #[wasm_bindgen(getter)]
    pub fn model(&self) -> u8 {
        match self.inner.model {
            LuminanceModel::Standard => 0,
            LuminanceModel::BlueInk => 1,
        }
    }

    /// Set luminance model (unknown values select standard)
    #[wasm_bindgen(setter)]
    pub fn set_model(&mut self, value: u8) {
        self.inner.model = LuminanceModel::from(value);
    }

    /// Get threshold value
    #[wasm_bindgen(getter)]
    pub fn threshold(&self) -> f64 {
        self.inner.threshold
    }

    /// Set threshold value
    #[wasm_bindgen(setter)]
    pub fn set_threshold(&mut self, value: f64) {
        self.inner.threshold = value;
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<JsDetectOptions, JsValue> {
        let inner: DetectOptions =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsDetectOptions {
    pub(crate) fn inner(&self) -> &DetectOptions {
        &self.inner
    }
}

/// Convert RGBA pixels to inverted grayscale in place.
///
/// Takes the `Uint8ClampedArray` from `ImageData` directly; the result is
/// written back into it.
///
/// # Example (TypeScript)
/// ```typescript
/// const data = ctx.getImageData(0, 0, w, h);
/// to_grayscale_inverted(data.data);
/// ```
#[wasm_bindgen]
pub fn to_grayscale_inverted(pixels: Clamped<&mut [u8]>) {
    core_to_grayscale_inverted(pixels.0);
}

/// Keep only pure-blue pixels as an ink signal, in place.
#[wasm_bindgen]
pub fn blue_to_grayscale_inverted(pixels: Clamped<&mut [u8]>) {
    core_blue_to_grayscale_inverted(pixels.0);
}

/// Find the bounding box of pixels whose red sample exceeds `threshold`.
///
/// # Arguments
/// * `pixels` - Transformed RGBA pixel data (4 bytes per pixel, row-major)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - Signal level a pixel must strictly exceed
///
/// # Returns
/// The ink rectangle, or the whole image when nothing qualifies. A buffer
/// whose length doesn't match the dimensions is treated as containing no ink.
///
/// # Example (TypeScript)
/// ```typescript
/// to_grayscale_inverted(data.data);
/// const box = find_bounding_box(data.data, data.width, data.height, 128);
/// ctx.strokeRect(box.x, box.y, box.width, box.height);
/// ```
#[wasm_bindgen]
pub fn find_bounding_box(
    pixels: Clamped<&[u8]>,
    width: u32,
    height: u32,
    threshold: f64,
) -> JsRect {
    let pixels = pixels.0;
    let expected = rgba_len(width, height);
    if expected != Some(pixels.len()) {
        console::warn(&format!(
            "find_bounding_box: expected {:?} bytes for {}x{}, got {}",
            expected,
            width,
            height,
            pixels.len()
        ));
        return Rect::full(width, height).into();
    }
    core_find_bounding_box(pixels, width, height, threshold).into()
}

/// Transform `image` in place with the configured model and return its ink bounds.
///
/// # Example (TypeScript)
/// ```typescript
/// const opts = new JsDetectOptions();
/// opts.model = 1;       // blue ink
/// opts.threshold = 32;
/// const box = detect_content_bounds(image, opts);
/// const digit = crop_to_rect(original, box);
/// ```
#[wasm_bindgen]
pub fn detect_content_bounds(image: &mut JsRgbaImage, options: &JsDetectOptions) -> JsRect {
    let rect = core_detect_content_bounds(image.frame_mut(), options.inner());
    if rect == image.frame().bounds() {
        console::debug("detect_content_bounds: no ink above threshold, using full frame");
    }
    rect.into()
}
