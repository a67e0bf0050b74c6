//! Color conversion bindings for the color picker.

use wasm_bindgen::prelude::*;

/// Convert HSV (each in 0..1) to `[r, g, b]` bytes.
///
/// # Example (TypeScript)
/// ```typescript
/// const [r, g, b] = hsv2rgb(hue, 1, 1);
/// ctx.fillStyle = `rgb(${r}, ${g}, ${b})`;
/// ```
#[wasm_bindgen]
pub fn hsv2rgb(h: f64, s: f64, v: f64) -> Vec<u8> {
    inkcrop_core::hsv_to_rgb(h, s, v).to_vec()
}
