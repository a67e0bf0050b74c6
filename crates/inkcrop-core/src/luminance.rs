//! Inverted grayscale transforms for ink detection.
//!
//! Both transforms rewrite an RGBA buffer in place so that R, G and B carry a
//! single "ink signal" and alpha is left untouched. A high signal means ink,
//! which is what the bounding-box scanner thresholds on.
//!
//! - [`to_grayscale_inverted`] uses ITU-R BT.601 luma weights, inverted so
//!   dark strokes on a light background come out bright.
//! - [`blue_to_grayscale_inverted`] keeps only pure-blue pixels (R = G = 0),
//!   using the blue channel itself as the signal.

use crate::CHANNELS;

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMA_R: f64 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMA_G: f64 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMA_B: f64 = 0.114;

/// Which transform turns a captured frame into an ink signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LuminanceModel {
    /// Perceptual luminance, inverted. Suits dark ink on paper or a light canvas.
    #[default]
    Standard,
    /// Pure-blue isolation. Suits strokes drawn in `rgb(0, 0, b)`.
    BlueInk,
}

impl LuminanceModel {
    /// Apply this model's transform to an RGBA buffer in place.
    pub fn apply(self, pixels: &mut [u8]) {
        map_rgb_in_place(pixels, |r, g, b| self.signal(r, g, b));
    }

    /// Signal value this model produces for a single pixel.
    #[inline]
    pub fn signal(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            LuminanceModel::Standard => inverted_luminance(r, g, b),
            LuminanceModel::BlueInk => blue_ink(r, g, b),
        }
    }
}

impl From<u8> for LuminanceModel {
    /// 1 selects `BlueInk`; anything else falls back to `Standard`.
    fn from(value: u8) -> Self {
        match value {
            1 => LuminanceModel::BlueInk,
            _ => LuminanceModel::Standard,
        }
    }
}

/// Inverted luminance of an RGB triple: `255 - floor(0.299 R + 0.587 G + 0.114 B)`.
///
/// White maps to 0 and black to 255.
#[inline]
pub fn inverted_luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64;
    // Weights sum to 1, so the floor always lands in 0..=255
    255 - lum.floor().clamp(0.0, 255.0) as u8
}

/// Blue-ink signal of an RGB triple: `b` when red and green are both zero, else 0.
#[inline]
pub fn blue_ink(r: u8, g: u8, b: u8) -> u8 {
    if r == 0 && g == 0 {
        b
    } else {
        0
    }
}

/// Convert an RGBA buffer to inverted grayscale in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
///
/// Alpha is preserved. A trailing partial pixel is left untouched.
pub fn to_grayscale_inverted(pixels: &mut [u8]) {
    map_rgb_in_place(pixels, inverted_luminance);
}

/// Replace every pixel with its blue-ink signal in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
///
/// Alpha is preserved. A trailing partial pixel is left untouched.
pub fn blue_to_grayscale_inverted(pixels: &mut [u8]) {
    map_rgb_in_place(pixels, blue_ink);
}

#[inline]
fn map_rgb_in_place(pixels: &mut [u8], signal: impl Fn(u8, u8, u8) -> u8) {
    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let value = signal(chunk[0], chunk[1], chunk[2]);
        chunk[0] = value;
        chunk[1] = value;
        chunk[2] = value;
    }
}
