//! Content detection: luminance transform followed by the bounding-box scan.

use crate::frame::RgbaFrame;
use crate::luminance::LuminanceModel;
use crate::Rect;

/// Settings for [`detect_content_bounds`].
///
/// Serialized with camelCase keys so the same object can be stored by the
/// web client, e.g. `{ "model": "blueInk", "threshold": 32 }`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectOptions {
    /// Transform used to derive the ink signal
    pub model: LuminanceModel,
    /// Signal level a pixel must strictly exceed to count as ink
    pub threshold: f64,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            model: LuminanceModel::Standard,
            // Any nonzero signal counts
            threshold: 0.0,
        }
    }
}

impl DetectOptions {
    pub fn new(model: LuminanceModel, threshold: f64) -> Self {
        Self { model, threshold }
    }
}

/// Transform `frame` in place with `options.model`, then return its ink bounds.
///
/// The frame is left holding the inverted signal, so callers that need the
/// original colors must clone it first.
pub fn detect_content_bounds(frame: &mut RgbaFrame, options: &DetectOptions) -> Rect {
    options.model.apply(&mut frame.pixels);
    frame.bounding_box(options.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(frame: &mut RgbaFrame, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = ((y * frame.width + x) * 4) as usize;
        frame.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    #[test]
    fn test_default_options() {
        let opts = DetectOptions::default();
        assert_eq!(opts.model, LuminanceModel::Standard);
        assert_eq!(opts.threshold, 0.0);
    }

    #[test]
    fn test_dark_stroke_on_white() {
        let mut frame = RgbaFrame::filled(28, 28, [255, 255, 255, 255]);
        for x in 6..=20 {
            put(&mut frame, x, 9, [0, 0, 0, 255]);
        }
        put(&mut frame, 13, 22, [30, 30, 30, 255]);

        let opts = DetectOptions::new(LuminanceModel::Standard, 128.0);
        let rect = detect_content_bounds(&mut frame, &opts);
        assert_eq!(rect, Rect::new(6, 9, 14, 13));

        // Frame now holds the inverted signal
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(frame.pixel(6, 9), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_blank_canvas_falls_back_to_full_frame() {
        let mut frame = RgbaFrame::filled(16, 12, [255, 255, 255, 255]);
        let rect = detect_content_bounds(&mut frame, &DetectOptions::default());
        assert_eq!(rect, Rect::full(16, 12));
    }

    #[test]
    fn test_blue_ink_ignores_other_marks() {
        let mut frame = RgbaFrame::filled(10, 10, [255, 255, 255, 255]);
        // Black scribble would count under the standard model
        put(&mut frame, 0, 0, [0, 0, 0, 255]);
        put(&mut frame, 9, 9, [0, 10, 255, 255]);
        // Blue stroke
        put(&mut frame, 3, 4, [0, 0, 255, 255]);
        put(&mut frame, 6, 5, [0, 0, 180, 255]);

        let opts = DetectOptions::new(LuminanceModel::BlueInk, 0.0);
        let rect = detect_content_bounds(&mut frame, &opts);
        assert_eq!(rect, Rect::new(3, 4, 3, 1));
    }
}
