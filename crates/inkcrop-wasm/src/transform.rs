//! WASM bindings for cropping and fitted drawing.

use crate::console;
use crate::types::{filter_from_u8, JsRect, JsRgbaImage};
use inkcrop_core::{crop_frame, draw_image_fitted as core_draw_fitted, PixelError, Rect};
use wasm_bindgen::prelude::*;

/// Crop an image to a pixel rectangle.
///
/// The rectangle is clamped to the image and the result is at least 1x1,
/// so the output of `find_bounding_box` can be passed straight in.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const box = detect_content_bounds(signal, opts);
/// const digit = crop_to_rect(original, box);
/// ```
#[wasm_bindgen]
pub fn crop_to_rect(image: &JsRgbaImage, rect: &JsRect) -> JsRgbaImage {
    JsRgbaImage::from_frame(crop_frame(image.frame(), (*rect).into()))
}

/// Draw `src` into `dest`, scaled to fit without stretching.
///
/// Every destination pixel is overwritten: the bands around the fitted
/// source get the `background` color.
///
/// # Arguments
///
/// * `dest` - Destination image, modified in place
/// * `background` - RGBA background color as 4 bytes
/// * `src` - Source image
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
///
/// # Example (TypeScript)
///
/// ```typescript
/// const canvas = JsRgbaImage.filled(28, 28, 0, 0, 0, 255);
/// draw_image_fitted(canvas, new Uint8Array([255, 255, 255, 255]), photo, 1);
/// ```
#[wasm_bindgen]
pub fn draw_image_fitted(
    dest: &mut JsRgbaImage,
    background: &[u8],
    src: &JsRgbaImage,
    filter: u8,
) -> Result<(), JsValue> {
    draw(dest, background, src, None, filter)
}

/// Draw a region of `src` into `dest`, scaled to fit without stretching.
///
/// Same as `draw_image_fitted`, restricted to the source rectangle
/// (`x`, `y`, `width`, `height`). Fails if the rectangle is empty or
/// extends past the source.
#[wasm_bindgen]
pub fn draw_image_fitted_region(
    dest: &mut JsRgbaImage,
    background: &[u8],
    src: &JsRgbaImage,
    src_rect: &JsRect,
    filter: u8,
) -> Result<(), JsValue> {
    draw(dest, background, src, Some((*src_rect).into()), filter)
}

fn draw(
    dest: &mut JsRgbaImage,
    background: &[u8],
    src: &JsRgbaImage,
    src_rect: Option<Rect>,
    filter: u8,
) -> Result<(), JsValue> {
    let background = parse_color(background).ok_or_else(|| {
        let message = format!(
            "Background color must have 4 bytes (RGBA), got {}",
            background.len()
        );
        console::warn(&message);
        JsValue::from_str(&message)
    })?;
    try_draw(dest, background, src, src_rect, filter).map_err(console::to_js_error)
}

fn try_draw(
    dest: &mut JsRgbaImage,
    background: [u8; 4],
    src: &JsRgbaImage,
    src_rect: Option<Rect>,
    filter: u8,
) -> Result<(), PixelError> {
    core_draw_fitted(
        dest.frame_mut(),
        background,
        src.frame(),
        src_rect,
        filter_from_u8(filter),
    )
}

fn parse_color(bytes: &[u8]) -> Option<[u8; 4]> {
    bytes.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_to_rect() {
        let img = JsRgbaImage::filled(100, 100, 1, 2, 3, 4);
        let result = crop_to_rect(&img, &JsRect::new(25, 25, 50, 50));
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 50);
    }

    #[test]
    fn test_crop_to_zero_size_rect() {
        let img = JsRgbaImage::filled(10, 10, 1, 2, 3, 4);
        let result = crop_to_rect(&img, &JsRect::new(4, 4, 0, 0));
        assert_eq!(result.width(), 1);
        assert_eq!(result.height(), 1);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(&[1, 2, 3, 4]), Some([1, 2, 3, 4]));
        assert_eq!(parse_color(&[1, 2, 3]), None);
        assert_eq!(parse_color(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_try_draw_letterbox() {
        let mut dest = JsRgbaImage::filled(4, 2, 0, 0, 0, 0);
        let src = JsRgbaImage::filled(1, 1, 255, 0, 0, 255);

        try_draw(&mut dest, [255, 255, 255, 255], &src, None, 0).unwrap();

        assert_eq!(dest.frame().pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(dest.frame().pixel(1, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_try_draw_bad_region() {
        let mut dest = JsRgbaImage::filled(4, 4, 0, 0, 0, 255);
        let src = JsRgbaImage::filled(2, 2, 255, 0, 0, 255);
        let result = try_draw(&mut dest, [0, 0, 0, 255], &src, Some(Rect::new(1, 1, 5, 5)), 1);
        assert!(result.is_err());
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draw_image_fitted() {
        let mut dest = JsRgbaImage::filled(28, 28, 0, 0, 0, 255);
        let src = JsRgbaImage::filled(56, 28, 0, 0, 255, 255);
        assert!(draw_image_fitted(&mut dest, &[255, 255, 255, 255], &src, 1).is_ok());
        assert_eq!(dest.width(), 28);
    }

    #[wasm_bindgen_test]
    fn test_draw_rejects_short_color() {
        let mut dest = JsRgbaImage::filled(4, 4, 0, 0, 0, 255);
        let src = JsRgbaImage::filled(2, 2, 0, 0, 0, 255);
        assert!(draw_image_fitted(&mut dest, &[255, 255], &src, 1).is_err());
    }

    #[wasm_bindgen_test]
    fn test_draw_region_out_of_bounds() {
        let mut dest = JsRgbaImage::filled(4, 4, 0, 0, 0, 255);
        let src = JsRgbaImage::filled(2, 2, 0, 0, 0, 255);
        let rect = JsRect::new(0, 0, 3, 3);
        assert!(draw_image_fitted_region(&mut dest, &[0, 0, 0, 255], &src, &rect, 1).is_err());
    }
}
