//! Fitted drawing: place a source image inside a destination without stretching.
//!
//! The source (or a region of it) is scaled uniformly and centered. The bands
//! left over on the sides, or on the top and bottom, are filled with a
//! background color.

use image::{imageops, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::frame::{PixelError, RgbaFrame};
use crate::Rect;

/// Filter type for scaling the source during a fitted draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, keeps hard edges).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> imageops::FilterType {
        match self {
            FilterType::Nearest => imageops::FilterType::Nearest,
            FilterType::Bilinear => imageops::FilterType::Triangle,
            FilterType::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

/// Where a fitted source lands in the destination, in destination pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub dx: f64,
    pub dy: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Round to whole pixels, keeping at least 1x1 and staying inside the destination.
    pub fn to_pixel_rect(self, dest_width: u32, dest_height: u32) -> Rect {
        let width = (self.width.round() as u32).clamp(1, dest_width.max(1));
        let height = (self.height.round() as u32).clamp(1, dest_height.max(1));
        let x = (self.dx.round() as u32).min(dest_width.saturating_sub(width));
        let y = (self.dy.round() as u32).min(dest_height.saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

/// Compute a centered, aspect-preserving placement of `src` in the destination.
///
/// When the destination is relatively wider than the source, the full
/// destination height is used and bands appear left and right; otherwise the
/// full width is used and bands appear on top and bottom.
///
/// An empty `src` maps to the whole destination.
pub fn fit_placement(dest_width: u32, dest_height: u32, src: Rect) -> Placement {
    let dw = dest_width as f64;
    let dh = dest_height as f64;

    if src.is_empty() {
        return Placement {
            dx: 0.0,
            dy: 0.0,
            width: dw,
            height: dh,
        };
    }

    let sw = src.width as f64;
    let sh = src.height as f64;

    let (width, height) = if dw / sw > dh / sh {
        (dh * (sw / sh), dh)
    } else {
        (dw, dw * (sh / sw))
    };

    Placement {
        dx: (dw - width) / 2.0,
        dy: (dh - height) / 2.0,
        width,
        height,
    }
}

/// Draw `src` onto `dest`, filling it without stretching the image.
///
/// # Arguments
///
/// * `dest` - Destination frame; every pixel is overwritten
/// * `background` - RGBA color for the empty bands
/// * `src` - Source frame
/// * `src_rect` - Region of `src` to draw; `None` draws the whole source
/// * `filter` - Interpolation used to scale the source
///
/// The source is alpha-composited over the background, so transparent source
/// pixels show the background color.
///
/// # Errors
///
/// * `InvalidDimensions` if `dest` has zero width or height
/// * `InvalidRect` if `src_rect` is empty or extends past `src`
/// * `SizeMismatch` if either frame's buffer doesn't match its dimensions
/// * `InvalidDimensions` if either frame's byte length overflows `usize`
pub fn draw_image_fitted(
    dest: &mut RgbaFrame,
    background: [u8; 4],
    src: &RgbaFrame,
    src_rect: Option<Rect>,
    filter: FilterType,
) -> Result<(), PixelError> {
    if dest.width == 0 || dest.height == 0 {
        return Err(PixelError::InvalidDimensions {
            width: dest.width,
            height: dest.height,
        });
    }
    dest.validate()?;
    src.validate()?;

    let region = src_rect.unwrap_or_else(|| src.bounds());
    if region.is_empty() || region.right() > src.width || region.bottom() > src.height {
        return Err(PixelError::InvalidRect {
            rect: region,
            width: src.width,
            height: src.height,
        });
    }

    let src_image = src.to_rgba_image().ok_or(PixelError::InvalidDimensions {
        width: src.width,
        height: src.height,
    })?;
    let cropped =
        imageops::crop_imm(&src_image, region.x, region.y, region.width, region.height).to_image();

    let target =
        fit_placement(dest.width, dest.height, region).to_pixel_rect(dest.width, dest.height);
    let scaled = if (target.width, target.height) == cropped.dimensions() {
        cropped
    } else {
        imageops::resize(&cropped, target.width, target.height, filter.to_image_filter())
    };

    let mut canvas = RgbaImage::from_pixel(dest.width, dest.height, Rgba(background));
    imageops::overlay(&mut canvas, &scaled, i64::from(target.x), i64::from(target.y));

    *dest = RgbaFrame::from_rgba_image(canvas);
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
