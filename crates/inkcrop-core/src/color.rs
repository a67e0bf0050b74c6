//! HSV to RGB conversion for the color picker.

/// Convert an HSV color to 8-bit RGB.
///
/// # Arguments
/// * `h` - Hue (0.0 to 1.0, where 1.0 wraps back to red)
/// * `s` - Saturation (0.0 to 1.0)
/// * `v` - Value (0.0 to 1.0)
///
/// # Returns
/// `[r, g, b]`, each channel rounded from `c * 255`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

#[inline]
fn to_channel(c: f64) -> u8 {
    // `as` saturates, so out-of-range inputs clamp to 0..=255
    (c * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0, 0, 255]);
    }

    #[test]
    fn test_secondaries() {
        assert_eq!(hsv_to_rgb(1.0 / 6.0, 1.0, 1.0), [255, 255, 0]);
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), [0, 255, 255]);
        assert_eq!(hsv_to_rgb(5.0 / 6.0, 1.0, 1.0), [255, 0, 255]);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for h in [0.0, 0.2, 0.5, 0.9] {
            assert_eq!(hsv_to_rgb(h, 0.0, 0.5), [128, 128, 128]);
            assert_eq!(hsv_to_rgb(h, 0.0, 1.0), [255, 255, 255]);
        }
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(0.3, 1.0, 0.0), [0, 0, 0]);
    }

    #[test]
    fn test_hue_one_wraps_to_red() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), [255, 0, 0]);
    }

    #[test]
    fn test_half_saturation() {
        // h = 0: (v, t, p) with f = 0 -> t = p = 0.5
        assert_eq!(hsv_to_rgb(0.0, 0.5, 1.0), [255, 128, 128]);
    }
}
