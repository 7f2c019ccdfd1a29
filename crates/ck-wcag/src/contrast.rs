//! Luminance & Contrast Ratio
//!
//! WCAG 2.x relative luminance and contrast ratio.

use ck_color::Color;

/// Convert an 8-bit sRGB channel to linear light.
///
/// sRGB -> linear: if v <= 0.03928: v / 12.92, else ((v + 0.055) / 1.055)^2.4
pub fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color.
///
/// L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin, in [0, 1].
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Contrast ratio between two colors.
///
/// (L_lighter + 0.05) / (L_darker + 0.05), always >= 1 regardless of
/// argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert!(relative_luminance(Color::BLACK) < 1e-9);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_black_on_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_identity_is_1() {
        for c in [Color::BLACK, Color::WHITE, Color::rgb(0xAC, 0xC8, 0xE5)] {
            assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_order_independent() {
        let a = Color::rgb(0xAC, 0xC8, 0xE5);
        let b = Color::rgb(0x11, 0x2A, 0x46);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_gray_on_white() {
        // #767676 on white is the canonical "just about AA" pair
        let ratio = contrast_ratio(Color::rgb(0x76, 0x76, 0x76), Color::WHITE);
        assert!((ratio - 4.54).abs() < 0.01);
    }

    #[test]
    fn test_ratio_in_range() {
        let samples = [
            Color::BLACK,
            Color::WHITE,
            Color::rgb(255, 0, 0),
            Color::rgb(0, 128, 0),
            Color::rgb(17, 42, 70),
        ];
        for a in samples {
            for b in samples {
                let ratio = contrast_ratio(a, b);
                assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {ratio} out of range");
            }
        }
    }
}
