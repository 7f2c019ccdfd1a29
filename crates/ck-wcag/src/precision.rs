//! Significant-Digit Rounding
//!
//! Display values are rounded to a fixed number of significant digits,
//! matching JavaScript's `Number.toPrecision` for the [1, 21] ratio range.

/// Round to `digits` significant digits.
pub fn round_to_sig(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits as i32 - 1 - magnitude);
    (value * factor).round() / factor
}

/// Format with `digits` significant digits.
///
/// Trailing zeros are kept: 21 formats as "21.0", 1 as "1.00". The decimal
/// count is derived from the magnitude after rounding, so 9.996 formats as
/// "10.0" rather than "10.00".
pub fn format_sig(value: f64, digits: u32) -> String {
    let rounded = round_to_sig(value, digits);
    if rounded == 0.0 || !rounded.is_finite() {
        return format!("{:.*}", digits.saturating_sub(1) as usize, rounded);
    }
    let magnitude = rounded.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    format!("{rounded:.decimals$}")
}
