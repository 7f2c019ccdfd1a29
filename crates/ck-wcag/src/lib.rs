//! WCAG Contrast Math
//!
//! Relative luminance, contrast ratio, and conformance ratings per
//! WCAG 2.x.
//!
//! Features:
//! - sRGB linearization and relative luminance
//! - Order-independent contrast ratio in [1, 21]
//! - Pass/fail ratings for the five AA/AAA criteria

mod contrast;
mod precision;
mod report;

pub use contrast::{contrast_ratio, relative_luminance, srgb_to_linear};
pub use precision::{format_sig, round_to_sig};
pub use report::{evaluate, ContrastReport, Rating};
