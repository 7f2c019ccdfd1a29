//! Conformance Ratings
//!
//! Maps a contrast ratio to pass/fail for the five WCAG criteria.

use ck_color::Color;

use crate::contrast::contrast_ratio;
use crate::precision::{format_sig, round_to_sig};

/// Minimum ratio for normal text at level AA (and large text AAA).
pub const NORMAL_AA: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const NORMAL_AAA: f64 = 7.0;
/// Minimum ratio for large text and UI components at level AA.
pub const LARGE_AA: f64 = 3.0;

/// Pass/fail rating for one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Pass,
    Fail,
}

impl Rating {
    fn passes(condition: bool) -> Self {
        if condition {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// Contrast report for one color pair
///
/// Derived whole from a background/text pair; never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContrastReport {
    /// Ratio formatted for display, e.g. "8.42:1"
    pub ratio_text: String,
    pub normal_aa: Rating,
    pub normal_aaa: Rating,
    pub large_aa: Rating,
    pub large_aaa: Rating,
    pub ui_aa: Rating,
}

/// Evaluate a background/text pair against all five criteria.
///
/// Thresholds are strict `>` and compare the ratio after rounding to
/// 3 significant digits, so a true ratio of 4.504 displays "4.50:1" and
/// fails normal-text AA.
pub fn evaluate(background: Color, text: Color) -> ContrastReport {
    let raw = contrast_ratio(background, text);
    let ratio = round_to_sig(raw, 3);
    tracing::debug!(
        "Contrast {} on {}: {:.4} (display {})",
        text.to_hex(),
        background.to_hex(),
        raw,
        ratio
    );
    ContrastReport {
        ratio_text: format!("{}:1", format_sig(raw, 3)),
        normal_aa: Rating::passes(ratio > NORMAL_AA),
        normal_aaa: Rating::passes(ratio > NORMAL_AAA),
        large_aa: Rating::passes(ratio > LARGE_AA),
        large_aaa: Rating::passes(ratio > NORMAL_AA),
        ui_aa: Rating::passes(ratio > LARGE_AA),
    }
}
