//! Comprehensive tests for ck-wcag
//!
//! Exercises the full normalize -> ratio -> rating pipeline.

use ck_color::{normalize, Color};
use ck_wcag::{contrast_ratio, evaluate, format_sig, relative_luminance, Rating};

#[test]
fn test_pipeline_from_user_input() {
    let background = normalize("acc8e5").unwrap();
    let text = normalize("#112A46").unwrap();
    let report = evaluate(background, text);
    assert_eq!(report.ratio_text, "8.42:1");
    assert!(report.normal_aaa.is_pass());
}

#[test]
fn test_named_colors_through_pipeline() {
    let report = evaluate(normalize("white").unwrap(), normalize("black").unwrap());
    assert_eq!(report.ratio_text, "21.0:1");
}

#[test]
fn test_symmetry_over_sample_grid() {
    let samples = ["#000000", "#FFFFFF", "#ACC8E5", "#112A46", "#CC0044", "#808080"];
    for a in samples {
        for b in samples {
            let ca = Color::from_hex(a).unwrap();
            let cb = Color::from_hex(b).unwrap();
            assert_eq!(contrast_ratio(ca, cb), contrast_ratio(cb, ca), "{a} vs {b}");
        }
    }
}

#[test]
fn test_luminance_ordering_drives_ratio() {
    // A mid gray against both extremes: the darker pairing wins
    let gray = Color::rgb(128, 128, 128);
    let vs_black = contrast_ratio(gray, Color::BLACK);
    let vs_white = contrast_ratio(gray, Color::WHITE);
    assert!(relative_luminance(gray) < 0.5);
    assert!(vs_black > vs_white);
}

#[test]
fn test_display_formatting_range() {
    // Every ratio in [1, 21] formats with 3 significant digits and parses back
    for step in 0..=200 {
        let ratio = 1.0 + step as f64 * 0.1;
        let text = format_sig(ratio, 3);
        let parsed: f64 = text.parse().unwrap();
        assert!((parsed - ratio).abs() < 0.05, "{ratio} -> {text}");
    }
}

#[test]
fn test_all_fail_scenario() {
    let report = evaluate(normalize("#FFFFFF").unwrap(), normalize("#CCCCCC").unwrap());
    for rating in [
        report.normal_aa,
        report.normal_aaa,
        report.large_aa,
        report.large_aaa,
        report.ui_aa,
    ] {
        assert_eq!(rating, Rating::Fail);
    }
}
