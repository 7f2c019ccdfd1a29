//! Color Contrast Checker
//!
//! Single-window WCAG contrast checker. Two editable color fields drive a
//! live preview and five pass/fail conformance badges.
//!
//! # Features
//! - Hex and named color input via ck-color
//! - WCAG 2.x ratio math and ratings via ck-wcag
//! - Software-rendered UI (winit window, CPU framebuffer, bitmap font)

pub mod app;
pub mod form;
pub mod ui;

pub use app::ContrastChecker;
pub use form::{ContrastForm, Field, DEFAULT_BACKGROUND, DEFAULT_TEXT};
