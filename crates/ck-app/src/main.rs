//! Contrast Checker - Main Entry Point

use std::error::Error;

use ck_app::{ContrastChecker, DEFAULT_BACKGROUND, DEFAULT_TEXT};
use ck_color::{normalize, Color};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    log::info!("Starting contrast checker...");

    // Optional initial colors: ck-app [background] [text]
    let background = arg_color(1, DEFAULT_BACKGROUND);
    let text = arg_color(2, DEFAULT_TEXT);

    ContrastChecker::new(background, text).run()?;

    Ok(())
}

/// Parse a positional color argument, falling back to the default.
fn arg_color(index: usize, default: Color) -> Color {
    match std::env::args().nth(index) {
        Some(arg) => match normalize(&arg) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("{}, using {}", e, default.to_hex());
                default
            }
        },
        None => default,
    }
}
