//! Color Parsing & Normalization
//!
//! Turns user-entered color strings into canonical RGB values.
//!
//! Accepted forms:
//! - Hex, with or without leading `#`: `#RGB`, `#RRGGBB`, case-insensitive
//! - CSS named colors (`white`, `rebeccapurple`, ...)

mod color;
mod named;

pub use color::Color;

/// Color parsing error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Normalize a user-entered color string into a [`Color`].
///
/// Tries hex first, then named colors. Surrounding whitespace is ignored.
/// Pure: same input always gives the same result.
pub fn normalize(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();

    if let Some(color) = Color::from_hex(trimmed).or_else(|| Color::from_name(trimmed)) {
        Ok(color)
    } else {
        tracing::trace!("Rejected color input: {:?}", input);
        Err(ColorError::InvalidColor(input.to_string()))
    }
}
