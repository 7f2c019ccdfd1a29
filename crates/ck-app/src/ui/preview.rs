//! Preview Swatch
//!
//! Live sample of the validated pair: background fill with sample text in
//! the text color. Driven by the valid pair only, so a mid-edit invalid
//! value never changes what is shown.

use ck_color::Color;

use super::font::{draw_text, text_width, CHAR_HEIGHT};
use super::{argb, colors, fill_rect, stroke_rect, Rect};

const SAMPLE_LARGE: &str = "The quick brown fox";
const SAMPLE_SMALL: &str = "jumps over the lazy dog";

/// Render the preview panel.
pub fn render(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    rect: Rect,
    background: Color,
    text: Color,
) {
    fill_rect(buffer, buffer_width, buffer_height, rect, argb(background));
    stroke_rect(buffer, buffer_width, buffer_height, rect, colors::BORDER);

    let text_color = argb(text);
    let center_x = rect.x + rect.width / 2;
    let center_y = rect.y + rect.height / 2;

    let large_w = text_width(SAMPLE_LARGE, 2);
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        (center_x.saturating_sub(large_w / 2)) as i32,
        (center_y.saturating_sub(CHAR_HEIGHT * 2 + 4)) as i32,
        SAMPLE_LARGE,
        text_color,
        2,
    );

    let small_w = text_width(SAMPLE_SMALL, 1);
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        (center_x.saturating_sub(small_w / 2)) as i32,
        (center_y + 6) as i32,
        SAMPLE_SMALL,
        text_color,
        1,
    );
}
