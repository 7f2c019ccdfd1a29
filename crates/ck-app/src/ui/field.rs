//! Color Field Widget
//!
//! Labeled text input showing the raw value as typed, with a swatch of the
//! field's last valid color on the right edge.

use ck_color::Color;

use super::font::{draw_text, CHAR_ADVANCE};
use super::{argb, colors, fill_rect, stroke_rect, Rect};

/// Input box height in pixels
pub const FIELD_HEIGHT: u32 = 28;

/// Label row height above the input box
pub const LABEL_HEIGHT: u32 = 14;

/// Swatch square side inside the input box
const SWATCH_SIZE: usize = 18;

/// Render one color field into `rect` (label row plus input box).
pub fn render(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    rect: Rect,
    label: &str,
    value: &str,
    swatch: Color,
    focused: bool,
) {
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        rect.x as i32,
        rect.y as i32,
        label,
        colors::TEXT_DIM,
        1,
    );

    let box_rect = input_box(rect);
    fill_rect(buffer, buffer_width, buffer_height, box_rect, colors::INPUT_BG);
    let border = if focused { colors::BORDER_FOCUS } else { colors::BORDER };
    stroke_rect(buffer, buffer_width, buffer_height, box_rect, border);

    // Swatch of the last valid color, right-aligned inside the box
    let swatch_rect = Rect::new(
        box_rect.x + box_rect.width.saturating_sub(SWATCH_SIZE + 5),
        box_rect.y + (box_rect.height.saturating_sub(SWATCH_SIZE)) / 2,
        SWATCH_SIZE,
        SWATCH_SIZE,
    );
    fill_rect(buffer, buffer_width, buffer_height, swatch_rect, argb(swatch));
    stroke_rect(buffer, buffer_width, buffer_height, swatch_rect, colors::BORDER);

    // Raw text, truncated to the space left of the swatch
    let text_x = box_rect.x + 8;
    let text_y = box_rect.y + (box_rect.height.saturating_sub(8)) / 2;
    let available = swatch_rect.x.saturating_sub(text_x + 4) / CHAR_ADVANCE;
    let shown: String = value.chars().take(available).collect();
    draw_text(
        buffer,
        buffer_width,
        buffer_height,
        text_x as i32,
        text_y as i32,
        &shown,
        colors::TEXT,
        1,
    );

    if focused {
        let cursor_x = text_x + shown.chars().count() * CHAR_ADVANCE;
        if cursor_x + CHAR_ADVANCE < swatch_rect.x {
            draw_text(
                buffer,
                buffer_width,
                buffer_height,
                cursor_x as i32,
                text_y as i32,
                "_",
                colors::BORDER_FOCUS,
                1,
            );
        }
    }
}

/// The clickable input box inside a field rect.
pub fn input_box(rect: Rect) -> Rect {
    Rect::new(
        rect.x,
        rect.y + LABEL_HEIGHT as usize,
        rect.width,
        rect.height.saturating_sub(LABEL_HEIGHT as usize),
    )
}

/// Total field height (label + input box).
pub fn total_height() -> usize {
    (LABEL_HEIGHT + FIELD_HEIGHT) as usize
}
