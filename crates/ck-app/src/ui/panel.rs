//! Panel Layout
//!
//! Arranges the two color fields, the swap button, the preview, and the
//! report card, and maps clicks back to actions.

use crate::form::{ContrastForm, Field};

use super::font::draw_char;
use super::{colors, field, fill_rect, preview, report_card, stroke_rect, Rect};

/// Outer margin
const MARGIN: usize = 16;

/// Swap button side
const SWAP_SIZE: usize = 28;

/// Gap between the fields and the swap button
const GAP: usize = 12;

/// What a click on the panel means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Focus(Field),
    Swap,
}

/// Computed pixel layout for one frame
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub background_field: Rect,
    pub text_field: Rect,
    pub swap_button: Rect,
    pub preview: Rect,
    pub report: Rect,
}

impl Layout {
    /// Compute the layout for a window of the given size.
    pub fn compute(width: usize, height: usize) -> Self {
        let content_width = width.saturating_sub(MARGIN * 2);
        let field_width = content_width.saturating_sub(SWAP_SIZE + GAP * 2) / 2;
        let field_height = field::total_height();

        let background_field = Rect::new(MARGIN, MARGIN, field_width, field_height);
        let text_field = Rect::new(
            MARGIN + field_width + SWAP_SIZE + GAP * 2,
            MARGIN,
            field_width,
            field_height,
        );
        let swap_button = Rect::new(
            MARGIN + field_width + GAP,
            MARGIN + field_height.saturating_sub(SWAP_SIZE),
            SWAP_SIZE,
            SWAP_SIZE,
        );

        let preview_y = MARGIN + field_height + GAP;
        let report_height = 120;
        let preview_height = height
            .saturating_sub(preview_y + report_height + MARGIN * 2)
            .max(60);
        let preview = Rect::new(MARGIN, preview_y, content_width, preview_height);
        let report = Rect::new(
            MARGIN,
            preview_y + preview_height + MARGIN,
            content_width,
            report_height,
        );

        Self { background_field, text_field, swap_button, preview, report }
    }

    /// Map a click position to an action.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<PanelAction> {
        if field::input_box(self.background_field).contains(x, y) {
            Some(PanelAction::Focus(Field::Background))
        } else if field::input_box(self.text_field).contains(x, y) {
            Some(PanelAction::Focus(Field::Text))
        } else if self.swap_button.contains(x, y) {
            Some(PanelAction::Swap)
        } else {
            None
        }
    }
}

/// Renders the whole form
#[derive(Debug, Default)]
pub struct Panel;

impl Panel {
    pub fn new() -> Self {
        Self
    }

    /// Render everything into the frame buffer.
    pub fn render(
        &self,
        buffer: &mut [u32],
        buffer_width: usize,
        buffer_height: usize,
        form: &ContrastForm,
    ) {
        let layout = Layout::compute(buffer_width, buffer_height);

        field::render(
            buffer,
            buffer_width,
            buffer_height,
            layout.background_field,
            "Background",
            form.raw(Field::Background),
            form.valid(Field::Background),
            form.focus() == Some(Field::Background),
        );
        field::render(
            buffer,
            buffer_width,
            buffer_height,
            layout.text_field,
            "Text",
            form.raw(Field::Text),
            form.valid(Field::Text),
            form.focus() == Some(Field::Text),
        );

        fill_rect(buffer, buffer_width, buffer_height, layout.swap_button, colors::BUTTON_BG);
        stroke_rect(buffer, buffer_width, buffer_height, layout.swap_button, colors::BORDER);
        draw_char(
            buffer,
            buffer_width,
            buffer_height,
            (layout.swap_button.x + (SWAP_SIZE - 8) / 2) as i32,
            (layout.swap_button.y + (SWAP_SIZE - 8) / 2) as i32,
            '⇄',
            colors::TEXT,
            1,
        );

        preview::render(
            buffer,
            buffer_width,
            buffer_height,
            layout.preview,
            form.valid(Field::Background),
            form.valid(Field::Text),
        );

        report_card::render(buffer, buffer_width, buffer_height, layout.report, form.report());
    }
}
