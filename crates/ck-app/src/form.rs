//! Form State
//!
//! Mediates between raw keystrokes and the validated color pair. The raw
//! pair always shows exactly what was typed; the valid pair only ever holds
//! parseable colors and is what drives the contrast report.

use ck_color::{normalize, Color};
use ck_wcag::{evaluate, ContrastReport};

/// Default background, from the original palette
pub const DEFAULT_BACKGROUND: Color = Color { r: 0xAC, g: 0xC8, b: 0xE5 };
/// Default text color
pub const DEFAULT_TEXT: Color = Color { r: 0x11, g: 0x2A, b: 0x46 };

/// Which color field an event targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Background,
    Text,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Self::Background => Self::Text,
            Self::Text => Self::Background,
        }
    }
}

/// Raw field values, exactly as typed (may be mid-edit and invalid)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    pub background: String,
    pub text: String,
}

/// Last known-good colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidPair {
    pub background: Color,
    pub text: Color,
}

/// Reactive form state
///
/// Every mutation of the valid pair synchronously recomputes the report.
#[derive(Debug, Clone)]
pub struct ContrastForm {
    colors: ColorPair,
    valid: ValidPair,
    report: ContrastReport,
    focus: Option<Field>,
}

impl ContrastForm {
    pub fn new(background: Color, text: Color) -> Self {
        Self {
            colors: ColorPair {
                background: background.to_hex(),
                text: text.to_hex(),
            },
            valid: ValidPair { background, text },
            report: evaluate(background, text),
            focus: None,
        }
    }

    /// Raw field text, as typed
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Background => &self.colors.background,
            Field::Text => &self.colors.text,
        }
    }

    /// Last valid color for a field
    pub fn valid(&self, field: Field) -> Color {
        match field {
            Field::Background => self.valid.background,
            Field::Text => self.valid.text,
        }
    }

    pub fn report(&self) -> &ContrastReport {
        &self.report
    }

    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    /// Focus a field, committing whichever field held focus before.
    pub fn set_focus(&mut self, field: Field) {
        if self.focus == Some(field) {
            return;
        }
        self.blur();
        self.focus = Some(field);
    }

    /// Drop focus, committing the focused field first.
    pub fn blur(&mut self) {
        if let Some(field) = self.focus.take() {
            self.commit(field);
        }
    }

    /// Keystroke: the raw field takes the text verbatim; the valid pair
    /// follows only when the text parses.
    pub fn input(&mut self, field: Field, value: &str) {
        *self.raw_mut(field) = value.to_string();
        if let Ok(color) = normalize(value) {
            self.set_valid(field, color);
        }
    }

    /// Append one character to the focused field.
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.focus else { return };
        let mut value = self.raw(field).to_string();
        value.push(c);
        self.input(field, &value);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let Some(field) = self.focus else { return };
        let mut value = self.raw(field).to_string();
        value.pop();
        self.input(field, &value);
    }

    /// Blur semantics: a parseable value is committed in canonical form to
    /// both pairs; anything else reverts the raw field to the last valid
    /// value.
    pub fn commit(&mut self, field: Field) {
        match normalize(self.raw(field)) {
            Ok(color) => {
                *self.raw_mut(field) = color.to_hex();
                self.set_valid(field, color);
            }
            Err(_) => {
                let fallback = self.valid(field).to_hex();
                log::debug!("Reverting {:?} field to {}", field, fallback);
                *self.raw_mut(field) = fallback;
            }
        }
    }

    /// Exchange background and text in both pairs at once.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.colors.background, &mut self.colors.text);
        self.valid = ValidPair {
            background: self.valid.text,
            text: self.valid.background,
        };
        self.recompute();
    }

    fn raw_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Background => &mut self.colors.background,
            Field::Text => &mut self.colors.text,
        }
    }

    fn set_valid(&mut self, field: Field, color: Color) {
        let slot = match field {
            Field::Background => &mut self.valid.background,
            Field::Text => &mut self.valid.text,
        };
        if *slot != color {
            *slot = color;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.report = evaluate(self.valid.background, self.valid.text);
    }
}

impl Default for ContrastForm {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND, DEFAULT_TEXT)
    }
}
