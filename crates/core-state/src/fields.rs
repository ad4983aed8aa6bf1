//! Editing state of the four numeric inputs.
//!
//! The focused field keeps the raw text the user typed so partial entries
//! (`1` on the way to `12`) stay visible. Every edit is pushed through
//! `GridField::coerce` into the configuration immediately; when focus moves
//! away the text resyncs to the stored value.
//!
//! Freshly seeded text (on focus, or after a step) counts as selected: the
//! first digit replaces it and the first Backspace clears it, so focusing
//! Columns at `4` and typing `6` yields `6`, not `46`.

use core_grid::{GridConfiguration, GridField};

/// Longest text a field accepts (values top out at two digits).
pub const FIELD_MAX_CHARS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    focused: Option<GridField>,
    text: String,
    selected: bool,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<GridField> {
        self.focused
    }

    /// Raw text of the focused field, if any.
    pub fn text(&self) -> Option<&str> {
        self.focused.map(|_| self.text.as_str())
    }

    /// Text to display for `field`: the edit text when focused, the stored value otherwise.
    pub fn display(&self, field: GridField, config: &GridConfiguration) -> String {
        if self.focused == Some(field) {
            self.text.clone()
        } else {
            config.get(field).to_string()
        }
    }

    /// Move focus to `field` (or clear it), seeding the edit text from `config`.
    pub fn focus(&mut self, field: Option<GridField>, config: &GridConfiguration) {
        self.focused = field;
        self.text.clear();
        self.selected = field.is_some();
        if let Some(f) = field {
            self.text.push_str(&config.get(f).to_string());
        }
    }

    /// Append a digit. Returns the coerced value written to `config`, or
    /// `None` when nothing is focused or the character was rejected.
    pub fn push_char(&mut self, ch: char, config: &mut GridConfiguration) -> Option<u16> {
        let field = self.focused?;
        if !ch.is_ascii_digit() {
            return None;
        }
        if self.selected || self.text.len() >= FIELD_MAX_CHARS {
            // Typing over a selected or full field starts a new number.
            self.text.clear();
        }
        self.selected = false;
        self.text.push(ch);
        Some(config.set_from_text(field, &self.text))
    }

    /// Remove the last character; an empty field coerces to its fallback.
    pub fn backspace(&mut self, config: &mut GridConfiguration) -> Option<u16> {
        let field = self.focused?;
        if self.selected {
            self.text.clear();
            self.selected = false;
        } else {
            self.text.pop();
        }
        Some(config.set_from_text(field, &self.text))
    }

    /// Step the focused value within its range and resync the text.
    pub fn step(&mut self, delta: i16, config: &mut GridConfiguration) -> Option<u16> {
        let field = self.focused?;
        let value = field.step(config.get(field), delta);
        config.set(field, value);
        self.text = value.to_string();
        self.selected = true;
        Some(value)
    }
}
