//! Grid configuration and the coercion rules of its four input fields.
//!
//! Field input never fails: empty, non-numeric or out-of-range text collapses
//! to the field's fallback (1 for dimensions, 0 for gaps).

use std::ops::RangeInclusive;

pub const DEFAULT_COLUMNS: u16 = 4;
pub const DEFAULT_ROWS: u16 = 3;
pub const DEFAULT_GAP: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfiguration {
    pub columns: u16,
    pub rows: u16,
    pub column_gap: u16,
    pub row_gap: u16,
}

impl Default for GridConfiguration {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            column_gap: DEFAULT_GAP,
            row_gap: DEFAULT_GAP,
        }
    }
}

/// One of the four numeric inputs of the configuration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridField {
    Columns,
    Rows,
    ColumnGap,
    RowGap,
}

impl GridField {
    /// Panel order (also the Tab focus order).
    pub const ALL: [GridField; 4] = [
        GridField::Columns,
        GridField::Rows,
        GridField::ColumnGap,
        GridField::RowGap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GridField::Columns => "Columns",
            GridField::Rows => "Rows",
            GridField::ColumnGap => "Col gap",
            GridField::RowGap => "Row gap",
        }
    }

    pub fn range(self) -> RangeInclusive<u16> {
        match self {
            GridField::Columns | GridField::Rows => 1..=12,
            GridField::ColumnGap | GridField::RowGap => 0..=16,
        }
    }

    /// Value used when the entered text is unusable.
    pub fn fallback(self) -> u16 {
        match self {
            GridField::Columns | GridField::Rows => 1,
            GridField::ColumnGap | GridField::RowGap => 0,
        }
    }

    /// Parse raw field text. Anything unparsable or outside `range()` yields
    /// `fallback()`.
    pub fn coerce(self, raw: &str) -> u16 {
        match raw.trim().parse::<u16>() {
            Ok(value) if self.range().contains(&value) => value,
            _ => self.fallback(),
        }
    }

    /// Like `coerce` but for already-numeric input (config files).
    pub fn coerce_value(self, value: i64) -> u16 {
        match u16::try_from(value) {
            Ok(v) if self.range().contains(&v) => v,
            _ => self.fallback(),
        }
    }

    /// Increment/decrement `value` by `delta`, saturating at the range bounds.
    pub fn step(self, value: u16, delta: i16) -> u16 {
        let range = self.range();
        let next = i32::from(value) + i32::from(delta);
        next.clamp(i32::from(*range.start()), i32::from(*range.end())) as u16
    }

    pub fn next(self) -> GridField {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> GridField {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl GridConfiguration {
    pub fn get(&self, field: GridField) -> u16 {
        match field {
            GridField::Columns => self.columns,
            GridField::Rows => self.rows,
            GridField::ColumnGap => self.column_gap,
            GridField::RowGap => self.row_gap,
        }
    }

    /// Store `value` verbatim. Callers coerce first.
    pub fn set(&mut self, field: GridField, value: u16) {
        match field {
            GridField::Columns => self.columns = value,
            GridField::Rows => self.rows = value,
            GridField::ColumnGap => self.column_gap = value,
            GridField::RowGap => self.row_gap = value,
        }
    }

    /// Coerce raw text and store the result. Returns the stored value.
    pub fn set_from_text(&mut self, field: GridField, raw: &str) -> u16 {
        let value = field.coerce(raw);
        self.set(field, value);
        value
    }

    /// True when `(row, col)` names a rendered cell of this grid.
    pub fn contains_cell(&self, row: u16, col: u16) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.columns).contains(&col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_panel() {
        let cfg = GridConfiguration::default();
        assert_eq!(cfg.columns, 4);
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.column_gap, 4);
        assert_eq!(cfg.row_gap, 4);
    }

    #[test]
    fn coerce_accepts_in_range_numbers() {
        assert_eq!(GridField::Columns.coerce("12"), 12);
        assert_eq!(GridField::Rows.coerce(" 7 "), 7);
        assert_eq!(GridField::RowGap.coerce("16"), 16);
        assert_eq!(GridField::ColumnGap.coerce("0"), 0);
    }

    #[test]
    fn coerce_falls_back_on_garbage() {
        assert_eq!(GridField::Columns.coerce(""), 1);
        assert_eq!(GridField::Rows.coerce("abc"), 1);
        assert_eq!(GridField::ColumnGap.coerce("-3"), 0);
        assert_eq!(GridField::RowGap.coerce("4.5"), 0);
    }

    #[test]
    fn coerce_falls_back_when_out_of_range() {
        assert_eq!(GridField::Columns.coerce("0"), 1);
        assert_eq!(GridField::Columns.coerce("13"), 1);
        assert_eq!(GridField::RowGap.coerce("17"), 0);
        assert_eq!(GridField::Rows.coerce("99999999"), 1);
        assert_eq!(GridField::Rows.coerce_value(-1), 1);
        assert_eq!(GridField::ColumnGap.coerce_value(8), 8);
    }

    #[test]
    fn step_saturates_at_bounds() {
        assert_eq!(GridField::Columns.step(12, 1), 12);
        assert_eq!(GridField::Columns.step(1, -1), 1);
        assert_eq!(GridField::RowGap.step(0, -5), 0);
        assert_eq!(GridField::RowGap.step(4, 1), 5);
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(GridField::RowGap.next(), GridField::Columns);
        assert_eq!(GridField::Columns.prev(), GridField::RowGap);
        assert_eq!(GridField::Rows.next(), GridField::ColumnGap);
    }

    #[test]
    fn set_from_text_writes_fallback() {
        let mut cfg = GridConfiguration::default();
        assert_eq!(cfg.set_from_text(GridField::Columns, "x"), 1);
        assert_eq!(cfg.columns, 1);
        assert_eq!(cfg.set_from_text(GridField::ColumnGap, "9"), 9);
        assert_eq!(cfg.column_gap, 9);
    }
}
