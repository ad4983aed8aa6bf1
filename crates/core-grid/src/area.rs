use crate::palette::ColorToken;

/// 1-indexed cell address (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: u16,
    pub col: u16,
}

impl CellPos {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Session-unique area identity. Allocated by `AreaRegistry`, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub(crate) u64);

impl AreaId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Rectangle in grid-line coordinates. `row_end` / `col_end` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaRect {
    pub row_start: u16,
    pub row_end: u16,
    pub col_start: u16,
    pub col_end: u16,
}

impl AreaRect {
    /// Normalized rectangle covering both cells inclusively, whatever the drag
    /// direction. The `+ 1` turns the last covered cell into its closing grid line.
    pub fn spanning(a: CellPos, b: CellPos) -> Self {
        Self {
            row_start: a.row.min(b.row),
            row_end: a.row.max(b.row) + 1,
            col_start: a.col.min(b.col),
            col_end: a.col.max(b.col) + 1,
        }
    }

    pub fn row_span(&self) -> u16 {
        self.row_end - self.row_start
    }

    pub fn col_span(&self) -> u16 {
        self.col_end - self.col_start
    }

    /// Half-open containment test.
    pub fn contains(&self, row: u16, col: u16) -> bool {
        (self.row_start..self.row_end).contains(&row) && (self.col_start..self.col_end).contains(&col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArea {
    pub id: AreaId,
    pub rect: AreaRect,
    pub color: ColorToken,
}

impl GridArea {
    pub fn contains(&self, row: u16, col: u16) -> bool {
        self.rect.contains(row, col)
    }
}
