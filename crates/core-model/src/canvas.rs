//! Canvas geometry: where each grid track lands on screen.
//!
//! Tracks are laid out uniformly. Gaps are scaled from rem-ish units to
//! terminal cells (`column_gap / 4` rounded up, at most 2 columns; any
//! positive row gap is a single row). When the tracks do not fit with gaps
//! the gaps collapse to zero; when they still do not fit every track keeps a
//! width of one and the trailing tracks fall off the canvas.

use crate::layout::LayoutRegion;
use core_grid::{CellPos, GridConfiguration};

const MAX_COLUMN_GAP_CELLS: u16 = 2;
const MAX_ROW_GAP_CELLS: u16 = 1;

/// One track (column or row) in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u16,
    pub len: u16,
}

impl Span {
    pub fn end(&self) -> u16 {
        self.start.saturating_add(self.len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisSpot {
    /// 1-indexed track.
    Track(u16),
    /// Gap following the 1-indexed track.
    Gap(u16),
    Beyond,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Axis {
    spans: Vec<Span>,
    gap: u16,
}

impl Axis {
    fn compute(origin: u16, extent: u16, count: u16, gap_hint: u16) -> Self {
        let count = count.max(1);
        let available = |gap: u16| extent.saturating_sub(gap.saturating_mul(count - 1));
        let gap = if available(gap_hint) / count == 0 {
            0
        } else {
            gap_hint
        };
        let len = (available(gap) / count).max(1);
        let spans = (0..count)
            .map(|i| Span {
                start: origin.saturating_add(i.saturating_mul(len.saturating_add(gap))),
                len,
            })
            .collect();
        Self { spans, gap }
    }

    fn locate(&self, p: u16) -> AxisSpot {
        for (i, span) in self.spans.iter().enumerate() {
            if p < span.start {
                return if i == 0 {
                    AxisSpot::Beyond
                } else {
                    AxisSpot::Gap(i as u16)
                };
            }
            if p < span.end() {
                return AxisSpot::Track(i as u16 + 1);
            }
        }
        AxisSpot::Beyond
    }
}

/// What occupies a screen position inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasSpot {
    Cell(CellPos),
    /// Column gap between `(row, left)` and `(row, left + 1)`.
    ColumnGap { row: u16, left: u16 },
    /// Row gap between `(above, col)` and `(above + 1, col)`.
    RowGap { above: u16, col: u16 },
    /// Crossing of a row gap and a column gap; touches four cells.
    Junction { above: u16, left: u16 },
    /// Canvas space not covered by the grid.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasGeometry {
    region: LayoutRegion,
    columns: Axis,
    rows: Axis,
}

impl CanvasGeometry {
    pub fn compute(region: LayoutRegion, config: &GridConfiguration) -> Self {
        let col_gap = config.column_gap.div_ceil(4).min(MAX_COLUMN_GAP_CELLS);
        let row_gap = config.row_gap.div_ceil(4).min(MAX_ROW_GAP_CELLS);
        Self {
            region,
            columns: Axis::compute(region.x, region.width, config.columns, col_gap),
            rows: Axis::compute(region.y, region.height, config.rows, row_gap),
        }
    }

    pub fn region(&self) -> &LayoutRegion {
        &self.region
    }

    pub fn column_spans(&self) -> &[Span] {
        &self.columns.spans
    }

    pub fn row_spans(&self) -> &[Span] {
        &self.rows.spans
    }

    /// Gap widths actually used, `(columns, rows)`.
    pub fn gaps(&self) -> (u16, u16) {
        (self.columns.gap, self.rows.gap)
    }

    /// Screen rectangle of a cell, clipped to the canvas. `None` when the
    /// cell is not part of the grid or fell off the canvas.
    pub fn cell_region(&self, cell: CellPos) -> Option<LayoutRegion> {
        let col = self.columns.spans.get(usize::from(cell.col).checked_sub(1)?)?;
        let row = self.rows.spans.get(usize::from(cell.row).checked_sub(1)?)?;
        if col.start >= self.region.right() || row.start >= self.region.bottom() {
            return None;
        }
        Some(LayoutRegion::new(
            col.start,
            row.start,
            col.len.min(self.region.right() - col.start),
            row.len.min(self.region.bottom() - row.start),
        ))
    }

    /// Classify a screen position. `None` outside the canvas region.
    pub fn locate(&self, x: u16, y: u16) -> Option<CanvasSpot> {
        if !self.region.contains(x, y) {
            return None;
        }
        let spot = match (self.rows.locate(y), self.columns.locate(x)) {
            (AxisSpot::Track(row), AxisSpot::Track(col)) => CanvasSpot::Cell(CellPos::new(row, col)),
            (AxisSpot::Track(row), AxisSpot::Gap(left)) => CanvasSpot::ColumnGap { row, left },
            (AxisSpot::Gap(above), AxisSpot::Track(col)) => CanvasSpot::RowGap { above, col },
            (AxisSpot::Gap(above), AxisSpot::Gap(left)) => CanvasSpot::Junction { above, left },
            _ => CanvasSpot::Empty,
        };
        Some(spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(columns: u16, rows: u16, column_gap: u16, row_gap: u16) -> GridConfiguration {
        GridConfiguration {
            columns,
            rows,
            column_gap,
            row_gap,
        }
    }

    #[test]
    fn default_grid_tracks_and_gaps() {
        let g = CanvasGeometry::compute(LayoutRegion::new(0, 4, 60, 25), &config(4, 3, 4, 4));
        assert_eq!(g.gaps(), (1, 1));
        assert_eq!(g.column_spans()[0], Span { start: 0, len: 14 });
        assert_eq!(g.column_spans()[1], Span { start: 15, len: 14 });
        assert_eq!(g.row_spans()[0], Span { start: 4, len: 7 });
        assert_eq!(g.row_spans()[2], Span { start: 20, len: 7 });
    }

    #[test]
    fn locate_classifies_cells_and_gaps() {
        let g = CanvasGeometry::compute(LayoutRegion::new(0, 4, 60, 25), &config(4, 3, 4, 4));
        assert_eq!(g.locate(0, 4), Some(CanvasSpot::Cell(CellPos::new(1, 1))));
        assert_eq!(g.locate(16, 12), Some(CanvasSpot::Cell(CellPos::new(2, 2))));
        assert_eq!(g.locate(14, 4), Some(CanvasSpot::ColumnGap { row: 1, left: 1 }));
        assert_eq!(g.locate(0, 11), Some(CanvasSpot::RowGap { above: 1, col: 1 }));
        assert_eq!(g.locate(14, 11), Some(CanvasSpot::Junction { above: 1, left: 1 }));
        // 4 * 14 + 3 = 59 columns used, the last one is spare.
        assert_eq!(g.locate(59, 4), Some(CanvasSpot::Empty));
        assert_eq!(g.locate(60, 4), None);
        assert_eq!(g.locate(0, 3), None);
    }

    #[test]
    fn zero_gap_packs_tracks() {
        let g = CanvasGeometry::compute(LayoutRegion::new(0, 0, 12, 6), &config(3, 2, 0, 0));
        assert_eq!(g.gaps(), (0, 0));
        assert_eq!(g.column_spans()[1], Span { start: 4, len: 4 });
        assert_eq!(g.locate(4, 3), Some(CanvasSpot::Cell(CellPos::new(2, 2))));
    }

    #[test]
    fn crowded_canvas_drops_gaps_then_clips() {
        let g = CanvasGeometry::compute(LayoutRegion::new(0, 0, 14, 3), &config(12, 1, 16, 0));
        assert_eq!(g.gaps(), (0, 0));
        assert_eq!(g.column_spans()[0].len, 1);
        let g = CanvasGeometry::compute(LayoutRegion::new(0, 0, 8, 3), &config(12, 1, 0, 0));
        assert!(g.cell_region(CellPos::new(1, 8)).is_some());
        assert!(g.cell_region(CellPos::new(1, 9)).is_none());
    }

    #[test]
    fn cell_region_rejects_cells_outside_grid() {
        let g = CanvasGeometry::compute(LayoutRegion::new(0, 0, 40, 10), &config(4, 3, 4, 4));
        assert!(g.cell_region(CellPos::new(4, 1)).is_none());
        assert!(g.cell_region(CellPos::new(1, 5)).is_none());
        assert!(g.cell_region(CellPos::new(0, 1)).is_none());
    }

    proptest! {
        #[test]
        fn every_visible_cell_locates_to_itself(
            columns in 1u16..=12,
            rows in 1u16..=12,
            column_gap in 0u16..=16,
            row_gap in 0u16..=16,
            width in 1u16..200,
            height in 1u16..60,
        ) {
            let g = CanvasGeometry::compute(
                LayoutRegion::new(2, 4, width, height),
                &config(columns, rows, column_gap, row_gap),
            );
            for row in 1..=rows {
                for col in 1..=columns {
                    let cell = CellPos::new(row, col);
                    if let Some(r) = g.cell_region(cell) {
                        prop_assert_eq!(g.locate(r.x, r.y), Some(CanvasSpot::Cell(cell)));
                        prop_assert_eq!(
                            g.locate(r.right() - 1, r.bottom() - 1),
                            Some(CanvasSpot::Cell(cell))
                        );
                    }
                }
            }
        }
    }
}
