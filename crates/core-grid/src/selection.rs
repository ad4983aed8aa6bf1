//! Drag selection engine.
//!
//! A gesture lives between a pointer press on a cell and the matching release
//! (commit) or canvas exit (cancel). While active, `preview()` yields the
//! inclusive rectangle under the drag; on commit the same rectangle is stored
//! with exclusive end lines.
//!
//! Stray calls are harmless: `extend`, `commit` and `cancel` on an inactive
//! gesture only (re)clear state.

use crate::area::{AreaId, AreaRect, CellPos};
use crate::registry::AreaRegistry;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionGesture {
    pub start: Option<CellPos>,
    pub current: Option<CellPos>,
    pub active: bool,
}

impl SelectionGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, cell: CellPos) {
        trace!(target: "selection", row = cell.row, col = cell.col, "begin");
        self.active = true;
        self.start = Some(cell);
        self.current = Some(cell);
    }

    /// Move the live corner. Returns true when the preview changed.
    pub fn extend(&mut self, cell: CellPos) -> bool {
        if !self.active || self.current == Some(cell) {
            return false;
        }
        trace!(target: "selection", row = cell.row, col = cell.col, "extend");
        self.current = Some(cell);
        true
    }

    /// Commit the normalized rectangle to `registry` and clear the gesture.
    pub fn commit(&mut self, registry: &mut AreaRegistry) -> Option<AreaId> {
        let committed = match (self.active, self.start, self.current) {
            (true, Some(start), Some(current)) => {
                Some(registry.commit(AreaRect::spanning(start, current)).id)
            }
            _ => None,
        };
        self.clear();
        committed
    }

    /// Clear without committing (pointer left the canvas).
    pub fn cancel(&mut self) {
        if self.active {
            trace!(target: "selection", "cancel");
        }
        self.clear();
    }

    /// Inclusive preview bounds expressed as a normalized rectangle.
    pub fn preview(&self) -> Option<AreaRect> {
        match (self.active, self.start, self.current) {
            (true, Some(start), Some(current)) => Some(AreaRect::spanning(start, current)),
            _ => None,
        }
    }

    /// True when the cell lies inside the live preview rectangle.
    pub fn previews(&self, row: u16, col: u16) -> bool {
        self.preview().is_some_and(|r| r.contains(row, col))
    }

    fn clear(&mut self) {
        self.active = false;
        self.start = None;
        self.current = None;
    }
}
