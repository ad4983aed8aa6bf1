//! Screen model: layout geometry and hit testing.
//!
//! `ScreenLayout` is a pure function of the terminal size and the grid
//! configuration. It is recomputed whenever either changes and is the single
//! place that knows where controls and grid cells sit on screen; both the
//! input translator (terminal position → control or grid cell) and the
//! renderer (control or grid cell → terminal position) read it, so a click
//! always lands on what was drawn under it.
//!
//! Invariants:
//! * `hit_test` returns `Hit::Cell` only for cells inside the configured grid
//!   (1-indexed, `row <= rows`, `col <= columns`).
//! * Gaps and spare canvas space report `Hit::CanvasGap`: the pointer is still
//!   over the canvas but not over a cell.
//! * Controls are tested before panels; they never overlap the body panels.

mod canvas;
mod layout;

pub use canvas::{CanvasGeometry, CanvasSpot, Span};
pub use layout::{HEADER_ROWS, LayoutRegion, ScreenLayout, button_slot_width, field_slot_width};

use core_grid::{CellPos, GridField};

/// Clickable buttons on the control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Tailwind,
    Css,
    Reset,
    Copy,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Tailwind, Button::Css, Button::Reset, Button::Copy];

    pub fn label(self) -> &'static str {
        match self {
            Button::Tailwind => "Tailwind",
            Button::Css => "CSS",
            Button::Reset => "Reset",
            Button::Copy => "Copy",
        }
    }
}

/// Result of mapping a terminal position onto the screen model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell(CellPos),
    CanvasGap,
    Field(GridField),
    Button(Button),
    CodePanel,
    Outside,
}

impl Hit {
    /// True for any position over the canvas, cell or not.
    pub fn on_canvas(&self) -> bool {
        matches!(self, Hit::Cell(_) | Hit::CanvasGap)
    }
}

impl ScreenLayout {
    pub fn hit_test(&self, x: u16, y: u16) -> Hit {
        if let Some((field, _)) = self.fields().iter().find(|(_, r)| r.contains(x, y)) {
            return Hit::Field(*field);
        }
        if let Some((button, _)) = self.buttons().iter().find(|(_, r)| r.contains(x, y)) {
            return Hit::Button(*button);
        }
        match self.canvas().locate(x, y) {
            Some(CanvasSpot::Cell(cell)) => return Hit::Cell(cell),
            Some(_) => return Hit::CanvasGap,
            None => {}
        }
        if self.code_panel().contains(x, y) {
            return Hit::CodePanel;
        }
        Hit::Outside
    }

    pub fn field_region(&self, field: GridField) -> Option<&LayoutRegion> {
        self.fields()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, r)| r)
    }

    pub fn button_region(&self, button: Button) -> Option<&LayoutRegion> {
        self.buttons()
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, r)| r)
    }

    /// Lines of code visible in the code panel.
    pub fn code_rows(&self) -> usize {
        usize::from(self.code_panel().height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::GridConfiguration;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(100, 30, &GridConfiguration::default())
    }

    #[test]
    fn hit_test_finds_controls() {
        let l = layout();
        let rows = l.field_region(GridField::Rows).copied().unwrap();
        assert_eq!(l.hit_test(rows.x, rows.y), Hit::Field(GridField::Rows));
        let copy = l.button_region(Button::Copy).copied().unwrap();
        assert_eq!(l.hit_test(copy.right() - 1, copy.y), Hit::Button(Button::Copy));
        assert_eq!(l.hit_test(0, 1), Hit::Outside);
    }

    #[test]
    fn hit_test_maps_canvas_cells_and_gaps() {
        let l = layout();
        let r = l.canvas().cell_region(CellPos::new(3, 4)).unwrap();
        assert_eq!(l.hit_test(r.x, r.y), Hit::Cell(CellPos::new(3, 4)));
        let (col_gap, _) = l.canvas().gaps();
        assert_eq!(col_gap, 1);
        assert_eq!(l.hit_test(r.x - 1, r.y), Hit::CanvasGap);
        assert!(l.hit_test(r.x - 1, r.y).on_canvas());
    }

    #[test]
    fn hit_test_separates_code_panel_and_divider() {
        let l = layout();
        let code = *l.code_panel();
        assert_eq!(l.hit_test(code.x, code.y), Hit::CodePanel);
        assert_eq!(l.hit_test(l.divider_x(), code.y), Hit::Outside);
        assert_eq!(l.hit_test(5, l.status().y), Hit::Outside);
        assert_eq!(l.code_rows(), 25);
    }

    #[test]
    fn button_labels() {
        let labels: Vec<_> = Button::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["Tailwind", "CSS", "Reset", "Copy"]);
    }
}
