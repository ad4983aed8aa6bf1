//! Screen regions.
//!
//! The screen is a fixed stack of rows with the body split into two panels:
//!
//! ```text
//! row 0        title
//! row 1        configuration fields
//! row 2        syntax / reset / copy buttons
//! row 3        panel headings
//! rows 4..h-1  canvas | code panel
//! row h-1      status line
//! ```
//!
//! Invariants:
//! * Every region lies inside the reported terminal size (regions may be
//!   empty on very small terminals, never out of bounds).
//! * Field and button regions never overlap each other.
//! * The canvas and code panel share the body rows and are separated by a
//!   single divider column.

use crate::Button;
use crate::canvas::CanvasGeometry;
use core_grid::{GridConfiguration, GridField};

/// Rows above the body panels.
pub const HEADER_ROWS: u16 = 4;
const FIELD_SPACING: u16 = 3;
const BUTTON_SPACING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// First column past the right edge.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Clip to a `width` x `height` screen.
    fn clipped(self, width: u16, height: u16) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }
}

/// Text shown inside a field slot: `Label [NN]`.
pub fn field_slot_width(field: GridField) -> u16 {
    field.label().len() as u16 + 5
}

/// Text shown inside a button slot: `[ Label ]`.
pub fn button_slot_width(button: Button) -> u16 {
    button.label().len() as u16 + 4
}

#[derive(Debug, Clone)]
pub struct ScreenLayout {
    width: u16,
    height: u16,
    title: LayoutRegion,
    fields: Vec<(GridField, LayoutRegion)>,
    buttons: Vec<(Button, LayoutRegion)>,
    headings: LayoutRegion,
    canvas: CanvasGeometry,
    code_panel: LayoutRegion,
    status: LayoutRegion,
}

impl ScreenLayout {
    /// Compute the layout for a `width` x `height` terminal showing `config`.
    /// Called again on every resize and every configuration change.
    pub fn compute(width: u16, height: u16, config: &GridConfiguration) -> Self {
        let title = LayoutRegion::new(0, 0, width, 1).clipped(width, height);

        let mut x = 1u16;
        let mut fields = Vec::with_capacity(GridField::ALL.len());
        for field in GridField::ALL {
            let w = field_slot_width(field);
            fields.push((field, LayoutRegion::new(x, 1, w, 1).clipped(width, height)));
            x = x.saturating_add(w + FIELD_SPACING);
        }

        let mut x = 1u16;
        let mut buttons = Vec::with_capacity(Button::ALL.len());
        for button in Button::ALL {
            let w = button_slot_width(button);
            buttons.push((button, LayoutRegion::new(x, 2, w, 1).clipped(width, height)));
            x = x.saturating_add(w + BUTTON_SPACING);
        }

        let headings = LayoutRegion::new(0, 3, width, 1).clipped(width, height);
        let body_height = height.saturating_sub(HEADER_ROWS + 1);
        let canvas_width = (u32::from(width) * 3 / 5) as u16;
        let canvas_region = LayoutRegion::new(0, HEADER_ROWS, canvas_width, body_height)
            .clipped(width, height);
        let code_x = canvas_width.saturating_add(1);
        let code_panel = LayoutRegion::new(
            code_x,
            HEADER_ROWS,
            width.saturating_sub(code_x),
            body_height,
        )
        .clipped(width, height);
        let status = LayoutRegion::new(0, height.saturating_sub(1), width, height.min(1));

        Self {
            width,
            height,
            title,
            fields,
            buttons,
            headings,
            canvas: CanvasGeometry::compute(canvas_region, config),
            code_panel,
            status,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn title(&self) -> &LayoutRegion {
        &self.title
    }

    pub fn fields(&self) -> &[(GridField, LayoutRegion)] {
        &self.fields
    }

    pub fn buttons(&self) -> &[(Button, LayoutRegion)] {
        &self.buttons
    }

    pub fn headings(&self) -> &LayoutRegion {
        &self.headings
    }

    pub fn canvas(&self) -> &CanvasGeometry {
        &self.canvas
    }

    pub fn code_panel(&self) -> &LayoutRegion {
        &self.code_panel
    }

    /// Divider column between the canvas and the code panel.
    pub fn divider_x(&self) -> u16 {
        self.canvas.region().right()
    }

    pub fn status(&self) -> &LayoutRegion {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_inside_screen() {
        let l = ScreenLayout::compute(100, 30, &GridConfiguration::default());
        assert_eq!(l.size(), (100, 30));
        assert_eq!(*l.title(), LayoutRegion::new(0, 0, 100, 1));
        assert_eq!(l.canvas().region().y, HEADER_ROWS);
        assert_eq!(l.canvas().region().width, 60);
        assert_eq!(l.canvas().region().height, 25);
        assert_eq!(l.code_panel().x, 61);
        assert_eq!(l.code_panel().width, 39);
        assert_eq!(l.divider_x(), 60);
        assert_eq!(*l.status(), LayoutRegion::new(0, 29, 100, 1));
    }

    #[test]
    fn controls_do_not_overlap() {
        let l = ScreenLayout::compute(120, 40, &GridConfiguration::default());
        for pair in l.fields().windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
        for pair in l.buttons().windows(2) {
            assert!(pair[0].1.right() <= pair[1].1.x);
        }
        let (first, region) = l.fields()[0];
        assert_eq!(first, GridField::Columns);
        assert_eq!(region.width, field_slot_width(GridField::Columns));
    }

    #[test]
    fn tiny_terminal_yields_empty_regions() {
        let l = ScreenLayout::compute(3, 2, &GridConfiguration::default());
        assert!(l.canvas().region().is_empty());
        assert!(l.code_panel().is_empty());
        for (_, r) in l.fields() {
            assert!(r.right() <= 3);
        }
    }

    #[test]
    fn region_contains_is_half_open() {
        let r = LayoutRegion::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }
}
