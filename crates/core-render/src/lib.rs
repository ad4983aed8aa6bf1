//! Rendering primitives, frame composition and the row-diff repaint engine.
//!
//! Pipeline per dirty event:
//! 1. `compose::build_frame` paints every region of the `ScreenLayout` into a
//!    fresh `Frame` from `DesignerState` (title, fields, buttons, canvas, code
//!    panel, status line). Composition is pure; nothing touches the terminal.
//! 2. `RenderEngine` compares the new frame with the previously flushed one
//!    and queues writer commands only for rows that differ (all rows after a
//!    resize or on the first frame).
//! 3. `writer::Writer` groups runs of equally styled cells into single prints
//!    and flushes once per frame.
//!
//! Invariants:
//! - One `Cell` per terminal column; every cell holds exactly one printable
//!   `char` (all generated text is ASCII, box drawing uses single-width glyphs).
//! - Writes outside the frame are clipped silently.
//! - The canvas is painted from `grid_view::cell_state`, the single mapping
//!   from (gesture, registry, cell) to what a grid cell shows.

use bitflags::bitflags;

pub mod compose;
pub mod grid_view;
pub mod metrics;
pub mod render_engine;
pub mod status;
pub mod style;
pub mod writer;

/// 24-bit color.
pub type Rgb = (u8, u8, u8);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        const BOLD    = 0b0000_0001;
        const REVERSE = 0b0000_0010;
        const DIM     = 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub flags: CellFlags,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        fg: None,
        bg: None,
        flags: CellFlags::empty(),
    };

    pub fn with_flags(flags: CellFlags) -> Self {
        Self {
            flags,
            ..Self::PLAIN
        }
    }

    pub fn bg(bg: Rgb) -> Self {
        Self {
            bg: Some(bg),
            ..Self::PLAIN
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            style: CellStyle::PLAIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `text` starting at (x, y), clipped to `max_width` columns and
    /// the frame edge. Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: CellStyle) -> u16 {
        let mut written = 0u16;
        for ch in text.chars() {
            if written >= max_width {
                break;
            }
            let cx = x.saturating_add(written);
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch, style);
            written += 1;
        }
        written
    }

    /// Fill a rectangle with `ch` in `style`.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, height: u16, ch: char, style: CellStyle) {
        for dy in 0..height {
            for dx in 0..width {
                self.set(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Re-style a horizontal span without changing its characters.
    pub fn restyle_span(&mut self, x: u16, y: u16, width: u16, style: CellStyle) {
        for dx in 0..width {
            if let Some(i) = self.index(x.saturating_add(dx), y) {
                self.cells[i].style = style;
            }
        }
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        match self.index(0, y) {
            Some(start) => &self.cells[start..start + usize::from(self.width)],
            None => &[],
        }
    }

    /// Row text without styling (tests / diagnostics).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
