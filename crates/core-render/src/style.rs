//! Theme: semantic styles mapped onto concrete terminal colors.
//!
//! Areas are shown in their palette preview color; the live gesture preview
//! uses a fixed translucent-looking highlight so it reads as "not committed".

use crate::{CellFlags, CellStyle, Rgb};
use core_grid::ColorToken;
use crossterm::style::Color;

/// Background of a grid cell not covered by any area.
pub const EMPTY_CELL_BG: Rgb = (55, 65, 81);
/// Background of cells inside the live gesture rectangle.
pub const PREVIEW_BG: Rgb = (191, 219, 254);
pub const PREVIEW_FG: Rgb = (30, 58, 138);
/// Label text drawn over area colors.
pub const LABEL_FG: Rgb = (255, 255, 255);
pub const DIVIDER_FG: Rgb = (107, 114, 128);

pub fn area_bg(token: ColorToken) -> Rgb {
    token.entry().preview
}

pub fn empty_cell() -> CellStyle {
    CellStyle::bg(EMPTY_CELL_BG)
}

pub fn preview_cell() -> CellStyle {
    CellStyle {
        fg: Some(PREVIEW_FG),
        bg: Some(PREVIEW_BG),
        flags: CellFlags::empty(),
    }
}

pub fn area_cell(token: ColorToken) -> CellStyle {
    CellStyle {
        fg: Some(LABEL_FG),
        bg: Some(area_bg(token)),
        flags: CellFlags::BOLD,
    }
}

pub fn title() -> CellStyle {
    CellStyle::with_flags(CellFlags::BOLD)
}

pub fn heading() -> CellStyle {
    CellStyle::with_flags(CellFlags::BOLD | CellFlags::DIM)
}

pub fn divider() -> CellStyle {
    CellStyle {
        fg: Some(DIVIDER_FG),
        ..CellStyle::PLAIN
    }
}

/// Focused field or selected syntax button.
pub fn active_control() -> CellStyle {
    CellStyle::with_flags(CellFlags::REVERSE | CellFlags::BOLD)
}

pub fn status_line() -> CellStyle {
    CellStyle::with_flags(CellFlags::REVERSE)
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}
