//! Terminal writer: an ordered list of primitive commands flushed once.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is written before `flush_to`.
//! * All positions are absolute (0,0) origin; callers keep them in bounds.
//! * A `SetStyle` fully replaces the previous style (attributes are reset
//!   first), so rows can be repainted independently.
//! * The writer owns no global state; it is a short-lived object per frame.

use crate::style::to_color;
use crate::{Cell, CellFlags, CellStyle};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ClearAll,
    MoveTo(u16, u16),
    SetStyle(CellStyle),
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn set_style(&mut self, style: CellStyle) {
        self.cmds.push(Command::SetStyle(style));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    /// Queue a full row: one `MoveTo`, then one print per run of equally
    /// styled cells.
    pub fn paint_row(&mut self, y: u16, cells: &[Cell]) {
        self.move_to(0, y);
        let mut run = String::new();
        let mut run_style: Option<CellStyle> = None;
        for cell in cells {
            if run_style != Some(cell.style) {
                if let Some(style) = run_style {
                    self.set_style(style);
                    self.print(std::mem::take(&mut run));
                }
                run_style = Some(cell.style);
            }
            run.push(cell.ch);
        }
        if let Some(style) = run_style {
            self.set_style(style);
            self.print(run);
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn print_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, Command::Print(_)))
            .count()
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::ClearAll => {
                    queue!(out, Clear(ClearType::All))?;
                }
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::SetStyle(style) => queue_style(out, style)?,
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

fn queue_style<W: Write>(out: &mut W, style: CellStyle) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(to_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(to_color(bg)))?;
    }
    if style.flags.contains(CellFlags::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.flags.contains(CellFlags::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.flags.contains(CellFlags::REVERSE) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}
