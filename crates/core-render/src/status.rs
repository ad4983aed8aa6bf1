//! Status line composition.
//!
//! Two stages, so segments can be reordered or dropped without touching the
//! string formatting:
//! 1. `compose_status` produces ordered `StatusSegment`s from a `StatusContext`.
//! 2. `format_status` joins them with ` | `.
//!
//! An ephemeral message (e.g. copy feedback) replaces the key hint segment
//! while it is alive.

use core_codegen::Syntax;
use core_grid::{AreaRect, GridConfiguration, GridField};

const KEY_HINT: &str = "drag: add area  tab: fields  s: syntax  c: copy  r: reset  q: quit";

/// Everything the status line shows.
pub struct StatusContext<'a> {
    pub syntax: Syntax,
    pub config: &'a GridConfiguration,
    pub area_count: usize,
    pub preview: Option<AreaRect>,
    pub focused: Option<GridField>,
    pub ephemeral: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Syntax(&'static str),
    Grid { columns: u16, rows: u16 },
    Areas(usize),
    /// Live gesture rectangle: rows x cols at its top-left cell.
    Selection(AreaRect),
    Editing(&'static str),
    Message(&'a str),
    Hint(&'static str),
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut out = Vec::with_capacity(6);
    out.push(StatusSegment::Syntax(ctx.syntax.label()));
    out.push(StatusSegment::Grid {
        columns: ctx.config.columns,
        rows: ctx.config.rows,
    });
    out.push(StatusSegment::Areas(ctx.area_count));
    if let Some(rect) = ctx.preview {
        out.push(StatusSegment::Selection(rect));
    }
    if let Some(field) = ctx.focused {
        out.push(StatusSegment::Editing(field.label()));
    }
    match ctx.ephemeral {
        Some(msg) => out.push(StatusSegment::Message(msg)),
        None => out.push(StatusSegment::Hint(KEY_HINT)),
    }
    out
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .map(|seg| match seg {
            StatusSegment::Syntax(label) => format!("[{label}]"),
            StatusSegment::Grid { columns, rows } => format!("{columns}x{rows}"),
            StatusSegment::Areas(1) => "1 area".to_string(),
            StatusSegment::Areas(n) => format!("{n} areas"),
            StatusSegment::Selection(rect) => format!(
                "selecting {}x{} at r{} c{}",
                rect.row_span(),
                rect.col_span(),
                rect.row_start,
                rect.col_start
            ),
            StatusSegment::Editing(label) => format!("editing {label}"),
            StatusSegment::Message(msg) => (*msg).to_string(),
            StatusSegment::Hint(hint) => (*hint).to_string(),
        })
        .collect();
    format!(" {}", parts.join(" | "))
}
