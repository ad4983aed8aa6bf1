//! Plain stylesheet + markup.
//!
//! Rules are named by 1-indexed registry position (`.item-1`, `.item-2`, ...).
//! Backgrounds are picked from the literal gradient palette by position, not
//! from the area's stored token.

use core_grid::{AreaRegistry, ColorToken, GridArea, GridConfiguration};
use std::fmt::Write;

pub const CONTAINER_CLASS: &str = "grid-container";
pub const ITEM_RADIUS: &str = "0.75rem";
pub const ITEM_SHADOW: &str =
    "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOutput {
    pub stylesheet: String,
    pub markup: String,
}

/// Gap in rem: one unit of the gap scale is a quarter rem. Shortest decimal
/// form (`1`, `0.25`, `1.5`).
pub fn gap_rem(gap: u16) -> String {
    format!("{}", f64::from(gap) * 0.25)
}

pub fn item_class(position: usize) -> String {
    format!("item-{}", position + 1)
}

fn write_container_rule(out: &mut String, config: &GridConfiguration) {
    let _ = writeln!(out, ".{CONTAINER_CLASS} {{");
    out.push_str("  display: grid;\n");
    let _ = writeln!(
        out,
        "  grid-template-columns: repeat({}, 1fr);",
        config.columns
    );
    let _ = writeln!(out, "  grid-template-rows: repeat({}, 1fr);", config.rows);
    let _ = writeln!(out, "  gap: {}rem;", gap_rem(config.row_gap));
    out.push('}');
}

fn write_item_rule(out: &mut String, position: usize, area: &GridArea) {
    let rect = &area.rect;
    let background = ColorToken::for_index(position).entry().gradient;
    let _ = writeln!(out, ".{} {{", item_class(position));
    let _ = writeln!(out, "  grid-row: {} / {};", rect.row_start, rect.row_end);
    let _ = writeln!(out, "  grid-column: {} / {};", rect.col_start, rect.col_end);
    let _ = writeln!(out, "  background: {background};");
    let _ = writeln!(out, "  border-radius: {ITEM_RADIUS};");
    let _ = writeln!(out, "  box-shadow: {ITEM_SHADOW};");
    out.push('}');
}

pub fn stylesheet(config: &GridConfiguration, areas: &AreaRegistry) -> String {
    let mut out = String::with_capacity(160 + areas.len() * 256);
    write_container_rule(&mut out, config);
    for (position, area) in areas.iter().enumerate() {
        out.push_str("\n\n");
        write_item_rule(&mut out, position, area);
    }
    out
}

pub fn markup(areas: &AreaRegistry) -> String {
    let mut out = String::with_capacity(48 + areas.len() * 40);
    let _ = writeln!(out, "<div class=\"{CONTAINER_CLASS}\">");
    for position in 0..areas.len() {
        let _ = writeln!(out, "  <div class=\"{}\"></div>", item_class(position));
    }
    out.push_str("</div>");
    out
}

pub fn generate(config: &GridConfiguration, areas: &AreaRegistry) -> CssOutput {
    CssOutput {
        stylesheet: stylesheet(config, areas),
        markup: markup(areas),
    }
}
