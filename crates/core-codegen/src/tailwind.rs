//! Utility-class (Tailwind) markup.
//!
//! ```text
//! <div class="grid grid-cols-4 grid-rows-3 gap-4">
//!   <div class="row-start-1 row-span-2 col-start-1 col-span-2 <color> rounded-xl shadow-lg"></div>
//! </div>
//! ```

use core_grid::{AreaRegistry, GridArea, GridConfiguration};
use std::fmt::Write;

pub const CHILD_DECORATIONS: &str = "rounded-xl shadow-lg";

/// Class list of the container element. The gap reads `column_gap` only.
pub fn container_classes(config: &GridConfiguration) -> String {
    format!(
        "grid grid-cols-{} grid-rows-{} gap-{}",
        config.columns, config.rows, config.column_gap
    )
}

/// Class list of one child element, colored by the area's stored token.
pub fn child_classes(area: &GridArea) -> String {
    let rect = &area.rect;
    format!(
        "row-start-{} row-span-{} col-start-{} col-span-{} {} {}",
        rect.row_start,
        rect.row_span(),
        rect.col_start,
        rect.col_span(),
        area.color.class(),
        CHILD_DECORATIONS
    )
}

pub fn generate(config: &GridConfiguration, areas: &AreaRegistry) -> String {
    let mut out = String::with_capacity(64 + areas.len() * 128);
    let _ = writeln!(out, "<div class=\"{}\">", container_classes(config));
    for area in areas {
        let _ = writeln!(out, "  <div class=\"{}\"></div>", child_classes(area));
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::{AreaRect, CellPos};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_registry_yields_bare_container() {
        let out = generate(&GridConfiguration::default(), &AreaRegistry::new());
        assert_eq!(
            out,
            "<div class=\"grid grid-cols-4 grid-rows-3 gap-4\">\n</div>"
        );
    }

    #[test]
    fn gap_follows_column_gap_only() {
        let cfg = GridConfiguration {
            columns: 2,
            rows: 5,
            column_gap: 7,
            row_gap: 1,
        };
        assert_eq!(container_classes(&cfg), "grid grid-cols-2 grid-rows-5 gap-7");
    }

    #[test]
    fn spans_are_end_minus_start() {
        let mut reg = AreaRegistry::new();
        reg.commit(AreaRect::spanning(CellPos::new(2, 3), CellPos::new(3, 5)));
        let line = child_classes(&reg.areas()[0]);
        assert!(line.starts_with("row-start-2 row-span-2 col-start-3 col-span-3 "));
        assert!(line.ends_with(" rounded-xl shadow-lg"));
    }
}
