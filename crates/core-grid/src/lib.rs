//! Grid data model: configuration, committed areas, palette and the drag
//! selection engine.
//!
//! Coordinates follow CSS grid line numbering. Cells are addressed 1-indexed
//! (`CellPos`), while stored rectangles use exclusive end lines so a grid of
//! `N` columns exposes lines `1..=N+1`.
//!
//! Invariants (must hold after every public call):
//! * Every committed `GridArea` satisfies `row_start < row_end` and
//!   `col_start < col_end`; the minimum area is 1x1.
//! * Registry order is insertion order. It drives color assignment, code
//!   generation order and lookup precedence (first match wins).
//! * Areas are never clamped or dropped when the configuration shrinks.

pub mod area;
pub mod config;
pub mod palette;
pub mod registry;
pub mod selection;

pub use area::{AreaId, AreaRect, CellPos, GridArea};
pub use config::{GridConfiguration, GridField};
pub use palette::{ColorToken, PALETTE, PALETTE_SIZE, PaletteEntry};
pub use registry::AreaRegistry;
pub use selection::SelectionGesture;
