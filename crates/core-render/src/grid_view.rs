//! Grid renderer mapping: what each grid cell shows, and how the canvas is
//! painted from it.
//!
//! `cell_state` is the whole contract between the selection engine, the
//! area registry and the screen:
//! * `previewed` iff a gesture is active and the cell lies inside its
//!   (inclusive) preview bounds;
//! * `area_color` is the color of the first area in registry order that
//!   contains the cell (half-open bounds), `None` if no area does;
//! * the preview overlays the area color.
//!
//! Gaps are painted with the fill of their neighbouring cells when all of
//! them agree, so a multi-cell area shows as one solid block. Areas lying
//! (partly) outside the current grid paint nothing outside it.

use crate::style;
use crate::{CellStyle, Frame};
use core_grid::{AreaRegistry, CellPos, ColorToken, SelectionGesture};
use core_model::{CanvasGeometry, CanvasSpot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    pub previewed: bool,
    pub area_color: Option<ColorToken>,
    /// Registry position of the area supplying `area_color`.
    pub area: Option<usize>,
}

/// What a cell visibly shows after precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Empty,
    Preview,
    Area(usize, ColorToken),
}

impl CellState {
    pub fn fill(&self) -> Fill {
        if self.previewed {
            return Fill::Preview;
        }
        match (self.area, self.area_color) {
            (Some(pos), Some(color)) => Fill::Area(pos, color),
            _ => Fill::Empty,
        }
    }
}

pub fn cell_state(
    gesture: &SelectionGesture,
    registry: &AreaRegistry,
    row: u16,
    col: u16,
) -> CellState {
    let area = registry.position_at(row, col);
    CellState {
        previewed: gesture.previews(row, col),
        area_color: area.map(|pos| registry.areas()[pos].color),
        area,
    }
}

fn fill_style(fill: Fill) -> CellStyle {
    match fill {
        Fill::Empty => style::empty_cell(),
        Fill::Preview => style::preview_cell(),
        Fill::Area(_, color) => style::area_cell(color),
    }
}

/// Fill shared by every cell in `cells`, if they all agree on a non-empty one.
fn shared_fill(
    gesture: &SelectionGesture,
    registry: &AreaRegistry,
    cells: &[(u16, u16)],
) -> Option<Fill> {
    let mut fills = cells
        .iter()
        .map(|&(row, col)| cell_state(gesture, registry, row, col).fill());
    let first = fills.next()?;
    if first == Fill::Empty || fills.any(|f| f != first) {
        return None;
    }
    Some(first)
}

/// Paint the canvas region of `frame`.
pub fn paint_canvas(
    frame: &mut Frame,
    geometry: &CanvasGeometry,
    gesture: &SelectionGesture,
    registry: &AreaRegistry,
) {
    let region = *geometry.region();
    for y in region.y..region.bottom() {
        for x in region.x..region.right() {
            let fill = match geometry.locate(x, y) {
                Some(CanvasSpot::Cell(cell)) => {
                    Some(cell_state(gesture, registry, cell.row, cell.col).fill())
                }
                Some(CanvasSpot::ColumnGap { row, left }) => {
                    shared_fill(gesture, registry, &[(row, left), (row, left + 1)])
                }
                Some(CanvasSpot::RowGap { above, col }) => {
                    shared_fill(gesture, registry, &[(above, col), (above + 1, col)])
                }
                Some(CanvasSpot::Junction { above, left }) => shared_fill(
                    gesture,
                    registry,
                    &[
                        (above, left),
                        (above, left + 1),
                        (above + 1, left),
                        (above + 1, left + 1),
                    ],
                ),
                Some(CanvasSpot::Empty) | None => None,
            };
            if let Some(fill) = fill {
                frame.set(x, y, ' ', fill_style(fill));
            }
        }
    }
    paint_labels(frame, geometry, gesture, registry);
}

/// `#N` in the top-left cell of each area whose corner is visible and shows
/// that area.
fn paint_labels(
    frame: &mut Frame,
    geometry: &CanvasGeometry,
    gesture: &SelectionGesture,
    registry: &AreaRegistry,
) {
    for (pos, area) in registry.iter().enumerate() {
        let corner = CellPos::new(area.rect.row_start, area.rect.col_start);
        let Some(region) = geometry.cell_region(corner) else {
            continue;
        };
        let state = cell_state(gesture, registry, corner.row, corner.col);
        if state.fill() != Fill::Area(pos, area.color) {
            continue;
        }
        let label = format!("#{}", pos + 1);
        if label.len() as u16 <= region.width {
            frame.put_str(region.x, region.y, &label, region.width, style::area_cell(area.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::{AreaRect, GridConfiguration};
    use core_model::LayoutRegion;
    use proptest::prelude::*;

    fn registry_with(rects: &[(u16, u16, u16, u16)]) -> AreaRegistry {
        let mut reg = AreaRegistry::new();
        for &(row_start, row_end, col_start, col_end) in rects {
            reg.commit(AreaRect {
                row_start,
                row_end,
                col_start,
                col_end,
            });
        }
        reg
    }

    #[test]
    fn first_area_wins_lookup() {
        let reg = registry_with(&[(1, 3, 1, 3), (2, 4, 2, 4)]);
        let idle = SelectionGesture::new();
        let s = cell_state(&idle, &reg, 2, 2);
        assert_eq!(s.area, Some(0));
        assert_eq!(s.area_color, Some(ColorToken::for_index(0)));
        let s = cell_state(&idle, &reg, 3, 3);
        assert_eq!(s.area, Some(1));
        assert_eq!(cell_state(&idle, &reg, 3, 1), CellState::default());
    }

    #[test]
    fn preview_overlays_area() {
        let reg = registry_with(&[(1, 2, 1, 2)]);
        let mut g = SelectionGesture::new();
        g.begin(CellPos::new(1, 1));
        let s = cell_state(&g, &reg, 1, 1);
        assert!(s.previewed);
        assert_eq!(s.area_color, Some(ColorToken::for_index(0)));
        assert_eq!(s.fill(), Fill::Preview);
    }

    #[test]
    fn gaps_inside_area_are_filled_edges_are_not() {
        let cfg = GridConfiguration::default();
        let geom = CanvasGeometry::compute(LayoutRegion::new(0, 0, 40, 11), &cfg);
        let reg = registry_with(&[(1, 3, 1, 3)]);
        let mut frame = Frame::new(40, 11);
        paint_canvas(&mut frame, &geom, &SelectionGesture::new(), &reg);

        let color = ColorToken::for_index(0);
        let c11 = geom.cell_region(CellPos::new(1, 1)).unwrap();
        let c12 = geom.cell_region(CellPos::new(1, 2)).unwrap();
        let c13 = geom.cell_region(CellPos::new(1, 3)).unwrap();
        let c21 = geom.cell_region(CellPos::new(2, 1)).unwrap();
        // Gap between (1,1) and (1,2): same area.
        assert_eq!(frame.get(c11.right(), c11.y).unwrap().style, style::area_cell(color));
        // Gap between (1,2) and (1,3): area edge stays unpainted.
        assert_eq!(frame.get(c12.right(), c12.y).unwrap().style, CellStyle::PLAIN);
        assert_eq!(frame.get(c13.x, c13.y).unwrap().style, style::empty_cell());
        // Junction inside the 2x2 block.
        assert_eq!(frame.get(c11.right(), c11.bottom()).unwrap().style, style::area_cell(color));
        assert_eq!(c21.y, c11.bottom() + 1);
        // Label in the corner.
        assert_eq!(&frame.row_text(c11.y)[..2], "#1");
    }

    #[test]
    fn stale_area_outside_grid_paints_nothing() {
        let cfg = GridConfiguration {
            columns: 2,
            rows: 2,
            column_gap: 0,
            row_gap: 0,
        };
        let geom = CanvasGeometry::compute(LayoutRegion::new(0, 0, 20, 6), &cfg);
        let reg = registry_with(&[(3, 4, 3, 4)]);
        let mut frame = Frame::new(20, 6);
        paint_canvas(&mut frame, &geom, &SelectionGesture::new(), &reg);
        assert!(frame.cells.iter().all(|c| c.ch != '#'));
        assert!(frame.cells.iter().all(|c| c.style == style::empty_cell()));
    }

    proptest! {
        #[test]
        fn previewed_iff_inside_inclusive_bounds(
            a in (1u16..=12, 1u16..=12),
            b in (1u16..=12, 1u16..=12),
            cell in (1u16..=12, 1u16..=12),
        ) {
            let mut g = SelectionGesture::new();
            g.begin(CellPos::new(a.0, a.1));
            g.extend(CellPos::new(b.0, b.1));
            let s = cell_state(&g, &AreaRegistry::new(), cell.0, cell.1);
            let inside = (a.0.min(b.0)..=a.0.max(b.0)).contains(&cell.0)
                && (a.1.min(b.1)..=a.1.max(b.1)).contains(&cell.1);
            prop_assert_eq!(s.previewed, inside);
            prop_assert_eq!(s.area_color, None);
        }
    }
}
