use crate::area::{AreaId, AreaRect, GridArea};
use crate::palette::ColorToken;
use tracing::debug;

/// Ordered collection of committed areas.
#[derive(Debug, Default, Clone)]
pub struct AreaRegistry {
    areas: Vec<GridArea>,
    next_id: u64,
}

impl AreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an area for `rect`, colored by its insertion position.
    pub fn commit(&mut self, rect: AreaRect) -> &GridArea {
        let id = AreaId(self.next_id);
        self.next_id += 1;
        let color = ColorToken::for_index(self.areas.len());
        debug!(
            target: "selection",
            id = id.get(),
            row_start = rect.row_start,
            row_end = rect.row_end,
            col_start = rect.col_start,
            col_end = rect.col_end,
            color = color.index(),
            "area_committed"
        );
        self.areas.push(GridArea { id, rect, color });
        &self.areas[self.areas.len() - 1]
    }

    /// First area in insertion order covering the cell.
    pub fn area_at(&self, row: u16, col: u16) -> Option<&GridArea> {
        self.areas.iter().find(|a| a.contains(row, col))
    }

    /// 0-based registry position of the first area covering the cell.
    pub fn position_at(&self, row: u16, col: u16) -> Option<usize> {
        self.areas.iter().position(|a| a.contains(row, col))
    }

    pub fn areas(&self) -> &[GridArea] {
        &self.areas
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridArea> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Drop every area. Id allocation keeps counting so ids stay unique.
    pub fn reset(&mut self) {
        debug!(target: "selection", cleared = self.areas.len(), "registry_reset");
        self.areas.clear();
    }
}

impl<'a> IntoIterator for &'a AreaRegistry {
    type Item = &'a GridArea;
    type IntoIter = std::slice::Iter<'a, GridArea>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}
