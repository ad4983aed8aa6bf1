//! Drag gesture lifecycle.

use super::DispatchResult;
use crate::Action;
use core_state::DesignerState;
use tracing::debug;

pub(crate) fn handle_selection(action: Action, state: &mut DesignerState) -> DispatchResult {
    match action {
        Action::BeginSelection(cell) => {
            // The translator only produces cells from the current layout, but
            // a stale event after a shrink can still arrive.
            if !state.config().contains_cell(cell.row, cell.col) {
                debug!(target: "selection", row = cell.row, col = cell.col, "begin_outside_grid");
                return DispatchResult::clean();
            }
            state.begin_selection(cell);
            DispatchResult::dirty()
        }
        Action::ExtendSelection(cell) => {
            if !state.config().contains_cell(cell.row, cell.col) {
                return DispatchResult::clean();
            }
            DispatchResult::from_changed(state.extend_selection(cell))
        }
        Action::CommitSelection => {
            let was_active = state.gesture().is_active();
            state.commit_selection();
            DispatchResult::from_changed(was_active)
        }
        Action::CancelSelection => DispatchResult::from_changed(state.cancel_selection()),
        _ => unreachable!("non-selection action routed to selection handler"),
    }
}
