//! Change notification for `DesignerState`.

use core_codegen::Syntax;
use core_grid::{AreaId, GridField};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// What changed. Emitted after the mutation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Gesture started, moved, or was cleared without a commit.
    Gesture,
    AreaAdded(AreaId),
    AreasReset,
    Configuration(GridField),
    Focus(Option<GridField>),
    Syntax(Syntax),
    CodeScroll,
    Status,
}

impl StateChange {
    /// True when the generated code may differ after this change.
    pub fn affects_output(&self) -> bool {
        matches!(
            self,
            StateChange::AreaAdded(_)
                | StateChange::AreasReset
                | StateChange::Configuration(_)
                | StateChange::Syntax(_)
        )
    }
}

/// Subscriber to state changes. Must not block.
pub trait StateObserver {
    fn on_change(&mut self, change: &StateChange);
}

/// Logs output-affecting changes under the `state` target.
#[derive(Debug, Default)]
pub struct TracingObserver {
    output_revisions: u64,
}

impl StateObserver for TracingObserver {
    fn on_change(&mut self, change: &StateChange) {
        if change.affects_output() {
            self.output_revisions += 1;
            debug!(
                target: "state",
                ?change,
                revision = self.output_revisions,
                "output_invalidated"
            );
        }
    }
}

/// Records every change; the shared handle stays readable after `subscribe`.
#[derive(Debug, Default, Clone)]
pub struct ChangeLog {
    entries: Rc<RefCell<Vec<StateChange>>>,
}

impl ChangeLog {
    pub fn entries(&self) -> Rc<RefCell<Vec<StateChange>>> {
        self.entries.clone()
    }
}

impl StateObserver for ChangeLog {
    fn on_change(&mut self, change: &StateChange) {
        self.entries.borrow_mut().push(*change);
    }
}
