//! Actions: the vocabulary between input translation and state mutation.
//!
//! `translate` turns a normalized `InputEvent` into at most one `Action`
//! using the current `ScreenLayout` for hit testing; `dispatcher::dispatch`
//! applies the action to `DesignerState`. Neither side touches the terminal.

use core_codegen::Syntax;
use core_grid::{CellPos, GridField};

pub mod clipboard;
pub mod dispatcher;
mod translator;

pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use dispatcher::{DispatchResult, dispatch};
pub use translator::{CODE_WHEEL_LINES, translate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    BeginSelection(CellPos),
    ExtendSelection(CellPos),
    CommitSelection,
    CancelSelection,
    FocusField(GridField),
    FocusNext,
    FocusPrev,
    /// Leave the focused field.
    Blur,
    FieldInput(char),
    FieldBackspace,
    FieldStep(i16),
    SetSyntax(Syntax),
    ToggleSyntax,
    Reset,
    Copy,
    ScrollCode(i32),
    Quit,
}

impl Action {
    /// True for actions that belong to a drag gesture.
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            Action::BeginSelection(_)
                | Action::ExtendSelection(_)
                | Action::CommitSelection
                | Action::CancelSelection
        )
    }
}

/// Observer notified before each action is applied.
pub trait ActionObserver: Send + Sync {
    fn on_action(&self, action: &Action);
}

/// Logs every dispatched action under the `actions` target.
#[derive(Debug, Default)]
pub struct TracingActionObserver;

impl ActionObserver for TracingActionObserver {
    fn on_action(&self, action: &Action) {
        if action.is_gesture() {
            tracing::trace!(target: "actions", ?action, "dispatch");
        } else {
            tracing::debug!(target: "actions", ?action, "dispatch");
        }
    }
}
