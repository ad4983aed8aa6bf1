//! Dispatcher applying `Action` to `DesignerState`.
//!
//! Split by concern:
//! * `selection` - drag gesture lifecycle
//! * `fields`    - configuration field focus and editing
//! * `output`    - syntax choice, reset, copy, code panel scroll
//!
//! Every handler returns a `DispatchResult`; `dirty` is only set when
//! something visible changed so the runtime can skip redundant frames.

use crate::clipboard::ClipboardSink;
use crate::{Action, ActionObserver};
use core_state::DesignerState;

mod fields;
mod output;
mod selection;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
    fn from_changed(changed: bool) -> Self {
        if changed { Self::dirty() } else { Self::clean() }
    }
}

/// Apply an action to designer state. Returns `DispatchResult` describing
/// whether a render is needed (`dirty`) or the application should exit (`quit`).
pub fn dispatch(
    action: Action,
    state: &mut DesignerState,
    clipboard: &mut dyn ClipboardSink,
    observers: &[Box<dyn ActionObserver>],
) -> DispatchResult {
    for obs in observers {
        obs.on_action(&action);
    }

    match action {
        Action::BeginSelection(_)
        | Action::ExtendSelection(_)
        | Action::CommitSelection
        | Action::CancelSelection => selection::handle_selection(action, state),
        Action::FocusField(_)
        | Action::FocusNext
        | Action::FocusPrev
        | Action::Blur
        | Action::FieldInput(_)
        | Action::FieldBackspace
        | Action::FieldStep(_) => fields::handle_field_action(action, state),
        Action::SetSyntax(_) | Action::ToggleSyntax | Action::Reset | Action::ScrollCode(_) => {
            output::handle_output_action(action, state)
        }
        Action::Copy => output::handle_copy(state, clipboard),
        Action::Quit => DispatchResult::quit(),
    }
}
