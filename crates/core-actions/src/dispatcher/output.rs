//! Output panel actions: syntax selection, reset, copy and scrolling.

use super::DispatchResult;
use crate::Action;
use crate::clipboard::ClipboardSink;
use core_state::DesignerState;
use tracing::{info, warn};

pub(crate) fn handle_output_action(action: Action, state: &mut DesignerState) -> DispatchResult {
    match action {
        Action::SetSyntax(syntax) => DispatchResult::from_changed(state.set_syntax(syntax)),
        Action::ToggleSyntax => {
            state.toggle_syntax();
            DispatchResult::dirty()
        }
        Action::Reset => {
            state.reset();
            state.flash("Grid cleared");
            DispatchResult::dirty()
        }
        Action::ScrollCode(delta) => {
            let lines = state.generated().display_lines().len();
            DispatchResult::from_changed(state.scroll_code(delta, lines))
        }
        _ => unreachable!("non-output action routed to output handler"),
    }
}

/// Hand the displayed code to the clipboard. Failures are logged only.
pub(crate) fn handle_copy(
    state: &mut DesignerState,
    clipboard: &mut dyn ClipboardSink,
) -> DispatchResult {
    let text = state.copy_text();
    match clipboard.copy(&text) {
        Ok(()) => {
            info!(target: "clipboard", bytes = text.len(), syntax = %state.syntax(), "copied");
            state.flash(format!("Copied {} ({} bytes)", state.syntax().label(), text.len()));
            DispatchResult::dirty()
        }
        Err(e) => {
            warn!(target: "clipboard", error = %e, bytes = text.len(), "copy_failed");
            DispatchResult::clean()
        }
    }
}
