//! Configuration field focus and editing.

use super::DispatchResult;
use crate::Action;
use core_state::DesignerState;

pub(crate) fn handle_field_action(action: Action, state: &mut DesignerState) -> DispatchResult {
    match action {
        Action::FocusField(field) => {
            let changed = state.fields().focused() != Some(field);
            state.focus_field(Some(field));
            DispatchResult::from_changed(changed)
        }
        Action::FocusNext => {
            state.focus_next();
            DispatchResult::dirty()
        }
        Action::FocusPrev => {
            state.focus_prev();
            DispatchResult::dirty()
        }
        Action::Blur => {
            let changed = state.fields().focused().is_some();
            state.focus_field(None);
            DispatchResult::from_changed(changed)
        }
        Action::FieldInput(ch) => DispatchResult::from_changed(state.input_char(ch)),
        Action::FieldBackspace => DispatchResult::from_changed(state.backspace()),
        Action::FieldStep(delta) => DispatchResult::from_changed(state.step_field(delta)),
        _ => unreachable!("non-field action routed to field handler"),
    }
}
