//! Input translation: `InputEvent` -> `Action`.
//!
//! Stateless apart from what it reads from `DesignerState` (gesture activity,
//! focused field) and the layout used for hit testing.
//!
//! Pointer rules:
//! * Left press on a cell begins a gesture; on a field focuses it; on a
//!   button triggers it.
//! * Left drag over a cell extends an active gesture. Over a gap it is
//!   ignored. Anywhere off the canvas it cancels (pointer left the canvas).
//! * Left release over the canvas commits; anywhere else it cancels.
//! * Wheel over the code panel scrolls it.
//!
//! Keys only act without Ctrl/Alt. Digits, Backspace and Up/Down edit the
//! focused field; without focus Up/Down scroll the code panel.

use crate::Action;
use core_codegen::Syntax;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use core_model::{Button, Hit, ScreenLayout};
use core_state::DesignerState;

/// Lines scrolled per wheel notch.
pub const CODE_WHEEL_LINES: i32 = 3;

pub fn translate(
    event: &InputEvent,
    layout: &ScreenLayout,
    state: &DesignerState,
) -> Option<Action> {
    match event {
        InputEvent::Key(key) => translate_key(key, layout, state),
        InputEvent::Mouse(mouse) => translate_mouse(mouse, layout, state),
        InputEvent::CtrlC => Some(Action::Quit),
        InputEvent::FocusLost if state.gesture().is_active() => Some(Action::CancelSelection),
        InputEvent::FocusLost | InputEvent::FocusGained | InputEvent::Resize(..) => None,
    }
}

fn translate_mouse(
    mouse: &MouseEvent,
    layout: &ScreenLayout,
    state: &DesignerState,
) -> Option<Action> {
    let hit = layout.hit_test(mouse.column, mouse.row);
    let active = state.gesture().is_active();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Hit::Cell(cell) => Some(Action::BeginSelection(cell)),
            Hit::Field(field) => Some(Action::FocusField(field)),
            Hit::Button(button) => Some(button_action(button)),
            Hit::CanvasGap | Hit::CodePanel => None,
            Hit::Outside => state.fields().focused().map(|_| Action::Blur),
        },
        MouseEventKind::Drag(MouseButton::Left) if active => match hit {
            Hit::Cell(cell) => Some(Action::ExtendSelection(cell)),
            Hit::CanvasGap => None,
            _ => Some(Action::CancelSelection),
        },
        MouseEventKind::Up(MouseButton::Left) if active => {
            if hit.on_canvas() {
                Some(Action::CommitSelection)
            } else {
                Some(Action::CancelSelection)
            }
        }
        MouseEventKind::ScrollUp if hit == Hit::CodePanel => {
            Some(Action::ScrollCode(-CODE_WHEEL_LINES))
        }
        MouseEventKind::ScrollDown if hit == Hit::CodePanel => {
            Some(Action::ScrollCode(CODE_WHEEL_LINES))
        }
        _ => None,
    }
}

fn button_action(button: Button) -> Action {
    match button {
        Button::Tailwind => Action::SetSyntax(Syntax::Tailwind),
        Button::Css => Action::SetSyntax(Syntax::Css),
        Button::Reset => Action::Reset,
        Button::Copy => Action::Copy,
    }
}

fn translate_key(key: &KeyEvent, layout: &ScreenLayout, state: &DesignerState) -> Option<Action> {
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    let focused = state.fields().focused().is_some();
    let page = i32::from(layout.code_panel().height.max(1));
    let action = match key.code {
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Esc if state.gesture().is_active() => Action::CancelSelection,
        KeyCode::Esc | KeyCode::Enter if focused => Action::Blur,
        KeyCode::Char(c) if c.is_ascii_digit() && focused => Action::FieldInput(c),
        KeyCode::Backspace | KeyCode::Delete if focused => Action::FieldBackspace,
        KeyCode::Up if focused => Action::FieldStep(1),
        KeyCode::Down if focused => Action::FieldStep(-1),
        KeyCode::Up => Action::ScrollCode(-1),
        KeyCode::Down => Action::ScrollCode(1),
        KeyCode::PageUp => Action::ScrollCode(-page),
        KeyCode::PageDown => Action::ScrollCode(page),
        KeyCode::Char('s') => Action::ToggleSyntax,
        KeyCode::Char('t') => Action::SetSyntax(Syntax::Tailwind),
        KeyCode::Char('x') => Action::SetSyntax(Syntax::Css),
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
