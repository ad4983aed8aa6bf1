use core_events::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers as CKeyModifiers,
    MouseButton as CMouseButton, MouseEvent as CMouseEvent, MouseEventKind as CMouseEventKind,
};

/// Map a crossterm key event into a normalized key event.
///
/// Returns `None` for key codes the designer has no binding for (e.g. media keys).
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyEvent> {
    let code = map_key_code(&event.code)?;
    Some(KeyEvent {
        code,
        mods: map_mods(event.modifiers),
    })
}

pub(crate) fn map_key_code(code: &CKeyCode) -> Option<KeyCode> {
    let mapped = match code {
        CKeyCode::Char(c) => KeyCode::Char(*c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::BackTab => KeyCode::BackTab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };
    Some(mapped)
}

pub(crate) fn map_mods(mods: CKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if mods.contains(CKeyModifiers::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if mods.contains(CKeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(CKeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

fn map_button(button: CMouseButton) -> MouseButton {
    match button {
        CMouseButton::Left => MouseButton::Left,
        CMouseButton::Middle => MouseButton::Middle,
        CMouseButton::Right => MouseButton::Right,
    }
}

/// Map a crossterm mouse event. Horizontal wheel events are dropped.
pub(crate) fn map_mouse_event(event: &CMouseEvent) -> Option<MouseEvent> {
    let kind = match event.kind {
        CMouseEventKind::Down(b) => MouseEventKind::Down(map_button(b)),
        CMouseEventKind::Up(b) => MouseEventKind::Up(map_button(b)),
        CMouseEventKind::Drag(b) => MouseEventKind::Drag(map_button(b)),
        CMouseEventKind::Moved => MouseEventKind::Moved,
        CMouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        CMouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        CMouseEventKind::ScrollLeft | CMouseEventKind::ScrollRight => return None,
    };
    Some(MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        mods: map_mods(event.modifiers),
    })
}

pub(crate) fn mouse_kind_label(kind: &MouseEventKind) -> &'static str {
    match kind {
        MouseEventKind::Down(_) => "down",
        MouseEventKind::Up(_) => "up",
        MouseEventKind::Drag(_) => "drag",
        MouseEventKind::ScrollUp => "scroll_up",
        MouseEventKind::ScrollDown => "scroll_down",
        MouseEventKind::Moved => "moved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_shift_tab_and_modifiers() {
        let ev = CKeyEvent::new(CKeyCode::BackTab, CKeyModifiers::SHIFT);
        let mapped = map_key_event(&ev).expect("mapped");
        assert_eq!(mapped.code, KeyCode::BackTab);
        assert!(mapped.mods.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn unsupported_keys_are_dropped() {
        assert!(map_key_code(&CKeyCode::F(5)).is_none());
        assert!(map_key_code(&CKeyCode::Insert).is_none());
    }

    #[test]
    fn maps_mouse_drag() {
        let ev = CMouseEvent {
            kind: CMouseEventKind::Drag(CMouseButton::Left),
            column: 12,
            row: 7,
            modifiers: CKeyModifiers::NONE,
        };
        let mapped = map_mouse_event(&ev).expect("mapped");
        assert_eq!(mapped.kind, MouseEventKind::Drag(MouseButton::Left));
        assert_eq!((mapped.column, mapped.row), (12, 7));
        assert_eq!(mouse_kind_label(&mapped.kind), "drag");
    }

    #[test]
    fn horizontal_scroll_is_dropped() {
        let ev = CMouseEvent {
            kind: CMouseEventKind::ScrollLeft,
            column: 0,
            row: 0,
            modifiers: CKeyModifiers::NONE,
        };
        assert!(map_mouse_event(&ev).is_none());
    }
}
