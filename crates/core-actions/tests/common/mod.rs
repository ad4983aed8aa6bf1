#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, MemoryClipboard, dispatch, translate};
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use core_grid::CellPos;
use core_model::ScreenLayout;
use core_state::DesignerState;

/// Designer wired the way the runtime wires it: translate, dispatch, relayout.
pub struct Harness {
    pub state: DesignerState,
    pub layout: ScreenLayout,
    pub clipboard: MemoryClipboard,
    width: u16,
    height: u16,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_size(100, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let state = DesignerState::default();
        let layout = ScreenLayout::compute(width, height, state.config());
        Self {
            state,
            layout,
            clipboard: MemoryClipboard::new(),
            width,
            height,
        }
    }

    pub fn send(&mut self, event: InputEvent) -> Option<DispatchResult> {
        let action = translate(&event, &self.layout, &self.state)?;
        let result = dispatch(action, &mut self.state, &mut self.clipboard, &[]);
        self.layout = ScreenLayout::compute(self.width, self.height, self.state.config());
        Some(result)
    }

    pub fn key(&mut self, code: KeyCode) -> Option<DispatchResult> {
        self.send(InputEvent::Key(KeyEvent::plain(code)))
    }

    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.key(KeyCode::Char(ch));
        }
    }

    /// Screen position of the top-left corner of `cell`.
    pub fn cell_xy(&self, row: u16, col: u16) -> (u16, u16) {
        let r = self
            .layout
            .canvas()
            .cell_region(CellPos::new(row, col))
            .expect("cell visible");
        (r.x, r.y)
    }

    pub fn mouse(&mut self, kind: MouseEventKind, (column, row): (u16, u16)) -> Option<DispatchResult> {
        self.send(InputEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            mods: KeyModifiers::empty(),
        }))
    }

    pub fn press(&mut self, at: (u16, u16)) -> Option<DispatchResult> {
        self.mouse(MouseEventKind::Down(MouseButton::Left), at)
    }

    pub fn drag(&mut self, at: (u16, u16)) -> Option<DispatchResult> {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), at)
    }

    pub fn release(&mut self, at: (u16, u16)) -> Option<DispatchResult> {
        self.mouse(MouseEventKind::Up(MouseButton::Left), at)
    }

    /// Press on one cell, drag to another, release there.
    pub fn drag_cells(&mut self, from: (u16, u16), to: (u16, u16)) {
        let a = self.cell_xy(from.0, from.1);
        let b = self.cell_xy(to.0, to.1);
        self.press(a);
        self.drag(b);
        self.release(b);
    }
}
