//! One designer session: state, layout and render engine driven by events.
//!
//! Nothing here touches the terminal directly; output goes to whatever
//! writer the caller hands to `render_to`, and copies go to the session's
//! `ClipboardSink`.

use anyhow::Result;
use core_actions::{ActionObserver, ClipboardSink, TracingActionObserver, dispatch, translate};
use core_events::{Event, InputEvent};
use core_model::ScreenLayout;
use core_render::render_engine::RenderEngine;
use core_state::DesignerState;
use std::fmt;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{Instrument, debug, error, info};

pub(crate) enum LoopControl {
    Continue { dirty: bool },
    Break { reason: ShutdownReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownReason {
    CtrlC,
    ActionQuit,
    ChannelClosed,
}

impl ShutdownReason {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::CtrlC => "ctrl_c",
            ShutdownReason::ActionQuit => "action_quit",
            ShutdownReason::ChannelClosed => "channel_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) struct Session<C: ClipboardSink> {
    state: DesignerState,
    layout: ScreenLayout,
    engine: RenderEngine,
    clipboard: C,
    observers: Vec<Box<dyn ActionObserver>>,
}

impl<C: ClipboardSink> Session<C> {
    pub(crate) fn new(state: DesignerState, (width, height): (u16, u16), clipboard: C) -> Self {
        let layout = ScreenLayout::compute(width, height, state.config());
        Self {
            state,
            layout,
            engine: RenderEngine::new(),
            clipboard,
            observers: vec![Box::new(TracingActionObserver)],
        }
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> LoopControl {
        match event {
            Event::Input(input) => self.handle_input(input),
            Event::Tick => LoopControl::Continue {
                dirty: self.state.tick_ephemeral(),
            },
        }
    }

    fn handle_input(&mut self, input: &InputEvent) -> LoopControl {
        if let InputEvent::Resize(width, height) = *input {
            self.handle_resize(width, height);
            return LoopControl::Continue { dirty: true };
        }

        let Some(action) = translate(input, &self.layout, &self.state) else {
            return LoopControl::Continue { dirty: false };
        };
        let before = *self.state.config();
        let result = dispatch(
            action,
            &mut self.state,
            &mut self.clipboard,
            &self.observers,
        );
        if result.quit {
            let reason = if matches!(input, InputEvent::CtrlC) {
                ShutdownReason::CtrlC
            } else {
                ShutdownReason::ActionQuit
            };
            info!(target: "runtime", reason = reason.as_str(), "quit_requested");
            return LoopControl::Break { reason };
        }
        if *self.state.config() != before {
            let (width, height) = self.layout.size();
            self.layout = ScreenLayout::compute(width, height, self.state.config());
        }
        LoopControl::Continue {
            dirty: result.dirty,
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(target: "runtime", width, height, "resize");
        self.layout = ScreenLayout::compute(width, height, self.state.config());
        self.engine.invalidate_for_resize();
    }

    pub(crate) fn render_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.engine.render_to(out, &self.state, &self.layout)
    }

    pub(crate) fn state(&self) -> &DesignerState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut DesignerState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &RenderEngine {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

/// Drain `rx` until a handler asks to stop or every sender is gone,
/// repainting after each event that changed something.
pub(crate) async fn pump<C, W>(
    session: &mut Session<C>,
    rx: &mut mpsc::Receiver<Event>,
    out: &mut W,
) -> ShutdownReason
where
    C: ClipboardSink,
    W: Write,
{
    let loop_span = tracing::debug_span!(target: "runtime", "event_loop");
    async move {
        while let Some(event) = rx.recv().await {
            match session.handle_event(&event) {
                LoopControl::Break { reason } => return reason,
                LoopControl::Continue { dirty: true } => {
                    if let Err(e) = session.render_to(out) {
                        error!(target: "render", ?e, "render_error");
                    }
                }
                LoopControl::Continue { dirty: false } => {}
            }
        }
        ShutdownReason::ChannelClosed
    }
    .instrument(loop_span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_actions::MemoryClipboard;
    use core_events::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use core_grid::CellPos;
    use core_render::render_engine::RepaintKind;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn session() -> Session<MemoryClipboard> {
        Session::new(DesignerState::default(), (100, 30), MemoryClipboard::new())
    }

    fn key(ch: char) -> Event {
        Event::Input(InputEvent::Key(KeyEvent::plain(KeyCode::Char(ch))))
    }

    fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> Event {
        Event::Input(InputEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            mods: KeyModifiers::empty(),
        }))
    }

    fn cell_xy(s: &Session<MemoryClipboard>, row: u16, col: u16) -> (u16, u16) {
        let r = s
            .layout()
            .canvas()
            .cell_region(CellPos::new(row, col))
            .expect("cell visible");
        (r.x, r.y)
    }

    fn drag_cells(s: &mut Session<MemoryClipboard>, from: (u16, u16), to: (u16, u16)) {
        let a = cell_xy(s, from.0, from.1);
        let b = cell_xy(s, to.0, to.1);
        s.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), a));
        s.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), b));
        s.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), b));
    }

    fn is_dirty(control: LoopControl) -> bool {
        matches!(control, LoopControl::Continue { dirty: true })
    }

    #[test]
    fn shutdown_reason_labels_are_stable() {
        assert_eq!(ShutdownReason::CtrlC.as_str(), "ctrl_c");
        assert_eq!(ShutdownReason::ActionQuit.as_str(), "action_quit");
        assert_eq!(ShutdownReason::ChannelClosed.as_str(), "channel_closed");
    }

    #[test]
    fn drag_commits_area_and_copy_reaches_clipboard() {
        let mut s = session();
        drag_cells(&mut s, (1, 1), (2, 3));
        assert_eq!(s.state().registry().len(), 1);

        assert!(is_dirty(s.handle_event(&key('c'))));
        let copied = s.clipboard().last().expect("copied");
        assert!(copied.contains("row-start-1 row-span-2 col-start-1 col-span-3"));
        let status = s.state().ephemeral_status.as_ref().expect("flash");
        assert!(status.text.starts_with("Copied Tailwind"));
    }

    #[test]
    fn quit_key_and_ctrl_c_report_distinct_reasons() {
        let mut s = session();
        assert!(matches!(
            s.handle_event(&key('q')),
            LoopControl::Break {
                reason: ShutdownReason::ActionQuit
            }
        ));
        assert!(matches!(
            s.handle_event(&Event::Input(InputEvent::CtrlC)),
            LoopControl::Break {
                reason: ShutdownReason::CtrlC
            }
        ));
    }

    #[test]
    fn unmapped_input_is_clean() {
        let mut s = session();
        assert!(!is_dirty(s.handle_event(&key('z'))));
        assert!(!is_dirty(s.handle_event(&Event::Input(InputEvent::FocusGained))));
    }

    #[test]
    fn field_edit_relayouts_canvas() {
        let mut s = session();
        let before = s.layout().canvas().column_spans().len();
        s.handle_event(&Event::Input(InputEvent::Key(KeyEvent::plain(KeyCode::Tab))));
        s.handle_event(&Event::Input(InputEvent::Key(KeyEvent::plain(KeyCode::Backspace))));
        s.handle_event(&key('6'));
        assert_eq!(s.state().config().columns, 6);
        assert_eq!(before, 4);
        assert_eq!(s.layout().canvas().column_spans().len(), 6);
    }

    #[test]
    fn resize_forces_full_repaint() {
        let mut s = session();
        let mut out = Vec::new();
        s.render_to(&mut out).unwrap();
        s.render_to(&mut out).unwrap();
        assert_eq!(s.engine().last_repaint_kind(), Some(RepaintKind::Skipped));

        assert!(is_dirty(s.handle_event(&Event::Input(InputEvent::Resize(120, 40)))));
        assert_eq!(s.layout().size(), (120, 40));
        s.render_to(&mut out).unwrap();
        assert_eq!(s.engine().last_repaint_kind(), Some(RepaintKind::Full));
    }

    #[test]
    fn tick_clears_expired_status_only_once() {
        let mut s = session();
        s.state_mut().set_ephemeral("Copied", Duration::ZERO);
        assert!(is_dirty(s.handle_event(&Event::Tick)));
        assert!(s.state().ephemeral_status.is_none());
        assert!(!is_dirty(s.handle_event(&Event::Tick)));
    }

    #[tokio::test]
    async fn pump_renders_until_quit_key() {
        let (tx, mut rx) = mpsc::channel::<Event>(8);
        let mut s = session();
        let mut out = Vec::new();
        tx.send(key('s')).await.unwrap();
        tx.send(key('q')).await.unwrap();
        tx.send(key('t')).await.unwrap();

        let reason = pump(&mut s, &mut rx, &mut out).await;
        assert_eq!(reason, ShutdownReason::ActionQuit);
        assert_eq!(s.state().syntax(), core_codegen::Syntax::Css);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("CSS output"));
    }

    #[tokio::test]
    async fn pump_reports_channel_closed() {
        let (tx, mut rx) = mpsc::channel::<Event>(2);
        drop(tx);
        let mut s = session();
        let mut out = Vec::new();
        assert_eq!(
            pump(&mut s, &mut rx, &mut out).await,
            ShutdownReason::ChannelClosed
        );
        assert!(out.is_empty());
    }
}
