//! Designer state: the single owner of configuration, committed areas, the
//! live drag gesture, output syntax and panel UI state.
//!
//! Every mutation goes through a method on `DesignerState` which reports a
//! `StateChange` to the registered `StateObserver`s after the change is
//! applied. Observers see the change kind only; they read state through the
//! owner on the next render pass. Nothing here blocks or spawns.
//!
//! Gesture contract:
//! * `begin_selection` is only called for cells inside the current grid.
//! * `extend_selection`, `commit_selection` and `cancel_selection` are
//!   harmless without an active gesture.
//! * `commit_selection` and `cancel_selection` always leave the gesture cleared.

use core_codegen::{GeneratedCode, Syntax, generate};
use core_grid::{AreaId, AreaRegistry, CellPos, GridConfiguration, GridField, SelectionGesture};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub mod fields;
pub mod observer;

pub use fields::FieldEditor;
pub use observer::{ChangeLog, StateChange, StateObserver, TracingObserver};

/// Lifetime of status messages when no configuration overrides it.
pub const DEFAULT_STATUS_TTL: Duration = Duration::from_millis(1500);

/// Ephemeral status message container.
#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

pub struct DesignerState {
    config: GridConfiguration,
    registry: AreaRegistry,
    gesture: SelectionGesture,
    syntax: Syntax,
    fields: FieldEditor,
    /// First visible line of the code panel.
    code_scroll: usize,
    pub ephemeral_status: Option<EphemeralMessage>,
    status_ttl: Duration,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(GridConfiguration::default(), Syntax::default())
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("config", &self.config)
            .field("areas", &self.registry.len())
            .field("gesture", &self.gesture)
            .field("syntax", &self.syntax)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DesignerState {
    pub fn new(config: GridConfiguration, syntax: Syntax) -> Self {
        Self {
            config,
            registry: AreaRegistry::new(),
            gesture: SelectionGesture::new(),
            syntax,
            fields: FieldEditor::new(),
            code_scroll: 0,
            ephemeral_status: None,
            status_ttl: DEFAULT_STATUS_TTL,
            observers: Vec::new(),
        }
    }

    pub fn with_status_ttl(mut self, ttl: Duration) -> Self {
        self.status_ttl = ttl;
        self
    }

    pub fn status_ttl(&self) -> Duration {
        self.status_ttl
    }

    pub fn subscribe<O: StateObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, change: StateChange) {
        trace!(target: "state", ?change, "state_changed");
        for obs in self.observers.iter_mut() {
            obs.on_change(&change);
        }
    }

    pub fn config(&self) -> &GridConfiguration {
        &self.config
    }

    pub fn registry(&self) -> &AreaRegistry {
        &self.registry
    }

    pub fn gesture(&self) -> &SelectionGesture {
        &self.gesture
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    pub fn fields(&self) -> &FieldEditor {
        &self.fields
    }

    pub fn code_scroll(&self) -> usize {
        self.code_scroll
    }

    // --- selection ---------------------------------------------------------------------------

    pub fn begin_selection(&mut self, cell: CellPos) {
        debug_assert!(self.config.contains_cell(cell.row, cell.col));
        self.gesture.begin(cell);
        self.emit(StateChange::Gesture);
    }

    /// Returns true when the preview rectangle changed.
    pub fn extend_selection(&mut self, cell: CellPos) -> bool {
        let changed = self.gesture.extend(cell);
        if changed {
            self.emit(StateChange::Gesture);
        }
        changed
    }

    pub fn commit_selection(&mut self) -> Option<AreaId> {
        let was_active = self.gesture.is_active();
        let committed = self.gesture.commit(&mut self.registry);
        if let Some(id) = committed {
            debug!(target: "state", id = id.get(), areas = self.registry.len(), "selection_committed");
            self.emit(StateChange::AreaAdded(id));
        } else if was_active {
            self.emit(StateChange::Gesture);
        }
        committed
    }

    /// Returns true when an active gesture was dropped.
    pub fn cancel_selection(&mut self) -> bool {
        let was_active = self.gesture.is_active();
        self.gesture.cancel();
        if was_active {
            self.emit(StateChange::Gesture);
        }
        was_active
    }

    /// Empty the registry and drop any gesture in flight.
    pub fn reset(&mut self) {
        self.gesture.cancel();
        self.registry.reset();
        self.code_scroll = 0;
        debug!(target: "state", "areas_reset");
        self.emit(StateChange::AreasReset);
    }

    // --- output syntax -----------------------------------------------------------------------

    pub fn set_syntax(&mut self, syntax: Syntax) -> bool {
        if self.syntax == syntax {
            return false;
        }
        self.syntax = syntax;
        self.code_scroll = 0;
        self.emit(StateChange::Syntax(syntax));
        true
    }

    pub fn toggle_syntax(&mut self) {
        self.set_syntax(self.syntax.toggle());
    }

    /// Output of the currently selected generator.
    pub fn generated(&self) -> GeneratedCode {
        generate(self.syntax, &self.config, &self.registry)
    }

    /// Exact text the code panel shows, as handed to the clipboard.
    pub fn copy_text(&self) -> String {
        self.generated().clipboard_text()
    }

    /// Scroll the code panel by `delta` lines, bounded by `line_count`.
    pub fn scroll_code(&mut self, delta: i32, line_count: usize) -> bool {
        let max = line_count.saturating_sub(1);
        let next = (self.code_scroll as i64 + i64::from(delta)).clamp(0, max as i64) as usize;
        if next == self.code_scroll {
            return false;
        }
        self.code_scroll = next;
        self.emit(StateChange::CodeScroll);
        true
    }

    // --- configuration fields ----------------------------------------------------------------

    pub fn focus_field(&mut self, field: Option<GridField>) {
        if self.fields.focused() == field {
            return;
        }
        self.fields.focus(field, &self.config);
        self.emit(StateChange::Focus(field));
    }

    pub fn focus_next(&mut self) {
        let next = match self.fields.focused() {
            Some(f) => f.next(),
            None => GridField::ALL[0],
        };
        self.focus_field(Some(next));
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.fields.focused() {
            Some(f) => f.prev(),
            None => GridField::ALL[GridField::ALL.len() - 1],
        };
        self.focus_field(Some(prev));
    }

    pub fn input_char(&mut self, ch: char) -> bool {
        let applied = self.fields.push_char(ch, &mut self.config);
        self.after_field_edit(applied)
    }

    pub fn backspace(&mut self) -> bool {
        let applied = self.fields.backspace(&mut self.config);
        self.after_field_edit(applied)
    }

    pub fn step_field(&mut self, delta: i16) -> bool {
        let applied = self.fields.step(delta, &mut self.config);
        self.after_field_edit(applied)
    }

    fn after_field_edit(&mut self, applied: Option<u16>) -> bool {
        let (Some(value), Some(field)) = (applied, self.fields.focused()) else {
            return false;
        };
        // A gesture started on a cell that no longer exists would commit an
        // area outside the grid.
        if self.gesture.is_active() {
            self.gesture.cancel();
        }
        debug!(target: "state", field = field.label(), value, "config_field_set");
        self.emit(StateChange::Configuration(field));
        true
    }

    // --- status ------------------------------------------------------------------------------

    /// Set an ephemeral status message with a fixed timeout duration.
    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S, ttl: Duration) {
        self.ephemeral_status = Some(EphemeralMessage {
            text: msg.into(),
            expires_at: Instant::now() + ttl,
        });
        self.emit(StateChange::Status);
    }

    /// Show `msg` for the configured status lifetime.
    pub fn flash<S: Into<String>>(&mut self, msg: S) {
        self.set_ephemeral(msg, self.status_ttl);
    }

    /// Tick ephemeral status; returns true if message expired and was cleared.
    pub fn tick_ephemeral(&mut self) -> bool {
        self.tick_ephemeral_at(Instant::now())
    }

    pub fn tick_ephemeral_at(&mut self, now: Instant) -> bool {
        if let Some(m) = &self.ephemeral_status
            && now >= m.expires_at
        {
            self.ephemeral_status = None;
            self.emit(StateChange::Status);
            return true;
        }
        false
    }
}
