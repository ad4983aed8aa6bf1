//! RenderEngine: builds a frame from state and flushes only what changed.
//!
//! The previously flushed frame is kept as the diff baseline. A frame of a
//! different size (or no baseline at all) triggers a full repaint with a
//! screen clear; otherwise only rows whose cells differ are queued. Rows are
//! the repaint unit: the writer re-emits a whole row with one move and one
//! print per style run.

use crate::compose::build_frame;
use crate::metrics::{RenderPathMetrics, RenderPathMetricsSnapshot};
use crate::writer::Writer;
use crate::Frame;
use anyhow::Result;
use core_model::ScreenLayout;
use core_state::DesignerState;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintKind {
    Full,
    Rows,
    Skipped,
}

#[derive(Debug, Default)]
pub struct RenderEngine {
    prev: Option<Frame>,
    metrics: RenderPathMetrics,
    last_repaint_rows: Vec<u16>,
    last_repaint_kind: Option<RepaintKind>,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the diff baseline; the next frame repaints everything.
    pub fn invalidate_for_resize(&mut self) {
        self.prev = None;
        RenderPathMetrics::add(&self.metrics.resize_invalidations, 1);
    }

    pub fn render_to<W: Write>(
        &mut self,
        out: &mut W,
        state: &DesignerState,
        layout: &ScreenLayout,
    ) -> Result<()> {
        let start = Instant::now();
        let frame = build_frame(state, layout);
        let (writer, kind) = self.plan(&frame);
        let prints = writer.print_count() as u64;
        if kind != RepaintKind::Skipped {
            writer.flush_to(out)?;
        }

        let m = &self.metrics;
        match kind {
            RepaintKind::Full => RenderPathMetrics::add(&m.full_frames, 1),
            RepaintKind::Rows => RenderPathMetrics::add(&m.partial_frames, 1),
            RepaintKind::Skipped => RenderPathMetrics::add(&m.skipped_frames, 1),
        }
        RenderPathMetrics::add(&m.rows_repainted, self.last_repaint_rows.len() as u64);
        RenderPathMetrics::add(&m.print_commands, prints);
        let elapsed = start.elapsed().as_nanos() as u64;
        m.last_render_ns
            .store(elapsed, std::sync::atomic::Ordering::Relaxed);
        trace!(
            target: "render",
            ?kind,
            rows = self.last_repaint_rows.len(),
            prints,
            ns = elapsed,
            "frame"
        );

        self.prev = Some(frame);
        self.last_repaint_kind = Some(kind);
        Ok(())
    }

    fn plan(&mut self, frame: &Frame) -> (Writer, RepaintKind) {
        let mut writer = Writer::new();
        self.last_repaint_rows.clear();
        let baseline = self
            .prev
            .as_ref()
            .filter(|p| p.width == frame.width && p.height == frame.height);
        let kind = match baseline {
            None => {
                debug!(target: "render", width = frame.width, height = frame.height, "full_repaint");
                writer.clear_all();
                self.last_repaint_rows.extend(0..frame.height);
                RepaintKind::Full
            }
            Some(prev) => {
                self.last_repaint_rows
                    .extend((0..frame.height).filter(|&y| prev.row(y) != frame.row(y)));
                if self.last_repaint_rows.is_empty() {
                    RepaintKind::Skipped
                } else {
                    RepaintKind::Rows
                }
            }
        };
        for &y in &self.last_repaint_rows {
            writer.paint_row(y, frame.row(y));
        }
        (writer, kind)
    }

    pub fn last_repaint_rows(&self) -> &[u16] {
        &self.last_repaint_rows
    }

    pub fn last_repaint_kind(&self) -> Option<RepaintKind> {
        self.last_repaint_kind
    }

    /// Last flushed frame (tests / diagnostics).
    pub fn last_frame(&self) -> Option<&Frame> {
        self.prev.as_ref()
    }

    pub fn metrics_snapshot(&self) -> RenderPathMetricsSnapshot {
        self.metrics.snapshot()
    }
}
