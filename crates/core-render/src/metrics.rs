//! Render path metrics.
//!
//! Records what the engine actually did per frame (full repaint vs row diff)
//! and how much it wrote, separate from why a frame was requested.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RenderPathMetrics {
    /// Frames that repainted every row (first frame, resize).
    pub full_frames: AtomicU64,
    /// Frames that repainted only changed rows.
    pub partial_frames: AtomicU64,
    /// Frames where nothing differed from the previous flush.
    pub skipped_frames: AtomicU64,
    pub rows_repainted: AtomicU64,
    /// Terminal `Print` commands after style-run grouping.
    pub print_commands: AtomicU64,
    pub resize_invalidations: AtomicU64,
    /// Duration (ns) of the most recent frame, composition included.
    pub last_render_ns: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPathMetricsSnapshot {
    pub full_frames: u64,
    pub partial_frames: u64,
    pub skipped_frames: u64,
    pub rows_repainted: u64,
    pub print_commands: u64,
    pub resize_invalidations: u64,
    pub last_render_ns: u64,
}

impl RenderPathMetrics {
    pub fn snapshot(&self) -> RenderPathMetricsSnapshot {
        RenderPathMetricsSnapshot {
            full_frames: self.full_frames.load(Ordering::Relaxed),
            partial_frames: self.partial_frames.load(Ordering::Relaxed),
            skipped_frames: self.skipped_frames.load(Ordering::Relaxed),
            rows_repainted: self.rows_repainted.load(Ordering::Relaxed),
            print_commands: self.print_commands.load(Ordering::Relaxed),
            resize_invalidations: self.resize_invalidations.load(Ordering::Relaxed),
            last_render_ns: self.last_render_ns.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn add(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }
}
