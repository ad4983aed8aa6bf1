mod common;

use common::Harness;
use core_grid::{AreaRect, ColorToken, PALETTE_SIZE};

fn rect(row_start: u16, row_end: u16, col_start: u16, col_end: u16) -> AreaRect {
    AreaRect {
        row_start,
        row_end,
        col_start,
        col_end,
    }
}

#[test]
fn upward_drag_commits_normalized_area() {
    let mut h = Harness::new();
    h.drag_cells((3, 1), (1, 1));
    let areas = h.state.registry().areas();
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].rect, rect(1, 4, 1, 2));
    assert!(!h.state.gesture().is_active());
}

#[test]
fn click_without_movement_commits_single_cell() {
    let mut h = Harness::new();
    let at = h.cell_xy(2, 3);
    assert!(h.press(at).unwrap().dirty);
    assert!(h.release(at).unwrap().dirty);
    assert_eq!(h.state.registry().areas()[0].rect, rect(2, 3, 3, 4));
}

#[test]
fn drag_preview_tracks_pointer() {
    let mut h = Harness::new();
    let start = h.cell_xy(1, 1);
    let mid = h.cell_xy(2, 3);
    h.press(start);
    h.drag(mid);
    assert_eq!(h.state.gesture().preview(), Some(rect(1, 3, 1, 4)));
    // Same cell again: nothing to redraw.
    assert!(!h.drag(mid).unwrap().dirty);
}

#[test]
fn leaving_canvas_mid_drag_never_commits() {
    let mut h = Harness::new();
    let start = h.cell_xy(1, 1);
    h.press(start);
    h.drag(h.cell_xy(2, 2));
    let code = *h.layout.code_panel();
    assert!(h.drag((code.x + 2, code.y + 2)).unwrap().dirty);
    assert!(!h.state.gesture().is_active());
    // Coming back and releasing over the canvas is a stray release.
    let back = h.cell_xy(2, 2);
    assert_eq!(h.drag(back), None);
    assert_eq!(h.release(back), None);
    assert!(h.state.registry().is_empty());
}

#[test]
fn release_off_canvas_cancels() {
    let mut h = Harness::new();
    h.press(h.cell_xy(1, 1));
    let status = *h.layout.status();
    h.release((status.x + 1, status.y));
    assert!(h.state.registry().is_empty());
    assert!(!h.state.gesture().is_active());
}

#[test]
fn stray_release_is_ignored() {
    let mut h = Harness::new();
    assert_eq!(h.release(h.cell_xy(1, 1)), None);
    assert!(h.state.registry().is_empty());
}

#[test]
fn colors_cycle_through_palette() {
    let mut h = Harness::with_size(160, 50);
    for _ in 0..=PALETTE_SIZE {
        h.drag_cells((1, 1), (1, 1));
    }
    let areas = h.state.registry().areas();
    assert_eq!(areas.len(), PALETTE_SIZE + 1);
    for (i, area) in areas.iter().enumerate() {
        assert_eq!(area.color, ColorToken::for_index(i));
    }
    assert_eq!(areas[PALETTE_SIZE].color, areas[0].color);
}

#[test]
fn focus_loss_cancels_gesture() {
    let mut h = Harness::new();
    h.press(h.cell_xy(2, 2));
    assert!(h.send(core_events::InputEvent::FocusLost).unwrap().dirty);
    assert!(!h.state.gesture().is_active());
    assert!(h.state.registry().is_empty());
}
