//! Frame composition: paint every layout region from designer state.

use crate::grid_view::paint_canvas;
use crate::status::{StatusContext, compose_status, format_status};
use crate::{CellStyle, Frame, style};
use core_codegen::Syntax;
use core_model::{Button, ScreenLayout};
use core_state::DesignerState;

const TITLE: &str = " gridcraft - drag across the canvas to add grid areas";
const DIVIDER: char = '│';
const TRUNCATED: char = '…';

pub fn build_frame(state: &DesignerState, layout: &ScreenLayout) -> Frame {
    let (width, height) = layout.size();
    let mut frame = Frame::new(width, height);
    paint_title(&mut frame, layout);
    paint_fields(&mut frame, state, layout);
    paint_buttons(&mut frame, state, layout);
    paint_headings(&mut frame, state, layout);
    paint_divider(&mut frame, layout);
    paint_canvas(
        &mut frame,
        layout.canvas(),
        state.gesture(),
        state.registry(),
    );
    paint_code(&mut frame, state, layout);
    paint_status(&mut frame, state, layout);
    frame
}

fn paint_title(frame: &mut Frame, layout: &ScreenLayout) {
    let r = layout.title();
    frame.put_str(r.x, r.y, TITLE, r.width, style::title());
}

fn paint_fields(frame: &mut Frame, state: &DesignerState, layout: &ScreenLayout) {
    let focused = state.fields().focused();
    for &(field, r) in layout.fields() {
        let value = state.fields().display(field, state.config());
        let text = format!("{} [{:>2}]", field.label(), value);
        frame.put_str(r.x, r.y, &text, r.width, CellStyle::PLAIN);
        if focused == Some(field) {
            let box_x = r.x.saturating_add(field.label().len() as u16 + 1);
            let box_w = r.right().saturating_sub(box_x);
            frame.restyle_span(box_x, r.y, box_w, style::active_control());
        }
    }
}

fn button_selected(button: Button, syntax: Syntax) -> bool {
    matches!(
        (button, syntax),
        (Button::Tailwind, Syntax::Tailwind) | (Button::Css, Syntax::Css)
    )
}

fn paint_buttons(frame: &mut Frame, state: &DesignerState, layout: &ScreenLayout) {
    for &(button, r) in layout.buttons() {
        let text = format!("[ {} ]", button.label());
        let style = if button_selected(button, state.syntax()) {
            style::active_control()
        } else {
            CellStyle::PLAIN
        };
        frame.put_str(r.x, r.y, &text, r.width, style);
    }
}

fn paint_headings(frame: &mut Frame, state: &DesignerState, layout: &ScreenLayout) {
    let y = layout.headings().y;
    if layout.headings().is_empty() {
        return;
    }
    let canvas = layout.canvas().region();
    let config = state.config();
    let heading = format!(" Canvas {}x{}", config.columns, config.rows);
    frame.put_str(canvas.x, y, &heading, canvas.width, style::heading());

    let code = layout.code_panel();
    let total = state.generated().display_lines().len();
    let mut heading = format!("{} output", state.syntax().label());
    let rows = layout.code_rows();
    if total > rows && rows > 0 {
        let first = state.code_scroll() + 1;
        let last = (state.code_scroll() + rows).min(total);
        heading.push_str(&format!(" (lines {first}-{last} of {total})"));
    }
    frame.put_str(code.x, y, &heading, code.width, style::heading());
}

fn paint_divider(frame: &mut Frame, layout: &ScreenLayout) {
    let x = layout.divider_x();
    let body = layout.code_panel();
    for y in body.y..body.bottom() {
        frame.set(x, y, DIVIDER, style::divider());
    }
}

fn paint_code(frame: &mut Frame, state: &DesignerState, layout: &ScreenLayout) {
    let r = *layout.code_panel();
    if r.is_empty() {
        return;
    }
    let lines = state.generated().display_lines();
    for (row, line) in lines
        .iter()
        .skip(state.code_scroll())
        .take(usize::from(r.height))
        .enumerate()
    {
        let y = r.y + row as u16;
        let written = frame.put_str(r.x, y, line, r.width, CellStyle::PLAIN);
        if line.chars().count() > usize::from(written) && written > 0 {
            frame.set(r.x + written - 1, y, TRUNCATED, style::divider());
        }
    }
}

fn paint_status(frame: &mut Frame, state: &DesignerState, layout: &ScreenLayout) {
    let r = *layout.status();
    if r.is_empty() {
        return;
    }
    let ctx = StatusContext {
        syntax: state.syntax(),
        config: state.config(),
        area_count: state.registry().len(),
        preview: state.gesture().preview(),
        focused: state.fields().focused(),
        ephemeral: state.ephemeral_status.as_ref().map(|m| m.text.as_str()),
    };
    let line = format_status(&compose_status(&ctx));
    frame.fill(r.x, r.y, r.width, r.height, ' ', style::status_line());
    frame.put_str(r.x, r.y, &line, r.width, style::status_line());
}
