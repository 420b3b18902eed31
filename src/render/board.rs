//! Empathy map rendering - the quadrant grid, drop targets and the subject label.
//!
//! This is the region the capture exports; `export::raster` draws the same
//! layout from the constants in `crate::constants`.

use super::note_card::render_note_card;
use crate::app::EmpathyBoard;
use crate::constants::{
    BOARD_BACKGROUND, BOARD_LINE_COLOR, BOARD_SIZE, BOARD_TEXT_COLOR, CENTER_CIRCLE_SIZE,
    DROP_HIGHLIGHT_COLOR, LABEL_INPUT_WIDTH, NOTE_GAP, QUADRANT_PADDING, QUADRANT_TITLE_GAP,
};
use crate::input::DragTransfer;
use crate::types::{Container, QuadrantId};
use gpui::*;
use gpui_component::input::Input;

pub fn render_empathy_map(board: &EmpathyBoard, cx: &Context<EmpathyBoard>) -> Stateful<Div> {
    let line = rgb(BOARD_LINE_COLOR);

    let cell = |quadrant: QuadrantId| {
        let (col, row) = quadrant.cell();
        let mut slot = div().flex_1().h_full().border_color(line);
        if col == 0 {
            slot = slot.border_r_1();
        }
        if row == 0 {
            slot = slot.border_b_1();
        }
        slot.child(render_quadrant(board, quadrant, cx))
    };

    div()
        .id("empathy-map")
        .relative()
        .flex_none()
        .w(px(BOARD_SIZE))
        .h(px(BOARD_SIZE))
        .mx_auto()
        .border_2()
        .border_color(line)
        .rounded(px(4.0))
        .bg(rgb(BOARD_BACKGROUND))
        .text_color(rgb(BOARD_TEXT_COLOR))
        .child(
            div()
                .size_full()
                .flex()
                .flex_col()
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .flex_1()
                        .child(cell(QuadrantId::Says))
                        .child(cell(QuadrantId::Thinks)),
                )
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .flex_1()
                        .child(cell(QuadrantId::Does))
                        .child(cell(QuadrantId::Feels)),
                ),
        )
        .child(render_subject_label(board, cx))
}

/// A quadrant is a drop target; every quadrant routes to the same handler.
fn render_quadrant(
    board: &EmpathyBoard,
    quadrant: QuadrantId,
    cx: &Context<EmpathyBoard>,
) -> Stateful<Div> {
    let state = &board.board;
    // Cards keep their content width instead of stretching across the quadrant.
    let mut notes = div().flex().flex_col().items_start().gap(px(NOTE_GAP));
    for note in state.quadrant(quadrant) {
        notes = notes.child(render_note_card(note, Container::Quadrant(quadrant), cx));
    }

    div()
        .id(ElementId::Name(format!("quadrant-{}", quadrant.title()).into()))
        .size_full()
        .p(px(QUADRANT_PADDING))
        .drag_over::<DragTransfer>(|style, _, _, _| style.bg(rgba(DROP_HIGHLIGHT_COLOR)))
        .on_drop(cx.listener(move |this, transfer: &DragTransfer, _window, cx| {
            this.handle_drop(quadrant, transfer, cx);
        }))
        .child(
            div()
                .font_weight(FontWeight::BOLD)
                .mb(px(QUADRANT_TITLE_GAP))
                .child(quadrant.title()),
        )
        .child(notes)
}

fn render_subject_label(board: &EmpathyBoard, cx: &Context<EmpathyBoard>) -> Stateful<Div> {
    let offset = (BOARD_SIZE - CENTER_CIRCLE_SIZE) / 2.0;

    let content: AnyElement = match (&board.ui.label_input, board.board.label().is_editing()) {
        (Some(input), true) => div()
            .w(px(LABEL_INPUT_WIDTH))
            .child(Input::new(input).appearance(false))
            .into_any_element(),
        _ => div()
            .text_center()
            .child(board.board.label().text().to_string())
            .into_any_element(),
    };

    div()
        .id("subject-label")
        .absolute()
        .top(px(offset))
        .left(px(offset))
        .size(px(CENTER_CIRCLE_SIZE))
        .rounded_full()
        .bg(white())
        .border_2()
        .border_color(rgb(BOARD_LINE_COLOR))
        .flex()
        .items_center()
        .justify_center()
        .font_weight(FontWeight::BOLD)
        .cursor_pointer()
        .on_click(cx.listener(|this, _, window, cx| {
            this.start_label_edit(window, cx);
        }))
        .child(content)
}
