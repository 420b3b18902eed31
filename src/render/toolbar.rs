//! Toolbar - note input, add button and capture button.

use crate::app::EmpathyBoard;
use crate::constants::NOTE_INPUT_WIDTH;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::h_flex;
use gpui_component::input::Input;

pub fn render_toolbar(board: &EmpathyBoard, cx: &Context<EmpathyBoard>) -> Div {
    let capture_label = if board.capture.is_in_flight() {
        "Capturing..."
    } else {
        "📸 Capture Empathy Map"
    };

    h_flex()
        .w_full()
        .gap(px(10.0))
        .child(div().w(px(NOTE_INPUT_WIDTH)).child(Input::new(&board.ui.note_input)))
        .child(
            Button::new("add-note")
                .label("Add Note")
                .primary()
                .on_click(cx.listener(|this, _, window, cx| {
                    this.add_note_from_input(window, cx);
                })),
        )
        .child(div().flex_1())
        .child(
            Button::new("capture-board")
                .label(capture_label)
                .success()
                .on_click(cx.listener(|this, _, window, cx| {
                    this.capture_board(window, cx);
                })),
        )
}
