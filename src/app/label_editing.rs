//! Subject label editing - inline input at the board center.

use super::EmpathyBoard;
use gpui::*;
use gpui_component::input::{InputEvent, InputState};

impl EmpathyBoard {
    /// Switch the label into edit mode. Clicking while already editing is ignored.
    pub fn start_label_edit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.board.label_mut().begin_edit() {
            return;
        }

        let current = self.board.label().text().to_string();
        let input = cx.new(|cx| InputState::new(window, cx).default_value(current));

        let input_clone = input.clone();
        window.defer(cx, move |window, cx| {
            input_clone.update(cx, |state, cx| {
                state.focus(window, cx);
            });
        });

        let subscription = cx.subscribe_in(
            &input,
            window,
            |this, input, event: &InputEvent, _window, cx| match event {
                InputEvent::Change { .. } => {
                    let text = input.read(cx).value().to_string();
                    if this.board.label_mut().set_text(text) {
                        cx.notify();
                    }
                }
                InputEvent::PressEnter { .. } | InputEvent::Blur => {
                    this.finish_label_edit(cx);
                }
                _ => {}
            },
        );

        self.ui.label_input = Some(input);
        self.ui.label_subscription = Some(subscription);
        cx.notify();
    }

    /// Leave edit mode, keeping the typed text.
    pub fn finish_label_edit(&mut self, cx: &mut Context<Self>) {
        if !self.board.label_mut().commit() {
            return;
        }
        tracing::debug!(label = %self.board.label().text(), "subject label set");
        self.ui.label_input = None;
        self.ui.label_subscription = None;
        cx.notify();
    }
}
