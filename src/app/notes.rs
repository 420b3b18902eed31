//! Note pool handlers - add from the toolbar input, delete from any container.

use super::EmpathyBoard;
use crate::types::{Container, NoteId};
use gpui::*;

impl EmpathyBoard {
    /// Create a note from the toolbar input and clear it. Blank input does nothing.
    pub fn add_note_from_input(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let text = self.ui.note_input.read(cx).value().to_string();
        if self.board.create_note(&text).is_none() {
            return;
        }

        self.ui.note_input.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
        cx.notify();
    }

    pub fn delete_note(&mut self, id: NoteId, container: Container, cx: &mut Context<Self>) {
        if self.board.delete_note(id, container) {
            cx.notify();
        }
    }
}
