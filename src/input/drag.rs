//! Drag operations - the note preview under the cursor and the quadrant drop handler.
//!
//! gpui carries the `DragTransfer` as the active drag value from mouse down
//! on a note card until release. Releasing over a quadrant calls
//! `handle_drop`; releasing anywhere else calls nothing, which leaves the
//! board untouched.

use super::DragTransfer;
use crate::app::EmpathyBoard;
use crate::constants::{BOARD_TEXT_COLOR, DRAG_PREVIEW_OPACITY, NOTE_PADDING, NOTE_RADIUS};
use crate::types::{Note, QuadrantId};
use gpui::*;

impl EmpathyBoard {
    /// Shared drop handler for all four quadrants.
    pub fn handle_drop(
        &mut self,
        target: QuadrantId,
        transfer: &DragTransfer,
        cx: &mut Context<Self>,
    ) {
        if self.board.drop_on_quadrant(transfer, target) {
            cx.notify();
        }
    }
}

/// Translucent copy of a note card that follows the cursor.
pub struct NoteDragPreview {
    note: Note,
}

impl NoteDragPreview {
    pub fn new(note: Note) -> Self {
        Self { note }
    }
}

impl Render for NoteDragPreview {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .p(px(NOTE_PADDING))
            .rounded(px(NOTE_RADIUS))
            .bg(rgb(self.note.color.hex()))
            .text_color(rgb(BOARD_TEXT_COLOR))
            .shadow_md()
            .opacity(DRAG_PREVIEW_OPACITY)
            .child(self.note.text.clone())
    }
}
