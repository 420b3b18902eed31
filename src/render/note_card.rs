//! Note cards - draggable, with a delete control.

use crate::app::EmpathyBoard;
use crate::constants::{
    BOARD_TEXT_COLOR, DELETE_COLOR, DELETE_CONTROL_PADDING, DELETE_GLYPH, NOTE_CONTROL_GAP,
    NOTE_PADDING, NOTE_RADIUS,
};
use crate::input::{DragTransfer, NoteDragPreview};
use crate::types::{Container, Note};
use gpui::*;
use gpui_component::h_flex;

/// Render a note card held in `container`. Dragging it hands gpui a `DragTransfer`.
pub fn render_note_card(
    note: &Note,
    container: Container,
    cx: &Context<EmpathyBoard>,
) -> Stateful<Div> {
    let id = note.id;

    let delete_button = div()
        .id(ElementId::Name(format!("delete-{}", id).into()))
        .px(px(DELETE_CONTROL_PADDING))
        .text_color(rgb(DELETE_COLOR))
        .cursor_pointer()
        // Keep a press on the control from starting a drag.
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .on_click(cx.listener(move |this, _, _, cx| {
            this.delete_note(id, container, cx);
        }))
        .child(DELETE_GLYPH);

    let transfer = DragTransfer::new(note.clone(), container);

    div()
        .id(ElementId::Name(id.to_string().into()))
        .p(px(NOTE_PADDING))
        .rounded(px(NOTE_RADIUS))
        .bg(rgb(note.color.hex()))
        .text_color(rgb(BOARD_TEXT_COLOR))
        .shadow_sm()
        .cursor_move()
        .child(
            h_flex()
                .gap(px(NOTE_CONTROL_GAP))
                .child(note.text.clone())
                .child(delete_button),
        )
        .on_drag(transfer, |transfer, _offset, _window, cx| {
            cx.new(|_| NoteDragPreview::new(transfer.note().clone()))
        })
}
