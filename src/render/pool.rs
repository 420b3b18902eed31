//! Note pool - unplaced notes waiting to be dragged onto the map.

use super::note_card::render_note_card;
use crate::app::EmpathyBoard;
use crate::constants::{NOTE_GAP, POOL_BACKGROUND, QUADRANT_PADDING};
use crate::types::Container;
use gpui::*;

pub fn render_pool(board: &EmpathyBoard, cx: &Context<EmpathyBoard>) -> Div {
    let state = &board.board;
    let mut pool = div()
        .w_full()
        .min_h(px(60.0))
        .p(px(QUADRANT_PADDING))
        .rounded(px(4.0))
        .bg(rgb(POOL_BACKGROUND))
        .flex()
        .flex_row()
        .flex_wrap()
        .items_start()
        .gap(px(NOTE_GAP));

    for note in state.pool() {
        pool = pool.child(render_note_card(note, Container::Pool, cx));
    }
    pool
}
