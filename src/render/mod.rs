//! Rendering - the EmpathyBoard view tree.
//!
//! - `toolbar` - Note input, add and capture buttons
//! - `pool` - Unplaced notes
//! - `board` - Quadrant grid, drop targets, subject label
//! - `note_card` - Draggable note card and delete control
//! - `toasts` - Notification stack

mod board;
mod note_card;
mod pool;
mod toasts;
mod toolbar;

pub use board::render_empathy_map;
pub use note_card::render_note_card;
pub use pool::render_pool;
pub use toasts::render_toasts;
pub use toolbar::render_toolbar;

use crate::app::EmpathyBoard;
use crate::constants::APP_PADDING;
use crate::profile_scope;
use gpui::*;
use gpui_component::ActiveTheme as _;

impl Render for EmpathyBoard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_empathy_board");

        div()
            .id("empathy-board")
            .relative()
            .size_full()
            .overflow_y_scroll()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .p(px(APP_PADDING))
            .flex()
            .flex_col()
            .gap(px(20.0))
            .child(render_toolbar(self, cx))
            .child(render_pool(self, cx))
            .child(render_empathy_map(self, cx))
            .child(render_toasts(&self.ui.toast_manager, cx))
    }
}
