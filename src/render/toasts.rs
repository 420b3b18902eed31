//! Toast stack in the top-right corner.

use crate::notifications::{Toast, ToastManager};
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

fn render_toast(toast: &Toast, cx: &App) -> Div {
    let accent = rgb(toast.variant.accent());

    h_flex()
        .min_w(px(220.0))
        .px(px(14.0))
        .py(px(10.0))
        .gap(px(10.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(cx.theme().border)
        .bg(cx.theme().popover)
        .text_color(cx.theme().popover_foreground)
        .shadow_md()
        .opacity(toast.opacity())
        .child(
            div()
                .text_color(accent)
                .font_weight(FontWeight::BOLD)
                .child(toast.variant.icon()),
        )
        .child(div().text_sm().child(toast.message.clone()))
}

pub fn render_toasts(manager: &ToastManager, cx: &App) -> Div {
    v_flex()
        .absolute()
        .top(px(16.0))
        .right(px(16.0))
        .gap(px(8.0))
        .children(manager.toasts().iter().map(|toast| render_toast(toast, cx)))
}
