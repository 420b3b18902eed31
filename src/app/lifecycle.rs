//! Application lifecycle - construction and the toast refresh loop.

use super::EmpathyBoard;
use crate::app::state::UiState;
use crate::board::BoardState;
use crate::constants::NOTE_INPUT_PLACEHOLDER;
use crate::export::CaptureTracker;
use crate::notifications::ToastManager;
use crate::settings::Settings;
use gpui::*;
use gpui_component::input::{InputEvent, InputState};

impl EmpathyBoard {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let note_input =
            cx.new(|cx| InputState::new(window, cx).placeholder(NOTE_INPUT_PLACEHOLDER));

        let note_subscription = cx.subscribe_in(
            &note_input,
            window,
            |this, _input, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.add_note_from_input(window, cx);
                }
            },
        );

        Self {
            board: BoardState::new(),
            settings,
            ui: UiState {
                note_input,
                label_input: None,
                label_subscription: None,
                toast_manager: ToastManager::new(),
                toast_sweep: None,
                _subscriptions: vec![note_subscription],
            },
            capture: CaptureTracker::new(),
        }
    }

    /// Keep toasts animating and expiring until only persistent ones remain.
    ///
    /// Restarting replaces the previous loop, so a newly pushed toast that
    /// expires sooner than the others is picked up right away.
    pub fn schedule_toast_sweep(&mut self, cx: &mut Context<Self>) {
        let task = cx.spawn(async move |this, cx| {
            loop {
                let Some(wait) = this
                    .update(cx, |this, _cx| this.ui.toast_manager.next_refresh())
                    .ok()
                    .flatten()
                else {
                    break;
                };
                cx.background_executor().timer(wait).await;
                let swept = this.update(cx, |this, cx| {
                    this.ui.toast_manager.remove_expired();
                    cx.notify();
                });
                if swept.is_err() {
                    break;
                }
            }
        });
        self.ui.toast_sweep = Some(task);
    }
}
