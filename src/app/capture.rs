//! Capture handler - runs the export pipeline without blocking the board.

use super::EmpathyBoard;
use crate::export::{
    export_snapshot, AppClipboard, BackgroundRenderer, CaptureOptions, CaptureTicket,
    ExportReceipt, ExportResult,
};
use gpui::*;

impl EmpathyBoard {
    pub fn capture_board(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(ticket) = self.capture.begin(&mut self.ui.toast_manager) else {
            self.schedule_toast_sweep(cx);
            cx.notify();
            return;
        };

        let export = &self.settings.export;
        let options = CaptureOptions::new(
            export.effective_scale(window.scale_factor()),
            export.background_rgba(),
        );
        let snapshot = self.board.snapshot();
        let renderer = BackgroundRenderer::new(cx.background_executor().clone());

        cx.spawn(async move |this, cx| {
            let clipboard = AppClipboard::new(cx.clone());
            let result = export_snapshot(snapshot, options, &renderer, &clipboard).await;
            this.update(cx, |this, cx| this.finish_capture(ticket, result, cx))
                .ok();
        })
        .detach();

        cx.notify();
    }

    fn finish_capture(
        &mut self,
        ticket: CaptureTicket,
        result: ExportResult<ExportReceipt>,
        cx: &mut Context<Self>,
    ) {
        self.capture
            .finish(ticket, &result, &mut self.ui.toast_manager);
        self.schedule_toast_sweep(cx);
        cx.notify();
    }
}
