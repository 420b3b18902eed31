//! Clipboard targets for exported images.

use super::{ExportError, ExportResult};
use gpui::{AsyncApp, ClipboardItem, Image, ImageFormat};

/// Destination of an encoded PNG.
pub trait ClipboardSink {
    fn write_png(&self, png: Vec<u8>) -> ExportResult<()>;
}

/// The platform clipboard, reached from an async task.
pub struct AppClipboard {
    cx: AsyncApp,
}

impl AppClipboard {
    pub fn new(cx: AsyncApp) -> Self {
        Self { cx }
    }
}

impl ClipboardSink for AppClipboard {
    fn write_png(&self, png: Vec<u8>) -> ExportResult<()> {
        // Fails only when the app is shutting down.
        self.cx
            .update(|cx| {
                let image = Image::from_bytes(ImageFormat::Png, png);
                cx.write_to_clipboard(ClipboardItem::new_image(&image));
            })
            .map_err(|_| ExportError::ClipboardUnavailable)
    }
}
