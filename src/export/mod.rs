//! Board capture - rasterize the empathy map and copy it to the clipboard.
//!
//! ```text
//! capture trigger
//!   -> CaptureTracker::begin        (Loading toast, or reject if one is running)
//!   -> export_snapshot().await      (render on background executor -> clipboard)
//!   -> CaptureTracker::finish       (dismiss Loading, one Success or Error toast)
//! ```
//!
//! The pipeline only reads a `BoardSnapshot`; it never touches `BoardState`,
//! so notes can be added, dragged and deleted while a capture is pending.
//!
//! ## Modules
//!
//! - `error` - `ExportError` and the `ExportResult` alias
//! - `raster` - Drawing the snapshot into an RGBA image and PNG encoding
//! - `clipboard` - Clipboard sinks

mod clipboard;
mod error;
pub mod raster;

pub use clipboard::{AppClipboard, ClipboardSink};
pub use error::*;

use crate::board::BoardSnapshot;
use crate::constants::{
    BOARD_SIZE, CAPTURE_BUSY_MESSAGE, CAPTURE_FAILURE_MESSAGE, CAPTURE_PROGRESS_MESSAGE,
    CAPTURE_SUCCESS_MESSAGE,
};
use crate::notifications::{Toast, ToastManager};
use gpui::BackgroundExecutor;
use std::future::Future;

/// How to rasterize the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureOptions {
    /// Physical pixels per logical pixel
    pub scale: f32,
    /// Board fill as RGBA
    pub background: [u8; 4],
}

impl CaptureOptions {
    pub fn new(scale: f32, background: [u8; 4]) -> Self {
        Self { scale, background }
    }

    /// Side length of the exported square image in pixels.
    pub fn pixel_size(&self) -> u32 {
        (BOARD_SIZE * self.scale).round() as u32
    }
}

/// What a successful capture produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Width and height of the copied image
    pub pixel_size: u32,
    /// Encoded PNG size
    pub bytes: usize,
}

/// Turns a snapshot into PNG bytes.
pub trait SnapshotRenderer {
    fn render(
        &self,
        snapshot: BoardSnapshot,
        options: CaptureOptions,
    ) -> impl Future<Output = ExportResult<Vec<u8>>>;
}

/// Renders on gpui's background thread pool.
pub struct BackgroundRenderer {
    executor: BackgroundExecutor,
}

impl BackgroundRenderer {
    pub fn new(executor: BackgroundExecutor) -> Self {
        Self { executor }
    }
}

impl SnapshotRenderer for BackgroundRenderer {
    fn render(
        &self,
        snapshot: BoardSnapshot,
        options: CaptureOptions,
    ) -> impl Future<Output = ExportResult<Vec<u8>>> {
        self.executor
            .spawn(async move { raster::render_png(&snapshot, &options) })
    }
}

/// Renders on the calling thread.
pub struct InlineRenderer;

impl SnapshotRenderer for InlineRenderer {
    fn render(
        &self,
        snapshot: BoardSnapshot,
        options: CaptureOptions,
    ) -> impl Future<Output = ExportResult<Vec<u8>>> {
        std::future::ready(raster::render_png(&snapshot, &options))
    }
}

/// Render `snapshot` and place the PNG on `clipboard`.
pub async fn export_snapshot<R, C>(
    snapshot: BoardSnapshot,
    options: CaptureOptions,
    renderer: &R,
    clipboard: &C,
) -> ExportResult<ExportReceipt>
where
    R: SnapshotRenderer,
    C: ClipboardSink,
{
    let png = renderer.render(snapshot, options).await?;
    if png.is_empty() {
        return Err(ExportError::EmptyImage);
    }
    let receipt = ExportReceipt {
        pixel_size: options.pixel_size(),
        bytes: png.len(),
    };
    clipboard.write_png(png)?;
    Ok(receipt)
}

// ============================================================================
// Progress tracking
// ============================================================================

/// User-visible state of the capture feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureStatus {
    #[default]
    Idle,
    InProgress,
    Succeeded,
    Failed,
}

/// Proof that a capture was started; consumed by `CaptureTracker::finish`.
#[derive(Debug)]
pub struct CaptureTicket {
    loading_toast: u64,
}

/// Serializes captures and maps their outcome onto toasts.
#[derive(Debug, Default)]
pub struct CaptureTracker {
    status: CaptureStatus,
}

impl CaptureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == CaptureStatus::InProgress
    }

    /// Start a capture, or refuse with a warning toast if one is still running.
    pub fn begin(&mut self, toasts: &mut ToastManager) -> Option<CaptureTicket> {
        if self.is_in_flight() {
            tracing::warn!("Capture requested while another is in flight");
            toasts.push(Toast::warning(CAPTURE_BUSY_MESSAGE));
            return None;
        }
        self.status = CaptureStatus::InProgress;
        let loading_toast = toasts.push(Toast::loading(CAPTURE_PROGRESS_MESSAGE));
        Some(CaptureTicket { loading_toast })
    }

    /// Record the terminal state of the capture behind `ticket`.
    pub fn finish(
        &mut self,
        ticket: CaptureTicket,
        result: &ExportResult<ExportReceipt>,
        toasts: &mut ToastManager,
    ) -> CaptureStatus {
        toasts.remove(ticket.loading_toast);
        self.status = match result {
            Ok(receipt) => {
                tracing::info!(
                    size = receipt.pixel_size,
                    bytes = receipt.bytes,
                    "Board copied to clipboard"
                );
                toasts.push(Toast::success(CAPTURE_SUCCESS_MESSAGE));
                CaptureStatus::Succeeded
            }
            Err(e) => {
                tracing::error!("Board capture failed: {}", e);
                toasts.push(Toast::error(CAPTURE_FAILURE_MESSAGE));
                CaptureStatus::Failed
            }
        };
        self.status
    }
}
