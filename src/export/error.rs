//! Error types for the capture pipeline.
//!
//! Every failure is caught at the pipeline boundary, logged, and surfaced to
//! the user as a single generic toast; callers never branch on the variant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The board could not be rasterized
    #[error("Render error: {0}")]
    Render(String),

    /// PNG encoding failed
    #[error("PNG encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Rendering produced no pixels
    #[error("Rendered image is empty")]
    EmptyImage,

    /// The platform clipboard could not be reached
    #[error("Clipboard unavailable")]
    ClipboardUnavailable,
}

/// Result type alias for capture operations
pub type ExportResult<T> = Result<T, ExportError>;
