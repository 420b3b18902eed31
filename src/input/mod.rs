//! Pointer and keyboard input for the board.
//!
//! ## Modules
//!
//! - `state` - Drag payload carried by gpui while a note is in flight
//! - `drag` - Drag start/preview and the shared quadrant drop handler

mod drag;
mod state;

pub use drag::NoteDragPreview;
pub use state::DragTransfer;
