//! Application module - the EmpathyBoard view and its handlers.
//!
//! This module is organized into several submodules:
//! - `state` - The EmpathyBoard struct definition and sub-structs
//! - `lifecycle` - Construction and toast expiry
//! - `notes` - Adding and deleting notes
//! - `label_editing` - Subject label edit mode
//! - `capture` - Clipboard export of the board
//!
//! Drag-and-drop handlers live in `crate::input`, rendering in `crate::render`.

mod capture;
mod label_editing;
mod lifecycle;
mod notes;
mod state;

pub use state::{EmpathyBoard, UiState};
