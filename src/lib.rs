//! Empathy Board - a gpui board for building empathy maps.
//!
//! Notes are typed into a pool, dragged into one of four quadrants
//! (SAYS, THINKS, DOES, FEELS) around an editable subject label, and the
//! finished map is copied to the clipboard as a PNG.

pub mod app;
pub mod board;
pub mod constants;
pub mod export;
pub mod input;
pub mod label;
pub mod notifications;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;
