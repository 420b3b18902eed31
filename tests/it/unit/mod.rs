//! Unit tests for Empathy Board.

mod board_tests;
mod label_tests;
mod perf_tests;
mod snapshot_tests;
mod types_tests;
