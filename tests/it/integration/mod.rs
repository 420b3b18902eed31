//! Integration tests for Empathy Board.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod drag_drop_workflow_tests;
