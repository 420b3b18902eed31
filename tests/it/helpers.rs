//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder for boards with notes already placed
//! - `assert_partition` - Checks every note lives in exactly one container
//! - Snapshot fixtures for export tests

use empathyboard::board::{BoardSnapshot, BoardState};
use empathyboard::types::{Container, NoteId, QuadrantId};
use std::collections::HashSet;

// ============================================================================
// TestBoardBuilder
// ============================================================================

/// Builder for creating test boards.
///
/// # Example
/// ```ignore
/// let (board, ids) = TestBoardBuilder::new()
///     .with_note("in pool")
///     .with_placed_note("heard it", QuadrantId::Says)
///     .with_label("Alex")
///     .build();
/// ```
#[derive(Default)]
pub struct TestBoardBuilder {
    notes: Vec<(String, Option<QuadrantId>)>,
    label: Option<String>,
}

impl TestBoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note that stays in the pool.
    pub fn with_note(mut self, text: &str) -> Self {
        self.notes.push((text.to_string(), None));
        self
    }

    /// Add a note and drag it into `quadrant`.
    pub fn with_placed_note(mut self, text: &str, quadrant: QuadrantId) -> Self {
        self.notes.push((text.to_string(), Some(quadrant)));
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Build the board, returning the note ids in insertion order.
    pub fn build(self) -> (BoardState, Vec<NoteId>) {
        let mut board = BoardState::new();
        let mut ids = Vec::new();

        for (text, target) in self.notes {
            let id = board.create_note(&text).expect("builder note text is not blank");
            if let Some(quadrant) = target {
                move_note(&mut board, id, quadrant);
            }
            ids.push(id);
        }

        if let Some(label) = self.label {
            let label_state = board.label_mut();
            label_state.begin_edit();
            label_state.set_text(label);
            label_state.commit();
        }

        (board, ids)
    }
}

// ============================================================================
// Board helpers
// ============================================================================

/// Drag `id` from wherever it is and drop it on `quadrant`.
pub fn move_note(board: &mut BoardState, id: NoteId, quadrant: QuadrantId) -> bool {
    let transfer = board.begin_drag(id).expect("note exists");
    board.drop_on_quadrant(&transfer, quadrant)
}

/// Ids in `container`, in display order.
pub fn ids_in(board: &BoardState, container: impl Into<Container>) -> Vec<NoteId> {
    board
        .notes_in(container.into())
        .iter()
        .map(|n| n.id)
        .collect()
}

/// Assert that no note id appears in more than one container (or twice in one).
pub fn assert_partition(board: &BoardState) {
    let mut seen = HashSet::new();
    let containers = std::iter::once(Container::Pool)
        .chain(QuadrantId::ALL.into_iter().map(Container::Quadrant));

    for container in containers {
        for note in board.notes_in(container) {
            assert!(
                seen.insert(note.id),
                "{} appears more than once (again in {})",
                note.id,
                container
            );
        }
    }
    assert_eq!(seen.len(), board.note_count());
}

// ============================================================================
// Fixtures
// ============================================================================

/// Snapshot of a board with one note in every quadrant and one left in the pool.
pub fn sample_snapshot() -> BoardSnapshot {
    let (board, _) = TestBoardBuilder::new()
        .with_placed_note("We need this by Friday", QuadrantId::Says)
        .with_placed_note("Is this worth it?", QuadrantId::Thinks)
        .with_placed_note("Checks email twice", QuadrantId::Does)
        .with_placed_note("Anxious", QuadrantId::Feels)
        .with_note("unplaced")
        .with_label("Dana")
        .build();
    board.snapshot()
}
