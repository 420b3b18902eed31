//! Unit tests for board state.

use crate::helpers::{assert_partition, ids_in, move_note, TestBoardBuilder};
use empathyboard::board::BoardState;
use empathyboard::types::{Container, NoteColor, QuadrantId};

#[test]
fn test_new_board_is_empty() {
    let board = BoardState::new();
    assert!(board.is_empty());
    assert!(board.pool().is_empty());
    for quadrant in QuadrantId::ALL {
        assert!(board.quadrant(quadrant).is_empty());
    }
    assert_eq!(board.label().text(), "ENTER NAME");
}

#[test]
fn test_create_note_appends_to_pool() {
    let mut board = BoardState::new();
    let first = board.create_note("first").unwrap();
    let second = board.create_note("second").unwrap();

    assert_eq!(ids_in(&board, Container::Pool), vec![first, second]);
    assert_eq!(board.location_of(second), Some(Container::Pool));
}

#[test]
fn test_blank_note_rejected() {
    let mut board = BoardState::new();
    assert!(board.create_note("").is_none());
    assert!(board.create_note("   \t ").is_none());
    assert!(board.is_empty());
}

#[test]
fn test_note_text_kept_verbatim() {
    let mut board = BoardState::new();
    let id = board.create_note("  padded  ").unwrap();
    assert_eq!(board.find_note(id).unwrap().text, "  padded  ");
}

#[test]
fn test_ids_unique_after_delete() {
    let mut board = BoardState::new();
    let a = board.create_note("a").unwrap();
    board.delete_note(a, Container::Pool);
    let b = board.create_note("b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_color_cycles_with_pool_size() {
    let mut board = BoardState::new();
    for i in 0..9 {
        let id = board.create_note(&format!("note {}", i)).unwrap();
        assert_eq!(board.find_note(id).unwrap().color, NoteColor::for_index(i));
    }
    assert_eq!(board.pool()[8].color, NoteColor::Blue);
}

#[test]
fn test_delete_from_quadrant_keeps_others() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_placed_note("a", QuadrantId::Does)
        .with_placed_note("b", QuadrantId::Does)
        .with_placed_note("c", QuadrantId::Does)
        .build();

    assert!(board.delete_note(ids[1], QuadrantId::Does));
    assert_eq!(ids_in(&board, QuadrantId::Does), vec![ids[0], ids[2]]);
    assert!(board.find_note(ids[1]).is_none());
}

#[test]
fn test_delete_with_wrong_container_is_noop() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_placed_note("a", QuadrantId::Feels)
        .build();

    assert!(!board.delete_note(ids[0], Container::Pool));
    assert!(!board.delete_note(ids[0], QuadrantId::Says));
    assert_eq!(board.location_of(ids[0]), Some(Container::Quadrant(QuadrantId::Feels)));
}

#[test]
fn test_delete_missing_id_is_noop() {
    let (mut board, ids) = TestBoardBuilder::new().with_note("only").build();
    board.delete_note(ids[0], Container::Pool);
    assert!(!board.delete_note(ids[0], Container::Pool));
    assert!(board.is_empty());
}

#[test]
fn test_move_appends_to_tail() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_placed_note("existing", QuadrantId::Thinks)
        .with_note("new")
        .build();

    assert!(move_note(&mut board, ids[1], QuadrantId::Thinks));
    assert_eq!(ids_in(&board, QuadrantId::Thinks), vec![ids[0], ids[1]]);
    assert!(board.pool().is_empty());
    assert_partition(&board);
}

#[test]
fn test_drag_without_drop_leaves_board_unchanged() {
    let (board, ids) = TestBoardBuilder::new().with_note("a").build();
    let before = board.clone();
    let transfer = board.begin_drag(ids[0]).unwrap();
    drop(transfer);
    assert_eq!(board.pool(), before.pool());
}

#[test]
fn test_snapshot_reflects_board() {
    let (board, ids) = TestBoardBuilder::new()
        .with_placed_note("says", QuadrantId::Says)
        .with_note("pool")
        .with_label("Sam")
        .build();

    let snapshot = board.snapshot();
    assert_eq!(snapshot.label, "Sam");
    assert_eq!(snapshot.quadrants[0].quadrant, QuadrantId::Says);
    assert_eq!(snapshot.quadrants[0].notes[0].id, ids[0]);
    let total: usize = snapshot.quadrants.iter().map(|q| q.notes.len()).sum();
    assert_eq!(total, 1);
}
