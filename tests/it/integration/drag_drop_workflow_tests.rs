//! Drag and drop workflows across the pool and all four quadrants.

use crate::helpers::{assert_partition, ids_in, move_note, TestBoardBuilder};
use empathyboard::board::BoardState;
use empathyboard::input::DragTransfer;
use empathyboard::types::{Container, QuadrantId};

#[test]
fn test_note_travels_through_every_quadrant() {
    let (mut board, ids) = TestBoardBuilder::new().with_note("traveller").build();
    let id = ids[0];

    for quadrant in QuadrantId::ALL {
        assert!(move_note(&mut board, id, quadrant));
        assert_eq!(board.location_of(id), Some(Container::Quadrant(quadrant)));
        assert_eq!(board.note_count(), 1);
        assert_partition(&board);
    }
    assert!(board.pool().is_empty());
}

#[test]
fn test_redrop_on_same_quadrant_moves_to_end() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_placed_note("a", QuadrantId::Says)
        .with_placed_note("b", QuadrantId::Says)
        .with_placed_note("c", QuadrantId::Says)
        .build();

    assert!(move_note(&mut board, ids[0], QuadrantId::Says));
    assert_eq!(ids_in(&board, QuadrantId::Says), vec![ids[1], ids[2], ids[0]]);
    assert_partition(&board);
}

#[test]
fn test_stale_transfer_after_delete_is_ignored() {
    let (mut board, ids) = TestBoardBuilder::new().with_note("doomed").build();
    let transfer = board.begin_drag(ids[0]).unwrap();

    board.delete_note(ids[0], Container::Pool);
    assert!(!board.drop_on_quadrant(&transfer, QuadrantId::Feels));
    assert!(board.is_empty());
}

#[test]
fn test_stale_transfer_after_move_does_not_duplicate() {
    let (mut board, ids) = TestBoardBuilder::new().with_note("twice").build();
    let transfer = board.begin_drag(ids[0]).unwrap();

    assert!(board.drop_on_quadrant(&transfer, QuadrantId::Does));
    assert!(!board.drop_on_quadrant(&transfer, QuadrantId::Thinks));
    assert_eq!(ids_in(&board, QuadrantId::Does), vec![ids[0]]);
    assert!(board.quadrant(QuadrantId::Thinks).is_empty());
    assert_partition(&board);
}

#[test]
fn test_partition_holds_over_mixed_sequence() {
    let mut board = BoardState::new();
    let mut created = Vec::new();

    for i in 0..12 {
        created.push(board.create_note(&format!("note {}", i)).unwrap());
    }
    for (i, id) in created.iter().enumerate() {
        let target = QuadrantId::ALL[i % 4];
        move_note(&mut board, *id, target);
        assert_partition(&board);
    }
    for id in created.iter().step_by(3) {
        let target = QuadrantId::ALL[(id.0 as usize + 1) % 4];
        move_note(&mut board, *id, target);
        assert_partition(&board);
    }
    for id in created.iter().skip(1).step_by(4) {
        let location = board.location_of(*id).unwrap();
        assert!(board.delete_note(*id, location));
        assert_partition(&board);
    }

    assert_eq!(board.note_count(), 9);
    assert!(board.pool().is_empty());
}

#[test]
fn test_quadrant_lists_are_independent() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_placed_note("says", QuadrantId::Says)
        .with_placed_note("feels", QuadrantId::Feels)
        .build();

    board.delete_note(ids[0], QuadrantId::Says);
    assert_eq!(ids_in(&board, QuadrantId::Feels), vec![ids[1]]);
}

#[test]
fn test_transfer_built_from_known_container() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note("pooled")
        .with_placed_note("placed", QuadrantId::Does)
        .build();

    // Cards hand over the container they are drawn in, without a board lookup
    let from_pool = DragTransfer::new(board.pool()[0].clone(), Container::Pool);
    assert_eq!(Some(from_pool.clone()), board.begin_drag(ids[0]));
    assert!(board.drop_on_quadrant(&from_pool, QuadrantId::Says));

    let placed = board.quadrant(QuadrantId::Does)[0].clone();
    let from_quadrant = DragTransfer::new(placed, QuadrantId::Does.into());
    assert!(board.drop_on_quadrant(&from_quadrant, QuadrantId::Says));

    assert_eq!(ids_in(&board, QuadrantId::Says), vec![ids[0], ids[1]]);
    assert_partition(&board);
}
