//! Unit tests for core types.

use empathyboard::types::{Container, NoteColor, NoteId, QuadrantId};

#[test]
fn test_quadrant_titles_in_grid_order() {
    let titles: Vec<_> = QuadrantId::ALL.iter().map(|q| q.title()).collect();
    assert_eq!(titles, vec!["SAYS", "THINKS", "DOES", "FEELS"]);
}

#[test]
fn test_quadrant_cells() {
    assert_eq!(QuadrantId::Says.cell(), (0, 0));
    assert_eq!(QuadrantId::Thinks.cell(), (1, 0));
    assert_eq!(QuadrantId::Does.cell(), (0, 1));
    assert_eq!(QuadrantId::Feels.cell(), (1, 1));
}

#[test]
fn test_container_from_hint() {
    assert_eq!(Container::from(None), Container::Pool);
    assert_eq!(
        Container::from(Some(QuadrantId::Does)),
        Container::Quadrant(QuadrantId::Does)
    );
}

#[test]
fn test_palette_wraps() {
    assert_eq!(NoteColor::for_index(0), NoteColor::Blue);
    assert_eq!(NoteColor::for_index(7), NoteColor::Teal);
    assert_eq!(NoteColor::for_index(8), NoteColor::Blue);
}

#[test]
fn test_color_rgba_matches_hex() {
    assert_eq!(NoteColor::Red.rgba(), [0xfe, 0xca, 0xca, 0xff]);
}

#[test]
fn test_display() {
    assert_eq!(NoteId(3).to_string(), "note-3");
    assert_eq!(Container::Pool.to_string(), "pool");
    assert_eq!(Container::Quadrant(QuadrantId::Feels).to_string(), "FEELS");
}
