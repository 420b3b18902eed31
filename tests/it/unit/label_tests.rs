//! Unit tests for the subject label.

use empathyboard::label::{LabelMode, SubjectLabel};

#[test]
fn test_default_is_placeholder_in_display_mode() {
    let label = SubjectLabel::default();
    assert_eq!(label.text(), "ENTER NAME");
    assert_eq!(label.mode(), LabelMode::Display);
}

#[test]
fn test_text_ignored_outside_edit_mode() {
    let mut label = SubjectLabel::default();
    assert!(!label.set_text("Jordan"));
    assert_eq!(label.text(), "ENTER NAME");
}

#[test]
fn test_edit_commit_cycle() {
    let mut label = SubjectLabel::default();
    assert!(label.begin_edit());
    assert!(label.set_text("Jordan"));
    assert!(label.commit());
    assert_eq!(label.text(), "Jordan");
    assert!(!label.is_editing());
}

#[test]
fn test_begin_edit_is_idempotent() {
    let mut label = SubjectLabel::default();
    assert!(label.begin_edit());
    label.set_text("partial");
    assert!(!label.begin_edit());
    assert_eq!(label.text(), "partial");
    assert!(label.is_editing());
}

#[test]
fn test_commit_without_edit_is_noop() {
    let mut label = SubjectLabel::default();
    assert!(!label.commit());
    assert_eq!(label.mode(), LabelMode::Display);
}

#[test]
fn test_empty_label_allowed() {
    let mut label = SubjectLabel::default();
    label.begin_edit();
    label.set_text("");
    label.commit();
    assert_eq!(label.text(), "");
}
