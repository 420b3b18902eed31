//! Snapshot tests using the insta crate.
//!
//! Covers the serialized shape of notes, board snapshots and settings.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use empathyboard::board::BoardState;
use empathyboard::settings::Settings;
use empathyboard::types::{Container, Note, NoteColor, NoteId, QuadrantId};

#[test]
fn snapshot_note() {
    let note = Note {
        id: NoteId(4),
        text: "Wants a faster checkout".to_string(),
        color: NoteColor::Orange,
    };
    insta::assert_json_snapshot!(note, @r#"
    {
      "id": 4,
      "text": "Wants a faster checkout",
      "color": "orange"
    }
    "#);
}

#[test]
fn snapshot_containers() {
    let containers = vec![Container::Pool, Container::Quadrant(QuadrantId::Feels)];
    insta::assert_json_snapshot!(containers, @r#"
    [
      "pool",
      {
        "quadrant": "feels"
      }
    ]
    "#);
}

#[test]
fn snapshot_board_export() {
    let mut board = BoardState::new();
    let id = board.create_note("Says thanks a lot").unwrap();
    board.create_note("still in pool").unwrap();
    let transfer = board.begin_drag(id).unwrap();
    board.drop_on_quadrant(&transfer, QuadrantId::Says);

    insta::assert_json_snapshot!(board.snapshot(), @r#"
    {
      "label": "ENTER NAME",
      "quadrants": [
        {
          "quadrant": "says",
          "notes": [
            {
              "id": 0,
              "text": "Says thanks a lot",
              "color": "blue"
            }
          ]
        },
        {
          "quadrant": "thinks",
          "notes": []
        },
        {
          "quadrant": "does",
          "notes": []
        },
        {
          "quadrant": "feels",
          "notes": []
        }
      ]
    }
    "#);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r##"
    {
      "theme": "light",
      "export": {
        "background": "#f9fafb",
        "scale_override": null
      }
    }
    "##);
}
