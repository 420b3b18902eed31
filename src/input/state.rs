//! Drag payload - the note in flight and the container it came from.
//!
//! ## Transitions
//!
//! ```text
//! InPool        -> InQuadrant(Q)   (drop on quadrant Q)
//! InQuadrant(P) -> InQuadrant(Q)   (drop on quadrant Q, Q may equal P)
//! any           -> unchanged       (drop outside every quadrant)
//! ```
//!
//! The transfer only exists while gpui holds it as the active drag value;
//! cancelling a drag simply drops it.

use crate::types::{Container, Note, NoteId};

#[derive(Clone, Debug, PartialEq)]
pub struct DragTransfer {
    note: Note,
    origin: Container,
}

impl DragTransfer {
    pub fn new(note: Note, origin: Container) -> Self {
        Self { note, origin }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn note_id(&self) -> NoteId {
        self.note.id
    }

    /// Container the note must be removed from on drop
    pub fn origin(&self) -> Container {
        self.origin
    }
}
