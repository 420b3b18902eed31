//! Board state - the note pool, quadrant placements and subject label.
//!
//! `BoardState` is the single owner of every note. All operations run to
//! completion inside one call, so a note is always in exactly one container:
//! moves are remove-then-append and never copy.

use crate::input::DragTransfer;
use crate::label::SubjectLabel;
use crate::types::{Container, Note, NoteColor, NoteId, QuadrantId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pool: Vec<Note>,
    placements: [Vec<Note>; 4],
    label: SubjectLabel,
    next_note_id: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Queries ====================

    /// Notes waiting to be placed, in creation order.
    pub fn pool(&self) -> &[Note] {
        &self.pool
    }

    /// Notes placed in `quadrant`, in drop order.
    pub fn quadrant(&self, quadrant: QuadrantId) -> &[Note] {
        &self.placements[quadrant.index()]
    }

    pub fn notes_in(&self, container: Container) -> &[Note] {
        match container {
            Container::Pool => &self.pool,
            Container::Quadrant(q) => self.quadrant(q),
        }
    }

    pub fn label(&self) -> &SubjectLabel {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut SubjectLabel {
        &mut self.label
    }

    /// Container currently holding `id`, if the note exists.
    pub fn location_of(&self, id: NoteId) -> Option<Container> {
        if self.pool.iter().any(|n| n.id == id) {
            return Some(Container::Pool);
        }
        QuadrantId::ALL
            .into_iter()
            .find(|q| self.quadrant(*q).iter().any(|n| n.id == id))
            .map(Container::Quadrant)
    }

    pub fn find_note(&self, id: NoteId) -> Option<&Note> {
        let container = self.location_of(id)?;
        self.notes_in(container).iter().find(|n| n.id == id)
    }

    /// Total number of notes across the pool and all quadrants.
    pub fn note_count(&self) -> usize {
        self.pool.len() + self.placements.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.note_count() == 0
    }

    // ==================== Note lifecycle ====================

    /// Add a note to the pool. Blank input is ignored.
    pub fn create_note(&mut self, text: &str) -> Option<NoteId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = NoteId(self.next_note_id);
        self.next_note_id += 1;

        let note = Note {
            id,
            text: text.to_string(),
            color: NoteColor::for_index(self.pool.len()),
        };
        tracing::debug!(%id, color = ?note.color, "created note");
        self.pool.push(note);
        Some(id)
    }

    /// Remove `id` from `container`. Returns false if it was not there.
    pub fn delete_note(&mut self, id: NoteId, container: impl Into<Container>) -> bool {
        let container = container.into();
        let removed = self.take(id, container).is_some();
        if removed {
            tracing::debug!(%id, %container, "deleted note");
        }
        removed
    }

    // ==================== Drag and drop ====================

    /// Start dragging `id` from wherever it currently is.
    pub fn begin_drag(&self, id: NoteId) -> Option<DragTransfer> {
        let origin = self.location_of(id)?;
        let note = self.find_note(id)?.clone();
        Some(DragTransfer::new(note, origin))
    }

    /// Move the dragged note from its origin to the tail of `target`.
    ///
    /// Dropping on the note's own quadrant moves it to the end of that list.
    /// If the note already left its origin (deleted mid-drag) nothing changes.
    pub fn drop_on_quadrant(&mut self, transfer: &DragTransfer, target: QuadrantId) -> bool {
        let id = transfer.note_id();
        let Some(note) = self.take(id, transfer.origin()) else {
            tracing::debug!(%id, origin = %transfer.origin(), "stale drag ignored");
            return false;
        };
        tracing::debug!(%id, from = %transfer.origin(), to = %target, "moved note");
        self.placements[target.index()].push(note);
        true
    }

    fn take(&mut self, id: NoteId, container: Container) -> Option<Note> {
        let notes = match container {
            Container::Pool => &mut self.pool,
            Container::Quadrant(q) => &mut self.placements[q.index()],
        };
        let index = notes.iter().position(|n| n.id == id)?;
        Some(notes.remove(index))
    }

    // ==================== Export ====================

    /// Copy of the region that is exported: quadrants and label, not the pool.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            label: self.label.text().to_string(),
            quadrants: QuadrantId::ALL.map(|q| QuadrantSnapshot {
                quadrant: q,
                notes: self.quadrant(q).to_vec(),
            }),
        }
    }
}

/// Immutable copy of one quadrant for export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadrantSnapshot {
    pub quadrant: QuadrantId,
    pub notes: Vec<Note>,
}

/// Immutable copy of the exported board region, safe to send to a background thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub label: String,
    pub quadrants: [QuadrantSnapshot; 4],
}
