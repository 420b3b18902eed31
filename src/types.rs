//! Core types for the empathy board.
//!
//! Notes, the fixed quadrant set, and the container addressing used by the
//! board operations and drag payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Notes
// ============================================================================

/// Identifier of a note, unique for the lifetime of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note-{}", self.0)
    }
}

/// Palette a note's background is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Yellow,
    Violet,
    Teal,
}

impl NoteColor {
    /// Palette in assignment order.
    pub const PALETTE: [NoteColor; 8] = [
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Red,
        NoteColor::Orange,
        NoteColor::Purple,
        NoteColor::Yellow,
        NoteColor::Violet,
        NoteColor::Teal,
    ];

    /// Color for the note created at `index`, cycling through the palette.
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Color as a 0xRRGGBB value.
    pub fn hex(self) -> u32 {
        match self {
            NoteColor::Blue => 0xbfdbfe,
            NoteColor::Green => 0xbbf7d0,
            NoteColor::Red => 0xfecaca,
            NoteColor::Orange => 0xfed7aa,
            NoteColor::Purple => 0xe9d5ff,
            NoteColor::Yellow => 0xfde68a,
            NoteColor::Violet => 0xddd6fe,
            NoteColor::Teal => 0x99f6e4,
        }
    }

    /// Color as opaque RGBA bytes.
    pub fn rgba(self) -> [u8; 4] {
        let hex = self.hex();
        [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xff]
    }
}

/// A single user-created text item.
///
/// Notes are never edited in place; they only move between containers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub color: NoteColor,
}

// ============================================================================
// Quadrants
// ============================================================================

/// The four fixed categories of an empathy map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadrantId {
    Says,
    Thinks,
    Does,
    Feels,
}

impl QuadrantId {
    /// All quadrants in grid order: top-left, top-right, bottom-left, bottom-right.
    pub const ALL: [QuadrantId; 4] = [
        QuadrantId::Says,
        QuadrantId::Thinks,
        QuadrantId::Does,
        QuadrantId::Feels,
    ];

    /// Title drawn at the top of the quadrant
    pub fn title(self) -> &'static str {
        match self {
            QuadrantId::Says => "SAYS",
            QuadrantId::Thinks => "THINKS",
            QuadrantId::Does => "DOES",
            QuadrantId::Feels => "FEELS",
        }
    }

    /// Position in `ALL`, also the storage slot in the board.
    pub fn index(self) -> usize {
        match self {
            QuadrantId::Says => 0,
            QuadrantId::Thinks => 1,
            QuadrantId::Does => 2,
            QuadrantId::Feels => 3,
        }
    }

    /// Grid cell as (column, row).
    pub fn cell(self) -> (usize, usize) {
        let index = self.index();
        (index % 2, index / 2)
    }
}

impl fmt::Display for QuadrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// Containers
// ============================================================================

/// Where a note currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// The unplaced note pool
    Pool,
    /// One of the four quadrants
    Quadrant(QuadrantId),
}

impl From<QuadrantId> for Container {
    fn from(quadrant: QuadrantId) -> Self {
        Container::Quadrant(quadrant)
    }
}

/// A missing quadrant hint addresses the pool.
impl From<Option<QuadrantId>> for Container {
    fn from(hint: Option<QuadrantId>) -> Self {
        hint.map_or(Container::Pool, Container::Quadrant)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Pool => f.write_str("pool"),
            Container::Quadrant(q) => write!(f, "{}", q),
        }
    }
}
