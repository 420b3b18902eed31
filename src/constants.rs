//! Application-wide constants.
//!
//! Centralizes layout values and default strings shared by the on-screen
//! board and the raster export, so both produce the same composition.

// ============================================================================
// Board Layout
// ============================================================================

/// Side length of the square empathy map region in logical pixels
pub const BOARD_SIZE: f32 = 800.0;

/// Padding inside each quadrant
pub const QUADRANT_PADDING: f32 = 20.0;

/// Space between the quadrant title and its first note
pub const QUADRANT_TITLE_GAP: f32 = 10.0;

/// Width of the outer frame around the board
pub const BOARD_BORDER_WIDTH: f32 = 2.0;

/// Width of the grid lines between quadrants
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Diameter of the subject label circle at the board center
pub const CENTER_CIRCLE_SIZE: f32 = 120.0;

/// Width of the inline label input while editing
pub const LABEL_INPUT_WIDTH: f32 = 90.0;

/// Outer padding of the whole window content
pub const APP_PADDING: f32 = 40.0;

/// Width of the note text input in the toolbar
pub const NOTE_INPUT_WIDTH: f32 = 200.0;

// ============================================================================
// Note Cards
// ============================================================================

/// Inner padding of a note card
pub const NOTE_PADDING: f32 = 12.0;

/// Vertical gap between stacked notes in a quadrant
pub const NOTE_GAP: f32 = 8.0;

/// Horizontal gap between note text and its delete control
pub const NOTE_CONTROL_GAP: f32 = 8.0;

/// Horizontal padding around the delete glyph
pub const DELETE_CONTROL_PADDING: f32 = 2.0;

/// Glyph of the per-note delete control, also drawn into exports
pub const DELETE_GLYPH: &str = "✕";

/// Corner radius of note cards
pub const NOTE_RADIUS: f32 = 4.0;

/// Font size used for note and label text
pub const NOTE_FONT_SIZE: f32 = 16.0;

/// Line height used for note and label text
pub const NOTE_LINE_HEIGHT: f32 = 22.0;

/// Opacity of the card that follows the cursor while dragging
pub const DRAG_PREVIEW_OPACITY: f32 = 0.5;

// ============================================================================
// Colors
// ============================================================================

/// Board background
pub const BOARD_BACKGROUND: u32 = 0xf9fafb;

/// Note pool background
pub const POOL_BACKGROUND: u32 = 0xf3f4f6;

/// Frame, grid and circle outline color
pub const BOARD_LINE_COLOR: u32 = 0xcccccc;

/// Text color for titles, notes and label
pub const BOARD_TEXT_COLOR: u32 = 0x111827;

/// Delete control color
pub const DELETE_COLOR: u32 = 0xef4444;

/// Quadrant tint while a note is dragged over it (rgba(52, 211, 153, 0.1))
pub const DROP_HIGHLIGHT_COLOR: u32 = 0x34d3991a;

/// Default fill of exported images, same as `BOARD_BACKGROUND`
pub const DEFAULT_EXPORT_BACKGROUND: &str = "#f9fafb";

// ============================================================================
// Strings
// ============================================================================

/// Label shown at the board center before the user names the subject
pub const DEFAULT_SUBJECT_LABEL: &str = "ENTER NAME";

/// Placeholder of the note input
pub const NOTE_INPUT_PLACEHOLDER: &str = "Add note for empathy map";

/// Toast shown while a capture is running
pub const CAPTURE_PROGRESS_MESSAGE: &str = "Capturing screenshot...";

/// Toast shown when the capture reached the clipboard
pub const CAPTURE_SUCCESS_MESSAGE: &str = "Screenshot copied to clipboard!";

/// Toast shown for any capture failure
pub const CAPTURE_FAILURE_MESSAGE: &str = "Failed to capture screenshot";

/// Toast shown when a capture is requested while one is running
pub const CAPTURE_BUSY_MESSAGE: &str = "Capture already in progress";
