//! Subject label - the editable name at the center of the board.
//!
//! ```text
//! Display -> Editing   (begin_edit, ignored while already editing)
//! Editing -> Display   (commit: blur or Enter)
//! ```

use crate::constants::DEFAULT_SUBJECT_LABEL;

/// Whether the label is shown as text or as an inline input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelMode {
    #[default]
    Display,
    Editing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectLabel {
    text: String,
    mode: LabelMode,
}

impl Default for SubjectLabel {
    fn default() -> Self {
        Self {
            text: DEFAULT_SUBJECT_LABEL.to_string(),
            mode: LabelMode::Display,
        }
    }
}

impl SubjectLabel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> LabelMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == LabelMode::Editing
    }

    /// Enter edit mode. Returns false (and keeps the current text) if already editing.
    pub fn begin_edit(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.mode = LabelMode::Editing;
        true
    }

    /// Replace the label text. Only accepted while editing.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.text = text.into();
        true
    }

    /// Leave edit mode, keeping whatever text was typed.
    pub fn commit(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.mode = LabelMode::Display;
        true
    }
}
