//! # Editing Session State
//!
//! Transient sub-state describing which theme is currently open for
//! interactive editing and whether unsaved changes exist. It is not required
//! for document correctness but is persisted inside the wiki document so an
//! in-progress editing session survives a reload.
//!
//! The session has no behavior of its own beyond the small transitions the
//! lifecycle controller drives; when the referenced theme is deleted the
//! controller clears the session so observers never see a stale reference.

use serde::{Deserialize, Serialize};

/// The in-progress editing state surfaced to the settings view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingSession {
    /// Name of the theme currently open for interactive editing, if any.
    #[serde(default)]
    pub editing_theme: Option<String>,
    /// Reserved for a future distinction between preview and commit;
    /// current behavior treats every edit as an immediate preview.
    #[serde(default)]
    pub preview_mode: bool,
    /// True once an edit has been made to the open theme since it was opened.
    #[serde(default)]
    pub unsaved_changes: bool,
}

impl EditingSession {
    /// Open a theme for editing, resetting the unsaved-changes flag.
    pub fn open(&mut self, name: impl Into<String>) {
        self.editing_theme = Some(name.into());
        self.unsaved_changes = false;
    }

    /// Close the session and reset the unsaved-changes flag.
    pub fn close(&mut self) {
        self.editing_theme = None;
        self.unsaved_changes = false;
    }

    /// True when the given theme is the one open for editing.
    pub fn is_editing(&self, name: &str) -> bool {
        self.editing_theme.as_deref() == Some(name)
    }

    /// Record that the open theme has been edited since it was opened.
    pub fn mark_unsaved(&mut self) {
        self.unsaved_changes = true;
    }
}
