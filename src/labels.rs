//! # Theme Display Labels
//!
//! An explicit optional mapping from theme name to a human-readable display
//! label, with a defined fallback to the raw identifier. The settings view
//! resolves every label through this table once; labels are never derived
//! from theme names dynamically.

use std::collections::HashMap;

/// Display labels for theme names.
#[derive(Debug, Clone, Default)]
pub struct ThemeLabels {
    labels: HashMap<String, String>,
}

impl ThemeLabels {
    /// Create an empty label table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label table covering the built-in preset themes.
    pub fn builtin() -> Self {
        let mut labels = Self::new();
        labels.set("light", "Light");
        labels.set("dark", "Dark");
        labels.set("sepia", "Sepia");
        labels
    }

    /// Set the display label for a theme name.
    pub fn set(&mut self, name: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(name.into(), label.into());
    }

    /// Resolve a theme name to its display label.
    ///
    /// Falls back to the raw theme name when no label is registered.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.labels.get(name).map(String::as_str).unwrap_or(name)
    }
}
