//! # Theme Catalog Data Model
//!
//! The catalog is the theming subsystem's slice of the wiki document: the
//! mapping of theme name to [Theme], the active-theme pointer and the
//! in-progress [EditingSession]. It is created once at document load,
//! mutated only by the lifecycle controller, and lives for the lifetime of
//! the document.
//!
//! Serialized field names are camelCase so the embedded JSON matches the
//! wiki document format (`themes`, `activeTheme`, `themeEditing`,
//! `themesSeeded`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::presets;
use crate::session::EditingSession;

/// Reserved active-theme sentinel meaning "no custom theme applied";
/// the presentation layer's built-in defaults govern.
pub const DEFAULT_THEME: &str = "default";

/// A named set of presentation variables.
///
/// Keys follow the `--name` variable grammar enforced by the codec; values
/// are opaque strings (commonly colors or lengths). Entries keep insertion
/// order so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    variables: IndexMap<String, String>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a theme from name/value pairs, keeping their order.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            variables: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Set a variable, inserting or replacing its value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Remove a variable, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.variables.shift_remove(name)
    }

    /// True when the theme defines the given variable.
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables in the theme.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// True when the theme defines no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// The persisted theming state embedded in the wiki document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCatalog {
    /// All user-defined themes, keyed by theme name.
    #[serde(default)]
    pub themes: IndexMap<String, Theme>,
    /// The active theme name, or the [DEFAULT_THEME] sentinel.
    #[serde(default = "default_active_theme")]
    pub active_theme: String,
    /// The in-progress editing session, persisted for reload continuity.
    #[serde(default)]
    pub theme_editing: EditingSession,
    /// True once the built-in preset themes have been seeded into this
    /// document. Kept explicitly so that a catalog the user has deliberately
    /// emptied is never re-seeded on the next load.
    #[serde(default)]
    pub themes_seeded: bool,
}

fn default_active_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self {
            themes: IndexMap::new(),
            active_theme: default_active_theme(),
            theme_editing: EditingSession::default(),
            themes_seeded: false,
        }
    }
}

impl ThemeCatalog {
    /// Create an empty, unseeded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// True when no custom theme is active.
    pub fn active_is_default(&self) -> bool {
        self.active_theme == DEFAULT_THEME
    }

    /// The active theme's variables, or `None` for the default sentinel.
    pub fn active_variables(&self) -> Option<&Theme> {
        if self.active_is_default() {
            None
        } else {
            self.themes.get(&self.active_theme)
        }
    }

    /// Backfill and repair a catalog loaded from an existing document.
    ///
    /// Documents created before theming existed deserialize with empty
    /// defaults; this seeds them with the built-in preset themes exactly
    /// once, recorded in the `themes_seeded` flag. Documents written before
    /// the flag existed but already holding themes are marked seeded without
    /// re-seeding. Dangling references (an active or editing theme that no
    /// longer exists) are repaired to the default/closed state.
    ///
    /// Returns true when stored state was mutated, so the caller can mark
    /// the document dirty.
    pub fn migrate(&mut self) -> bool {
        let mut changed = false;

        if !self.themes_seeded {
            if self.themes.is_empty() {
                self.themes = presets::seed_themes();
                log::debug!(
                    "seeded catalog with {} built-in themes (seed v{})",
                    self.themes.len(),
                    presets::SEED_VERSION
                );
            }
            self.themes_seeded = true;
            changed = true;
        }

        if !self.active_is_default() && !self.themes.contains_key(&self.active_theme) {
            log::warn!(
                "active theme '{}' missing from catalog, reverting to default",
                self.active_theme
            );
            self.active_theme = default_active_theme();
            changed = true;
        }

        if let Some(editing) = self.theme_editing.editing_theme.clone() {
            if !self.themes.contains_key(&editing) {
                log::warn!("editing theme '{editing}' missing from catalog, closing session");
                self.theme_editing.close();
                changed = true;
            }
        }

        changed
    }
}
