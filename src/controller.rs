//! # Theme Lifecycle Controller
//!
//! The state machine over [ThemeCatalog] plus [EditingSession](crate::session::EditingSession).
//! The controller is the catalog's only writer: every operation runs the
//! policy guards and the codec, mutates the catalog, re-projects the live
//! preview when the active theme is affected, and raises the two outbound
//! signals the host document layer consumes.
//!
//! Every operation is synchronous and total except for its declared typed
//! failures, which are deterministic validation outcomes — nothing here
//! retries, and nothing is fatal. The controller never performs UI; the
//! view layer owns surfacing [ThemeError] values to the user.
//!
//! The controller is handed its collaborators explicitly at construction
//! rather than reaching for ambient global state, so hosts and tests wire
//! it up by reference.

use crate::catalog::{Theme, ThemeCatalog, DEFAULT_THEME};
use crate::codec;
use crate::error::{ThemeError, ThemeResult};
use crate::labels::ThemeLabels;
use crate::policy;
use crate::presets;
use crate::preview::{self, StyleRoot};
use crate::variables;

/// Outbound signals consumed by the host document and view layers.
///
/// These are the only two notifications the theming subsystem emits:
/// `document_changed` marks the wiki document dirty (it needs saving) and
/// `catalog_updated` asks the view layer to re-render from the catalog.
/// High-frequency preview updates raise only `catalog_updated`; the coarser
/// dirty signal fires on commit.
pub trait DocumentObserver {
    /// The persisted theming state changed; the document needs saving.
    fn document_changed(&mut self);
    /// The catalog or editing session changed; views should re-render.
    fn catalog_updated(&mut self);
}

/// An observer that ignores all signals, for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl DocumentObserver for NullObserver {
    fn document_changed(&mut self) {}
    fn catalog_updated(&mut self) {}
}

impl<T: DocumentObserver> DocumentObserver for std::rc::Rc<std::cell::RefCell<T>> {
    fn document_changed(&mut self) {
        self.borrow_mut().document_changed();
    }

    fn catalog_updated(&mut self) {
        self.borrow_mut().catalog_updated();
    }
}

/// Starting points for the create-new-theme flow.
///
/// The chosen starting point is resolved to a concrete [Theme] up front via
/// [ThemeController::resolve_seed], never inferred later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateSeed {
    /// Every recognized variable at its built-in default value.
    BuiltinDefaults,
    /// A copy of the currently active theme's variables.
    CopyActive,
    /// The fixed neutral gray palette.
    NeutralPalette,
}

/// Orchestrates create/select/update/delete over the theme catalog.
pub struct ThemeController {
    catalog: ThemeCatalog,
    labels: ThemeLabels,
    style_root: Box<dyn StyleRoot>,
    observer: Box<dyn DocumentObserver>,
}

impl ThemeController {
    /// Take ownership of a catalog loaded from the wiki document.
    ///
    /// Runs the backfill/repair migration (signalling `document_changed` if
    /// it mutated stored state) and projects the active theme once so the
    /// surface reflects the loaded document immediately.
    pub fn load(
        catalog: ThemeCatalog,
        style_root: Box<dyn StyleRoot>,
        observer: Box<dyn DocumentObserver>,
    ) -> Self {
        let mut controller = Self {
            catalog,
            labels: ThemeLabels::builtin(),
            style_root,
            observer,
        };
        if controller.catalog.migrate() {
            controller.observer.document_changed();
        }
        controller.apply_active();
        controller
    }

    /// Replace the display-label table.
    pub fn with_labels(mut self, labels: ThemeLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Read-only view of the catalog, for rendering.
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Hand the catalog back for embedding into the document on save.
    pub fn into_catalog(self) -> ThemeCatalog {
        self.catalog
    }

    /// Resolve a theme name to its display label.
    pub fn display_label<'a>(&'a self, name: &'a str) -> &'a str {
        self.labels.resolve(name)
    }

    /// Create a new theme from raw declaration text.
    ///
    /// Fails with [ThemeError::InvalidName], [ThemeError::DuplicateName],
    /// [ThemeError::CatalogFull] or [ThemeError::InvalidSyntax]. On success
    /// the new theme is opened for editing and the document is dirtied.
    pub fn create(&mut self, name: &str, raw_text: &str) -> ThemeResult<()> {
        if !policy::is_valid_theme_name(name) {
            return Err(ThemeError::invalid_name(name));
        }
        if self.catalog.themes.contains_key(name) {
            return Err(ThemeError::duplicate_name(name));
        }
        if policy::is_catalog_full(&self.catalog) {
            return Err(ThemeError::catalog_full());
        }
        let report = codec::validate(raw_text);
        if !report.valid {
            return Err(ThemeError::invalid_syntax(report.errors));
        }

        self.catalog
            .themes
            .insert(name.to_string(), codec::parse(raw_text));
        self.catalog.theme_editing.open(name);
        log::debug!("created theme '{name}'");
        self.observer.document_changed();
        self.observer.catalog_updated();
        Ok(())
    }

    /// Resolve a create-new starting point to a concrete theme.
    pub fn resolve_seed(&self, seed: CreateSeed) -> Theme {
        match seed {
            CreateSeed::BuiltinDefaults => variables::default_theme(),
            CreateSeed::CopyActive => self
                .catalog
                .active_variables()
                .cloned()
                .unwrap_or_else(variables::default_theme),
            CreateSeed::NeutralPalette => presets::neutral(),
        }
    }

    /// Create a new theme from one of the fixed starting points.
    pub fn create_from_seed(&mut self, name: &str, seed: CreateSeed) -> ThemeResult<()> {
        let text = codec::serialize(&self.resolve_seed(seed));
        self.create(name, &text)
    }

    /// Make a theme (or the `default` sentinel) the active one.
    ///
    /// Fails with [ThemeError::ThemeNotFound]. On success the preview is
    /// re-projected and the document is dirtied.
    pub fn select_active(&mut self, name: &str) -> ThemeResult<()> {
        if name != DEFAULT_THEME && !self.catalog.themes.contains_key(name) {
            return Err(ThemeError::not_found(name));
        }
        self.catalog.active_theme = name.to_string();
        self.apply_active();
        log::debug!("active theme set to '{name}'");
        self.observer.document_changed();
        self.observer.catalog_updated();
        Ok(())
    }

    /// Replace a theme's variables wholesale from raw declaration text.
    ///
    /// Fails with [ThemeError::ThemeNotFound] or [ThemeError::InvalidSyntax].
    /// Re-projects the preview when the edited theme is active.
    pub fn update(&mut self, name: &str, raw_text: &str) -> ThemeResult<()> {
        if !self.catalog.themes.contains_key(name) {
            return Err(ThemeError::not_found(name));
        }
        let report = codec::validate(raw_text);
        if !report.valid {
            return Err(ThemeError::invalid_syntax(report.errors));
        }

        self.catalog
            .themes
            .insert(name.to_string(), codec::parse(raw_text));
        if self.catalog.active_theme == name {
            self.apply_active();
        }
        log::debug!("updated theme '{name}'");
        self.observer.document_changed();
        self.observer.catalog_updated();
        Ok(())
    }

    /// Interactive single-field edit from a picker.
    ///
    /// Fails with [ThemeError::ThemeNotFound]. When the edited theme is
    /// active the change previews immediately — before any explicit save —
    /// and the editing session is marked unsaved. This raises only the
    /// re-render signal; [ThemeController::commit_variable] fires the
    /// coarser dirty signal when the edit completes.
    pub fn set_variable(&mut self, name: &str, variable: &str, value: &str) -> ThemeResult<()> {
        let Some(theme) = self.catalog.themes.get_mut(name) else {
            return Err(ThemeError::not_found(name));
        };
        theme.set(variable, value);
        if self.catalog.active_theme == name {
            self.apply_active();
        }
        self.catalog.theme_editing.mark_unsaved();
        self.observer.catalog_updated();
        Ok(())
    }

    /// Complete an interactive edit, dirtying the document.
    ///
    /// Fired on edit completion rather than on every intermediate change,
    /// decoupling keystroke-frequency preview updates from "the document
    /// needs saving".
    pub fn commit_variable(&mut self) {
        self.observer.document_changed();
    }

    /// Delete a theme from the catalog.
    ///
    /// Fails with [ThemeError::ThemeNotFound] or
    /// [ThemeError::CannotDeleteActive]. A session editing the deleted
    /// theme is closed so no stale reference survives.
    pub fn delete(&mut self, name: &str) -> ThemeResult<()> {
        if !self.catalog.themes.contains_key(name) {
            return Err(ThemeError::not_found(name));
        }
        if !policy::can_delete(name, &self.catalog.active_theme) {
            return Err(ThemeError::cannot_delete_active(name));
        }

        self.catalog.themes.shift_remove(name);
        if self.catalog.theme_editing.is_editing(name) {
            self.catalog.theme_editing.close();
        }
        log::debug!("deleted theme '{name}'");
        self.observer.document_changed();
        self.observer.catalog_updated();
        Ok(())
    }

    /// Open a theme for interactive editing.
    ///
    /// Fails with [ThemeError::ThemeNotFound].
    pub fn begin_edit(&mut self, name: &str) -> ThemeResult<()> {
        if !self.catalog.themes.contains_key(name) {
            return Err(ThemeError::not_found(name));
        }
        self.catalog.theme_editing.open(name);
        self.observer.catalog_updated();
        Ok(())
    }

    /// Close the editing session, resetting the unsaved-changes flag.
    pub fn end_edit(&mut self) {
        self.catalog.theme_editing.close();
        self.observer.catalog_updated();
    }

    /// Project the active theme onto the style root, or clear it for the
    /// default sentinel. Never invents values for missing variables.
    fn apply_active(&mut self) {
        match self.catalog.active_variables() {
            Some(theme) => preview::apply(&mut *self.style_root, theme),
            None => preview::clear(&mut *self.style_root),
        }
    }
}
