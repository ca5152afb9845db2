//! # Theme Error Types
//!
//! This module provides the failure taxonomy for theme operations. Every
//! variant is a deterministic validation outcome caused by a caller-supplied
//! value, never a transient or fatal fault; the lifecycle controller returns
//! these to the view layer, which is responsible for surfacing them.

use thiserror::Error;

use crate::policy::MAX_THEMES;

/// Errors that can occur in the theming subsystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The theme name does not match the required identifier grammar.
    #[error("Invalid theme name '{name}': names must start with a letter or underscore, contain only letters, digits, '-' or '_', and may not be 'default'")]
    InvalidName {
        /// The rejected theme name.
        name: String,
    },

    /// A theme with the same name already exists in the catalog.
    #[error("A theme named '{name}' already exists")]
    DuplicateName {
        /// The duplicated theme name.
        name: String,
    },

    /// The catalog already holds the maximum number of themes.
    #[error("Theme limit of {limit} reached; delete a theme before creating a new one")]
    CatalogFull {
        /// The catalog size ceiling.
        limit: usize,
    },

    /// The supplied declaration text failed strict validation.
    #[error("Theme text contains {} syntax error(s)", errors.len())]
    InvalidSyntax {
        /// One message per violation, in input order.
        errors: Vec<String>,
    },

    /// Theme with the specified name was not found in the catalog.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// The theme is currently active and therefore protected from deletion.
    #[error("Theme '{name}' is the active theme and cannot be deleted; switch the active theme first")]
    CannotDeleteActive {
        /// The name of the protected theme.
        name: String,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid theme name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a duplicate theme name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a catalog full error carrying the configured ceiling.
    pub fn catalog_full() -> Self {
        Self::CatalogFull { limit: MAX_THEMES }
    }

    /// Create an invalid syntax error from a validation error list.
    pub fn invalid_syntax(errors: Vec<String>) -> Self {
        Self::InvalidSyntax { errors }
    }

    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a cannot-delete-active error.
    pub fn cannot_delete_active(name: impl Into<String>) -> Self {
        Self::CannotDeleteActive { name: name.into() }
    }
}
