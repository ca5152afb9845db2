//! # Policy Guards
//!
//! Pure predicates enforcing the catalog's naming rules, size ceiling and
//! deletion guard. The lifecycle controller consults these before mutating
//! anything; they never mutate state themselves.

use crate::catalog::{ThemeCatalog, DEFAULT_THEME};

/// Maximum number of custom themes a catalog may hold.
pub const MAX_THEMES: usize = 10;

/// Returns true when `name` is a usable theme name.
///
/// Theme names follow a restricted identifier grammar — a letter or
/// underscore followed by letters, digits, hyphens or underscores — and the
/// reserved literal `default` is never a valid custom theme name.
pub fn is_valid_theme_name(name: &str) -> bool {
    if name == DEFAULT_THEME {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Returns true when the catalog has reached its size ceiling.
pub fn is_catalog_full(catalog: &ThemeCatalog) -> bool {
    catalog.themes.len() >= MAX_THEMES
}

/// Returns true when the theme may be deleted.
///
/// The currently active theme can never be deleted regardless of other
/// state; the caller must instruct the user to switch the active theme
/// first.
pub fn can_delete(name: &str, active_theme: &str) -> bool {
    name != active_theme
}
