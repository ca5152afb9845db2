//! # Built-in Preset Themes
//!
//! The fixed, versioned set of themes seeded into a document the first time
//! its catalog loads empty. Each preset is a complete [Theme] covering every
//! recognized variable, so switching to one restyles the whole surface.
//!
//! [SEED_VERSION] identifies the seed set; bump it when the set of preset
//! themes or their contents change in a way migrations need to reason about.

use indexmap::IndexMap;

use crate::catalog::Theme;

/// The Dark preset.
pub mod dark;
/// The Light preset.
pub mod light;
/// The Sepia preset.
pub mod sepia;

/// Version of the built-in seed set.
pub const SEED_VERSION: u32 = 1;

/// The preset themes seeded into an empty catalog, in display order.
pub fn seed_themes() -> IndexMap<String, Theme> {
    IndexMap::from([
        ("light".to_string(), light::theme()),
        ("dark".to_string(), dark::theme()),
        ("sepia".to_string(), sepia::theme()),
    ])
}

/// A fixed neutral gray palette, one of the starting points offered by the
/// create-new-theme flow. Not part of the seed set.
pub fn neutral() -> Theme {
    Theme::from_pairs([
        ("--bg-primary", "#fafafa"),
        ("--bg-secondary", "#f0f0f0"),
        ("--bg-tertiary", "#e4e4e4"),
        ("--text-main", "#222222"),
        ("--accent-color", "#666666"),
        ("--accent-hover", "#4d4d4d"),
        ("--sidebar-bg", "#f0f0f0"),
        ("--sidebar-text", "#222222"),
        ("--button-active-bg", "#666666"),
        ("--text-active", "#ffffff"),
        ("--code-bg", "#ededed"),
        ("--border-color", "#d0d0d0"),
        ("--shadow-color", "rgba(0, 0, 0, 0.15)"),
        ("--delete-bg", "#e6e6e6"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{is_valid_theme_name, MAX_THEMES};
    use crate::variables::RECOGNIZED_VARIABLES;

    #[test]
    fn seed_set_fits_catalog_constraints() {
        let seeds = seed_themes();
        assert!(seeds.len() <= MAX_THEMES);
        for name in seeds.keys() {
            assert!(is_valid_theme_name(name), "{name}");
        }
    }

    #[test]
    fn every_preset_covers_every_recognized_variable() {
        for (name, theme) in seed_themes() {
            assert_eq!(
                theme.len(),
                RECOGNIZED_VARIABLES.len(),
                "preset '{name}' is incomplete"
            );
            for spec in RECOGNIZED_VARIABLES {
                assert!(
                    theme.contains(spec.name),
                    "preset '{name}' is missing {}",
                    spec.name
                );
            }
        }
    }

    #[test]
    fn neutral_palette_covers_every_recognized_variable() {
        let theme = neutral();
        for spec in RECOGNIZED_VARIABLES {
            assert!(theme.contains(spec.name), "missing {}", spec.name);
        }
    }
}
