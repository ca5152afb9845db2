//! # Recognized Variable Registry
//!
//! The fixed catalog of presentation variables the wiki's rendering surface
//! understands, each with the default fallback value the presentation layer
//! uses when the active theme leaves it unset. The live preview applier
//! never consults these defaults — it only projects what a theme actually
//! defines — but the settings view renders one picker per entry and the
//! built-in presets cover every entry.

use crate::catalog::Theme;

/// A recognized presentation variable and its documented fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpec {
    /// The variable name, including the `--` prefix.
    pub name: &'static str,
    /// Fallback value the presentation layer uses when the variable is
    /// unset by the active theme.
    pub default_value: &'static str,
    /// Human-readable role shown next to the interactive picker.
    pub role: &'static str,
}

/// All variables recognized by the rendering surface.
pub const RECOGNIZED_VARIABLES: &[VariableSpec] = &[
    VariableSpec {
        name: "--bg-primary",
        default_value: "#ffffff",
        role: "Primary background",
    },
    VariableSpec {
        name: "--bg-secondary",
        default_value: "#f5f5f5",
        role: "Secondary background",
    },
    VariableSpec {
        name: "--bg-tertiary",
        default_value: "#e8e8e8",
        role: "Tertiary background",
    },
    VariableSpec {
        name: "--text-main",
        default_value: "#000000",
        role: "Main text",
    },
    VariableSpec {
        name: "--accent-color",
        default_value: "#007acc",
        role: "Accent",
    },
    VariableSpec {
        name: "--accent-hover",
        default_value: "#005f9e",
        role: "Accent on hover",
    },
    VariableSpec {
        name: "--sidebar-bg",
        default_value: "#f0f0f0",
        role: "Sidebar background",
    },
    VariableSpec {
        name: "--sidebar-text",
        default_value: "#1a1a1a",
        role: "Sidebar text",
    },
    VariableSpec {
        name: "--button-active-bg",
        default_value: "#007acc",
        role: "Active button background",
    },
    VariableSpec {
        name: "--text-active",
        default_value: "#ffffff",
        role: "Active text",
    },
    VariableSpec {
        name: "--code-bg",
        default_value: "#f4f4f4",
        role: "Code block background",
    },
    VariableSpec {
        name: "--border-color",
        default_value: "#cccccc",
        role: "Borders",
    },
    VariableSpec {
        name: "--shadow-color",
        default_value: "rgba(0, 0, 0, 0.2)",
        role: "Shadows",
    },
    VariableSpec {
        name: "--delete-bg",
        default_value: "#ffdddd",
        role: "Delete and change-highlight background",
    },
];

/// Look up the spec for a recognized variable name.
pub fn spec_for(name: &str) -> Option<&'static VariableSpec> {
    RECOGNIZED_VARIABLES.iter().find(|spec| spec.name == name)
}

/// True when the rendering surface recognizes the variable.
pub fn is_recognized(name: &str) -> bool {
    spec_for(name).is_some()
}

/// A theme assigning every recognized variable its default fallback value.
///
/// This is the "built-in defaults" starting point for the create-new-theme
/// flow.
pub fn default_theme() -> Theme {
    Theme::from_pairs(
        RECOGNIZED_VARIABLES
            .iter()
            .map(|spec| (spec.name, spec.default_value)),
    )
}
