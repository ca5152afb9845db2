use crate::catalog::Theme;

/// A clean light theme matching the surface's built-in fallback values.
pub fn theme() -> Theme {
    Theme::from_pairs([
        ("--bg-primary", "#ffffff"),
        ("--bg-secondary", "#f5f5f5"),
        ("--bg-tertiary", "#e8e8e8"),
        ("--text-main", "#000000"),
        ("--accent-color", "#007acc"),
        ("--accent-hover", "#005f9e"),
        ("--sidebar-bg", "#f0f0f0"),
        ("--sidebar-text", "#1a1a1a"),
        ("--button-active-bg", "#007acc"),
        ("--text-active", "#ffffff"),
        ("--code-bg", "#f4f4f4"),
        ("--border-color", "#cccccc"),
        ("--shadow-color", "rgba(0, 0, 0, 0.2)"),
        ("--delete-bg", "#ffdddd"),
    ])
}
