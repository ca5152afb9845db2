use crate::catalog::Theme;

/// A high-contrast dark theme for low-light reading.
pub fn theme() -> Theme {
    Theme::from_pairs([
        ("--bg-primary", "#1e1e1e"),
        ("--bg-secondary", "#282828"),
        ("--bg-tertiary", "#323232"),
        ("--text-main", "#dcdcdc"),
        ("--accent-color", "#6496ff"),
        ("--accent-hover", "#78aaff"),
        ("--sidebar-bg", "#282828"),
        ("--sidebar-text", "#dcdcdc"),
        ("--button-active-bg", "#5082eb"),
        ("--text-active", "#ffffff"),
        ("--code-bg", "#232323"),
        ("--border-color", "#505050"),
        ("--shadow-color", "rgba(0, 0, 0, 0.6)"),
        ("--delete-bg", "#5a2a2a"),
    ])
}
