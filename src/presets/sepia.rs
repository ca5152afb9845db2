use crate::catalog::Theme;

/// A warm parchment theme for long reading sessions.
pub fn theme() -> Theme {
    Theme::from_pairs([
        ("--bg-primary", "#f4ecd8"),
        ("--bg-secondary", "#eaddc0"),
        ("--bg-tertiary", "#e0d0ac"),
        ("--text-main", "#5b4636"),
        ("--accent-color", "#8a5a2b"),
        ("--accent-hover", "#6f4822"),
        ("--sidebar-bg", "#eaddc0"),
        ("--sidebar-text", "#5b4636"),
        ("--button-active-bg", "#8a5a2b"),
        ("--text-active", "#f4ecd8"),
        ("--code-bg", "#ece0c8"),
        ("--border-color", "#c8b890"),
        ("--shadow-color", "rgba(91, 70, 54, 0.25)"),
        ("--delete-bg", "#e8c4b0"),
    ])
}
