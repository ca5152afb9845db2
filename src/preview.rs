//! # Live Preview Applier
//!
//! Projects the active theme's variables onto the rendering surface so
//! visual changes are observable before the document is saved. The surface
//! is a single well-known style injection point — conceptually one block
//! scoped to the whole document — replaced wholesale on every call, never
//! diffed incrementally.
//!
//! The applier only projects what a theme defines. When a recognized
//! variable is absent it is simply not written, and the presentation
//! layer's own fallback value governs; the applier never invents a value
//! for a missing key. Applying the same theme twice yields the same
//! rendered result, and nothing here ever mutates the catalog.

use crate::catalog::Theme;

/// The single style injection point the preview writes to.
///
/// Hosts implement this over whatever carries styles for them — a DOM
/// `<style>` element, a file, or [MemoryStyleRoot] for headless use and
/// tests.
pub trait StyleRoot {
    /// Replace the injected block wholesale with `css`. An empty string
    /// clears the block entirely.
    fn replace_variables(&mut self, css: &str);
}

/// Render a theme's variables as a document-scoped declaration block.
///
/// Returns the empty string for an empty theme, so clearing and "no custom
/// theme" are indistinguishable at the surface, as intended.
pub fn render_block(theme: &Theme) -> String {
    if theme.is_empty() {
        return String::new();
    }
    let mut block = String::from(":root {\n");
    for (name, value) in theme.iter() {
        block.push_str("    ");
        block.push_str(name);
        block.push_str(": ");
        block.push_str(value);
        block.push_str(";\n");
    }
    block.push_str("}\n");
    block
}

/// Project a theme onto the style root.
pub fn apply(root: &mut dyn StyleRoot, theme: &Theme) {
    root.replace_variables(&render_block(theme));
}

/// Clear the style root so built-in defaults govern presentation.
pub fn clear(root: &mut dyn StyleRoot) {
    root.replace_variables("");
}

/// An in-memory style root for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyleRoot {
    css: String,
}

impl MemoryStyleRoot {
    /// Create an empty in-memory style root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently injected block.
    pub fn css(&self) -> &str {
        &self.css
    }
}

impl StyleRoot for MemoryStyleRoot {
    fn replace_variables(&mut self, css: &str) {
        self.css.clear();
        self.css.push_str(css);
    }
}

impl<T: StyleRoot> StyleRoot for std::rc::Rc<std::cell::RefCell<T>> {
    fn replace_variables(&mut self, css: &str) {
        self.borrow_mut().replace_variables(css);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_only_defined_variables() {
        let theme = Theme::from_pairs([("--bg-primary", "#fff"), ("--accent-color", "#007acc")]);
        let block = render_block(&theme);
        assert_eq!(
            block,
            ":root {\n    --bg-primary: #fff;\n    --accent-color: #007acc;\n}\n"
        );
        assert!(!block.contains("--text-main"));
    }

    #[test]
    fn empty_theme_renders_nothing() {
        assert_eq!(render_block(&Theme::new()), "");
    }

    #[test]
    fn apply_replaces_wholesale() {
        let mut root = MemoryStyleRoot::new();
        apply(&mut root, &Theme::from_pairs([("--a", "1"), ("--b", "2")]));
        apply(&mut root, &Theme::from_pairs([("--c", "3")]));
        assert!(!root.css().contains("--a"));
        assert!(root.css().contains("--c: 3;"));
    }

    #[test]
    fn apply_is_idempotent() {
        let theme = Theme::from_pairs([("--bg-primary", "#123456")]);
        let mut root = MemoryStyleRoot::new();
        apply(&mut root, &theme);
        let first = root.css().to_string();
        apply(&mut root, &theme);
        assert_eq!(root.css(), first);
    }

    #[test]
    fn clear_empties_the_block() {
        let mut root = MemoryStyleRoot::new();
        apply(&mut root, &Theme::from_pairs([("--a", "1")]));
        clear(&mut root);
        assert_eq!(root.css(), "");
    }
}
