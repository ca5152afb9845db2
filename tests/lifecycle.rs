use std::cell::RefCell;
use std::rc::Rc;

use bramble_theme::catalog::{Theme, ThemeCatalog, DEFAULT_THEME};
use bramble_theme::codec;
use bramble_theme::controller::{DocumentObserver, ThemeController};
use bramble_theme::error::ThemeError;
use bramble_theme::policy::MAX_THEMES;
use bramble_theme::preview::MemoryStyleRoot;

/// Counts the outbound signals so tests can assert on their granularity.
#[derive(Debug, Default)]
struct SignalCounter {
    document_changed: usize,
    catalog_updated: usize,
}

impl DocumentObserver for SignalCounter {
    fn document_changed(&mut self) {
        self.document_changed += 1;
    }

    fn catalog_updated(&mut self) {
        self.catalog_updated += 1;
    }
}

struct Harness {
    controller: ThemeController,
    root: Rc<RefCell<MemoryStyleRoot>>,
    signals: Rc<RefCell<SignalCounter>>,
}

fn load(catalog: ThemeCatalog) -> Harness {
    let root = Rc::new(RefCell::new(MemoryStyleRoot::new()));
    let signals = Rc::new(RefCell::new(SignalCounter::default()));
    let controller = ThemeController::load(
        catalog,
        Box::new(root.clone()),
        Box::new(signals.clone()),
    );
    Harness {
        controller,
        root,
        signals,
    }
}

fn dark_light_catalog() -> ThemeCatalog {
    let mut catalog = ThemeCatalog::new();
    catalog.themes_seeded = true;
    catalog.themes.insert(
        "dark".to_string(),
        Theme::from_pairs([("--bg-primary", "#1e1e1e"), ("--text-main", "#dcdcdc")]),
    );
    catalog.themes.insert(
        "light".to_string(),
        Theme::from_pairs([("--bg-primary", "#ffffff")]),
    );
    catalog.active_theme = "dark".to_string();
    catalog
}

#[test]
fn deleting_the_active_theme_is_rejected() {
    let mut h = load(dark_light_catalog());

    assert_eq!(
        h.controller.delete("dark"),
        Err(ThemeError::CannotDeleteActive {
            name: "dark".to_string()
        })
    );

    h.controller.delete("light").unwrap();
    let names: Vec<&str> = h.controller.catalog().themes.keys().map(String::as_str).collect();
    assert_eq!(names, ["dark"]);
}

#[test]
fn create_rejects_a_name_with_invalid_characters() {
    let mut h = load(dark_light_catalog());
    assert!(matches!(
        h.controller.create("My Theme!", "--bg-primary: #fff;"),
        Err(ThemeError::InvalidName { .. })
    ));
}

#[test]
fn create_fails_once_the_catalog_is_full() {
    let mut catalog = ThemeCatalog::new();
    catalog.themes_seeded = true;
    for i in 0..MAX_THEMES {
        catalog
            .themes
            .insert(format!("theme-{i}"), Theme::from_pairs([("--bg-primary", "#000")]));
    }
    let mut h = load(catalog);

    assert_eq!(
        h.controller.create("extra", "--bg-primary: #000;"),
        Err(ThemeError::CatalogFull { limit: MAX_THEMES })
    );
}

#[test]
fn set_variable_on_the_active_theme_previews_immediately() {
    let mut h = load(dark_light_catalog());
    h.controller.begin_edit("dark").unwrap();

    h.controller
        .set_variable("dark", "--accent-color", "#123456")
        .unwrap();

    assert!(h.root.borrow().css().contains("--accent-color: #123456;"));
    assert!(h.controller.catalog().theme_editing.unsaved_changes);
}

#[test]
fn preview_updates_do_not_dirty_the_document_until_commit() {
    let mut h = load(dark_light_catalog());
    h.controller.begin_edit("dark").unwrap();
    let dirty_before = h.signals.borrow().document_changed;

    h.controller.set_variable("dark", "--accent-color", "#111111").unwrap();
    h.controller.set_variable("dark", "--accent-color", "#222222").unwrap();
    assert_eq!(h.signals.borrow().document_changed, dirty_before);
    assert!(h.signals.borrow().catalog_updated >= 2);

    h.controller.commit_variable();
    assert_eq!(h.signals.borrow().document_changed, dirty_before + 1);
}

#[test]
fn missing_colon_reports_exactly_one_error_for_line_one() {
    let report = codec::validate("--bg-primary #fff;");
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Line 1"));
    assert!(report.errors[0].contains("colon"));
}

#[test]
fn selecting_default_clears_the_projected_block() {
    let mut h = load(dark_light_catalog());
    assert!(h.root.borrow().css().contains("--bg-primary: #1e1e1e;"));

    h.controller.select_active(DEFAULT_THEME).unwrap();
    assert_eq!(h.root.borrow().css(), "");
}

#[test]
fn a_fresh_document_is_seeded_and_survives_a_save_reload_cycle() {
    let h = load(ThemeCatalog::new());
    assert!(h.signals.borrow().document_changed >= 1);
    let seeded: Vec<String> = h.controller.catalog().themes.keys().cloned().collect();
    assert!(seeded.contains(&"dark".to_string()));

    // Save: embed the catalog back into the document as JSON.
    let catalog = h.controller.into_catalog();
    let json = serde_json::to_string(&catalog).unwrap();

    // Reload: the same themes come back and nothing re-seeds.
    let restored: ThemeCatalog = serde_json::from_str(&json).unwrap();
    let h2 = load(restored);
    let names: Vec<String> = h2.controller.catalog().themes.keys().cloned().collect();
    assert_eq!(names, seeded);
    assert_eq!(h2.signals.borrow().document_changed, 0);
}

#[test]
fn an_emptied_catalog_stays_empty_across_reloads() {
    let mut h = load(ThemeCatalog::new());
    let names: Vec<String> = h.controller.catalog().themes.keys().cloned().collect();
    for name in names {
        h.controller.delete(&name).unwrap();
    }
    assert!(h.controller.catalog().themes.is_empty());

    let json = serde_json::to_string(&h.controller.into_catalog()).unwrap();
    let restored: ThemeCatalog = serde_json::from_str(&json).unwrap();
    let h2 = load(restored);
    assert!(h2.controller.catalog().themes.is_empty());
}

#[test]
fn documents_from_before_theming_existed_migrate_cleanly() {
    // A document slice with none of the theming fields present.
    let catalog: ThemeCatalog = serde_json::from_str("{}").unwrap();
    let h = load(catalog);

    assert!(h.controller.catalog().active_is_default());
    assert!(!h.controller.catalog().themes.is_empty());
    assert_eq!(h.controller.catalog().theme_editing.editing_theme, None);
    // Backfilling counts as a document change.
    assert_eq!(h.signals.borrow().document_changed, 1);
}

#[test]
fn raw_text_edit_round_trip() {
    let mut h = load(dark_light_catalog());

    // The settings view serializes the theme into the editor textarea...
    let text = codec::serialize(h.controller.catalog().get("dark").unwrap());
    assert!(text.contains("--bg-primary: #1e1e1e;"));

    // ...the user tweaks it, and the edited text replaces the theme.
    let edited = text.replace("#1e1e1e", "#101010");
    h.controller.update("dark", &edited).unwrap();
    assert_eq!(
        h.controller.catalog().get("dark").unwrap().get("--bg-primary"),
        Some("#101010")
    );
    assert!(h.root.borrow().css().contains("--bg-primary: #101010;"));
}

#[test]
fn display_labels_fall_back_to_raw_names() {
    let mut h = load(ThemeCatalog::new());
    assert_eq!(h.controller.display_label("dark"), "Dark");

    h.controller.create("my-theme", "--bg-primary: #fff;").unwrap();
    assert_eq!(h.controller.display_label("my-theme"), "my-theme");
}
