#![warn(missing_docs)]

//! # Bramble Theming System
//!
//! The theming subsystem of the Bramble single-file wiki. It lets a user
//! define named sets of presentation variables, select one as active, edit
//! them with live preview, and persist the result inside the wiki's
//! serialized document.
//!
//! ## Overview
//!
//! The subsystem consists of several key components:
//!
//! - **[codec]**: parses, validates and serializes the flat `--name: value;`
//!   declaration text format
//! - **[catalog::ThemeCatalog]**: the persisted data model — themes, the
//!   active-theme pointer and the editing session — with document migration
//! - **[policy]**: pure guards for naming rules, the catalog size ceiling
//!   and the active-theme deletion guard
//! - **[controller::ThemeController]**: the lifecycle state machine
//!   orchestrating create/select/update/delete with typed failures
//! - **[preview]**: the live preview applier projecting the active theme
//!   onto the rendering surface
//! - **[presets]**: the built-in themes seeded into new documents
//!
//! ## Quick Start
//!
//! ```rust
//! use bramble_theme::catalog::ThemeCatalog;
//! use bramble_theme::controller::{NullObserver, ThemeController};
//! use bramble_theme::preview::MemoryStyleRoot;
//!
//! // Load the catalog embedded in the wiki document (a fresh one here);
//! // loading migrates older documents and seeds the built-in presets.
//! let mut controller = ThemeController::load(
//!     ThemeCatalog::new(),
//!     Box::new(MemoryStyleRoot::new()),
//!     Box::new(NullObserver),
//! );
//!
//! // Activate a seeded preset and create a custom theme from raw text.
//! controller.select_active("dark").unwrap();
//! controller.create("mine", "--bg-primary: #102030;").unwrap();
//! ```
//!
//! ## Architecture
//!
//! The lifecycle controller owns the catalog and is its only writer; the
//! codec, guards and applier are pure functions over snapshots passed to
//! them. Everything is synchronous and single-threaded: each operation runs
//! to completion before the next user action, failures are typed validation
//! outcomes rather than faults, and the only side channels are the two
//! outbound signals (`document_changed`, `catalog_updated`) plus the style
//! injection point the preview writes to.

/// Contains the [catalog::ThemeCatalog] data model and document migration.
pub mod catalog;
/// Contains the parser/validator/serializer for declaration text.
pub mod codec;
/// Contains the [controller::ThemeController] lifecycle state machine.
pub mod controller;
/// Contains the [error::ThemeError] failure taxonomy.
pub mod error;
/// Contains display-label resolution for theme names.
pub mod labels;
/// Contains the policy guards for naming, capacity and deletion rules.
pub mod policy;
/// Contains the built-in preset themes used to seed new documents.
pub mod presets;
/// Contains the live preview applier and the [preview::StyleRoot] surface.
pub mod preview;
/// Contains the [session::EditingSession] sub-state.
pub mod session;
/// Contains the recognized presentation-variable registry.
pub mod variables;
