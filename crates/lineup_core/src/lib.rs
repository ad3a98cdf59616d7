//! # lineup_core - Formation Board Editing Core
//!
//! State and rules behind a drag-and-drop lineup board: players placed on a
//! pitch in percentage coordinates, tactical presets, replacement of one
//! player by another in the same spot, and JSON export/import of layouts.
//!
//! ## Features
//! - Single-owner `FormationStore` with change subscriptions
//! - Resolution-independent coordinates (percent <-> pixel, drag clamping)
//! - Built-in presets: 4-2-3-1, 4-4-2, 4-3-3, 3-5-2
//! - Known-player roster and photo catalog lookups
//! - JSON command API for embedding in a UI shell
//!
//! ```
//! use lineup_core::{FormationStore, PlayerDraft};
//!
//! let mut store = FormationStore::new();
//! store.apply_preset_named("4-3-3");
//! let keeper = store.players()[0].id.clone();
//! store.replace_player(&keeper, PlayerDraft::new("Manuel Neuer", "TW", 1));
//! assert_eq!(store.players()[0].name, "Manuel Neuer");
//! assert_eq!(store.players()[0].coords(), (50.0, 90.0));
//! ```

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod pitch;
pub mod save;
pub mod state;
pub mod tactics;

// Re-export main API functions
pub use api::{execute_command, execute_command_json, EditorCommand, EditorResponse};
pub use error::{StoreError, StoreResult};

// Re-export data model
pub use models::{
    Formation, FormationId, FormationPreset, LayoutSource, Player, PlayerDraft, PlayerId,
    PlayerUpdate, PresetSlot,
};

// Re-export configuration
pub use config::{ConfigError, EditorConfig};

// Re-export coordinate model
pub use pitch::{FieldDimensions, PercentPos, PixelPos};

// Re-export save system
pub use save::{ExportEnvelope, ImportedLayout, LayoutFiles, SaveError};

// Re-export state management
pub use state::{FormationStore, StoreEvent, SubscriptionId};

// Re-export tactics system
pub use tactics::{default_presets, find_preset, PositionTag};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_preset_then_replace_scenario() {
        let mut store = FormationStore::new();
        let preset = find_preset(default_presets(), "4-3-3").unwrap().clone();
        store.set_formation_preset(&preset);
        assert_eq!(store.len(), 11);

        let old = store.players()[0].clone();
        assert_eq!(old.coords(), (50.0, 90.0));
        assert_eq!(old.position, "TW");
        assert_eq!(old.number, 1);

        let replaced = store
            .try_replace_player(&old.id, PlayerDraft::new("Manuel Neuer", "TW", 1).with_photo("Max.png"))
            .unwrap();

        assert_eq!(store.players()[0].coords(), (50.0, 90.0));
        assert_eq!(store.players()[0].name, "Manuel Neuer");
        assert_ne!(replaced.id, old.id);
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn test_no_op_on_missing_id_keeps_bytes() {
        let mut store = FormationStore::new();
        store.apply_preset_named("4-4-2");
        let before = serde_json::to_string(store.players()).unwrap();

        let ghost = PlayerId::new("not-on-board");
        store.update_player(&ghost, &PlayerUpdate::name("X"));
        store.remove_player(&ghost);
        store.move_player(&ghost, 1.0, 1.0);
        store.replace_player(&ghost, PlayerDraft::new("Y", "ST", 9));

        assert_eq!(serde_json::to_string(store.players()).unwrap(), before);
    }

    #[test]
    fn test_export_import_through_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");

        let mut store = FormationStore::new();
        store.apply_preset_named("3-5-2");
        LayoutFiles::export_to_path(&path, &store.export_envelope("Auswärts")).unwrap();

        let mut restored = FormationStore::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        restored.subscribe(move |e, _| sink.borrow_mut().push(e.clone()));

        restored.import_layout(LayoutFiles::import_from_path(&path).unwrap());
        assert_eq!(restored.players(), store.players());
        assert_eq!(*events.borrow(), vec![StoreEvent::LayoutLoaded { count: 11 }]);
    }

    #[test]
    fn test_rejected_import_leaves_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut store = FormationStore::new();
        store.apply_preset_named("4-2-3-1");
        let before = store.players().to_vec();

        // through the command API
        let request = serde_json::json!({"command": "import", "text": r#"{"name":"broken"}"#});
        let response: EditorResponse =
            serde_json::from_str(&execute_command_json(&mut store, &request.to_string())).unwrap();
        assert!(!response.success);
        assert_eq!(response.players, before);
        assert_eq!(store.players(), before.as_slice());

        // through a file on disk
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, r#"{"players": {"id": "a"}}"#).unwrap();
        let err = LayoutFiles::import_from_path(&path).unwrap_err();
        assert!(err.is_rejected_import());
        assert_eq!(store.players(), before.as_slice());
        assert_eq!(store.active_preset(), Some("4-2-3-1"));
    }
}
