// Editor JSON API Layer
// One JSON command in, one JSON document describing the board out

use serde::{Deserialize, Serialize};

use crate::data::{draft_from_known, find_by_id, AssetCatalog};
use crate::models::{Formation, LayoutSource, Player, PlayerDraft, PlayerId, PlayerUpdate};
use crate::pitch::FieldDimensions;
use crate::save::parse_import;
use crate::state::FormationStore;

// ========== Request/Response Structures ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Read-only: report the board
    State,
    Add { player: PlayerDraft },
    Update { id: PlayerId, update: PlayerUpdate },
    Remove { id: PlayerId },
    Replace { id: PlayerId, player: PlayerDraft },
    Select { id: Option<PlayerId> },
    Move { id: PlayerId, x: f64, y: f64 },
    Drop { id: PlayerId, pixel_x: f64, pixel_y: f64, field: FieldDimensions },
    Load { layout: LayoutSource },
    /// Raw export document, run through the import check
    Import { text: String },
    Save { name: String, #[serde(default)] description: String },
    ApplyPreset { name: String },
    AddKnown { roster_id: String },
    AddAsset { filename: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorResponse {
    pub success: bool,
    pub players: Vec<Player>,
    pub selected_id: Option<PlayerId>,
    pub formation: Option<Formation>,
    pub error: Option<String>,
}

impl EditorResponse {
    fn from_store(store: &FormationStore, error: Option<String>) -> Self {
        Self {
            success: error.is_none(),
            players: store.players().to_vec(),
            selected_id: store.selected_id().cloned(),
            formation: store.current_formation().cloned(),
            error,
        }
    }
}

// ========== Dispatch ==========

/// Apply `command` to `store`. On `Err` the store is unchanged.
pub fn execute_command(
    store: &mut FormationStore,
    catalog: &AssetCatalog,
    command: EditorCommand,
) -> Result<(), String> {
    match command {
        EditorCommand::State => {}
        EditorCommand::Add { player } => {
            store.add_player(player);
        }
        EditorCommand::Update { id, update } => {
            store.try_update_player(&id, &update).map_err(|e| e.to_string())?;
        }
        EditorCommand::Remove { id } => {
            store.try_remove_player(&id).map_err(|e| e.to_string())?;
        }
        EditorCommand::Replace { id, player } => {
            store.try_replace_player(&id, player).map_err(|e| e.to_string())?;
        }
        EditorCommand::Select { id } => store.select_player(id),
        EditorCommand::Move { id, x, y } => {
            store.try_move_player(&id, x, y).map_err(|e| e.to_string())?;
        }
        EditorCommand::Drop { id, pixel_x, pixel_y, field } => {
            store
                .drop_player(&id, pixel_x, pixel_y, field)
                .ok_or_else(|| format!("Player not found: {}", id))?;
        }
        EditorCommand::Load { layout } => store.load_formation(layout),
        EditorCommand::Import { text } => {
            let layout = parse_import(&text).map_err(|e| format!("Import rejected: {}", e))?;
            store.import_layout(layout);
        }
        EditorCommand::Save { name, description } => {
            store.save_formation(&name, &description);
        }
        EditorCommand::ApplyPreset { name } => {
            if !store.apply_preset_named(&name) {
                return Err(format!("Unknown preset: {}", name));
            }
        }
        EditorCommand::AddKnown { roster_id } => {
            let known = find_by_id(&roster_id).ok_or_else(|| format!("Unknown roster player: {}", roster_id))?;
            let draft = draft_from_known(known, store.players());
            store.add_player(draft);
        }
        EditorCommand::AddAsset { filename } => {
            let draft = catalog
                .draft_for(&filename, store.players())
                .ok_or_else(|| format!("Unknown asset: {}", filename))?;
            store.add_player(draft);
        }
    }
    Ok(())
}

/// JSON entry point with the embedded asset catalog.
pub fn execute_command_json(store: &mut FormationStore, request_json: &str) -> String {
    execute_command_json_with(store, &AssetCatalog::default(), request_json)
}

pub fn execute_command_json_with(
    store: &mut FormationStore,
    catalog: &AssetCatalog,
    request_json: &str,
) -> String {
    let error = match serde_json::from_str::<EditorCommand>(request_json) {
        Ok(command) => execute_command(store, catalog, command).err(),
        Err(e) => Some(format!("Invalid request format: {}", e)),
    };
    if let Some(message) = &error {
        log::warn!("Editor command failed: {}", message);
    }

    serde_json::to_string(&EditorResponse::from_store(store, error))
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}
