//! Layout exchange format
//!
//! ```json
//! { "name": "...", "timestamp": "2024-05-01T12:00:00Z", "players": [ ... ] }
//! ```
//!
//! Export always writes all three fields. Import only insists on `players`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::error::SaveError;
use crate::models::Player;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportEnvelope {
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub players: Vec<Player>,
}

impl ExportEnvelope {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { name: name.into(), timestamp: current_timestamp(), players }
    }
}

/// A layout that passed the import check.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedLayout {
    pub name: Option<String>,
    /// Kept verbatim; older exports do not always carry a parseable date.
    pub timestamp: Option<String>,
    pub players: Vec<Player>,
}

pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

pub fn export_json(envelope: &ExportEnvelope) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// `"{prefix}-YYYY-MM-DD.json"`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Run the import check on `text`.
///
/// Rejects anything that is not a JSON object with a `players` list whose
/// entries are all players with pairwise distinct ids. Unknown fields are
/// ignored.
pub fn parse_import(text: &str) -> Result<ImportedLayout, SaveError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(mut object) = value else {
        return Err(SaveError::NotAnObject);
    };

    let raw_players = match object.remove("players") {
        None => return Err(SaveError::MissingPlayers),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(SaveError::PlayersNotAList),
    };

    let mut players = Vec::with_capacity(raw_players.len());
    for (index, raw) in raw_players.into_iter().enumerate() {
        let player: Player = serde_json::from_value(raw)
            .map_err(|e| SaveError::InvalidPlayer { index, reason: e.to_string() })?;
        players.push(player);
    }

    let mut ids = HashSet::new();
    for player in &players {
        if !ids.insert(player.id.clone()) {
            return Err(SaveError::DuplicatePlayerId { id: player.id.to_string() });
        }
    }

    let name = object.get("name").and_then(Value::as_str).map(str::to_string);
    let timestamp = object.get("timestamp").and_then(Value::as_str).map(str::to_string);

    Ok(ImportedLayout { name, timestamp, players })
}
