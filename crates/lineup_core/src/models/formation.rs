use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::FormationId;
use super::player::Player;

/// Named snapshot of the board, created only by an explicit save.
///
/// `players` is a deep copy taken at save time; later edits to the store never
/// reach a saved formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: FormationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Free-text shape label, e.g. "4-4-2"
    pub formation: String,
    pub players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// One template position of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetSlot {
    pub x: f64,
    pub y: f64,
    pub position: String,
    /// Explicit jersey number; when absent the slot's 1-based index is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}

impl PresetSlot {
    pub fn new(x: f64, y: f64, position: &str) -> Self {
        Self { x, y, position: position.to_string(), number: None }
    }
}

/// Static formation template. Applying one replaces the whole board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationPreset {
    pub name: String,
    pub formation: String,
    pub positions: Vec<PresetSlot>,
}

impl FormationPreset {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Input of `load_formation`: either a bare ordered layout or a named save.
///
/// Untagged so that a JSON array loads as `Players` and a JSON object with
/// formation fields loads as `Formation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutSource {
    Players(Vec<Player>),
    Formation(Formation),
}

impl LayoutSource {
    pub fn players(&self) -> &[Player] {
        match self {
            LayoutSource::Players(players) => players,
            LayoutSource::Formation(formation) => &formation.players,
        }
    }
}

impl From<Vec<Player>> for LayoutSource {
    fn from(players: Vec<Player>) -> Self {
        LayoutSource::Players(players)
    }
}

impl From<Formation> for LayoutSource {
    fn from(formation: Formation) -> Self {
        LayoutSource::Formation(formation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_source_accepts_both_shapes() {
        let bare = r#"[{"id":"a","name":"A","position":"ST","number":9,"x":50,"y":50}]"#;
        let source: LayoutSource = serde_json::from_str(bare).unwrap();
        assert!(matches!(source, LayoutSource::Players(ref p) if p.len() == 1));

        let named = r#"{
            "id": "formation-1",
            "name": "Derby",
            "description": "Custom formation",
            "formation": "4-4-2",
            "players": []
        }"#;
        let source: LayoutSource = serde_json::from_str(named).unwrap();
        match source {
            LayoutSource::Formation(f) => {
                assert_eq!(f.name, "Derby");
                assert_eq!(f.formation, "4-4-2");
                assert!(f.saved_at.is_none());
            }
            other => panic!("expected formation, got {:?}", other),
        }
    }
}
