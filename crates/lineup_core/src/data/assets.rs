use serde::{Deserialize, Serialize};

use super::embedded::asset_files;
use crate::config::AssetConfig;
use crate::models::{Player, PlayerDraft};
use crate::tactics::next_available_number;

/// Position tag given to players created from a bare photo.
pub const ASSET_POSITION: &str = "FIELD";

/// What the view draws on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CardFace {
    /// Full image reference
    Photo(String),
    /// Text fallback: jersey number or initials
    Badge(String),
}

/// Local photo library keyed by filename.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    files: Vec<String>,
    base_url: String,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::embedded(&AssetConfig::default())
    }
}

impl AssetCatalog {
    pub fn embedded(config: &AssetConfig) -> Self {
        Self::new(asset_files().to_vec(), config.base_url.clone())
    }

    pub fn new(files: Vec<String>, base_url: impl Into<String>) -> Self {
        Self { files, base_url: base_url.into() }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.iter().any(|f| f == filename)
    }

    /// Full reference for `photo`: catalog files get the base prefix,
    /// absolute URLs pass through, anything else does not resolve.
    pub fn resolve_photo(&self, photo: &str) -> Option<String> {
        if is_absolute_url(photo) {
            return Some(photo.to_string());
        }
        if self.contains(photo) {
            return Some(format!("{}{}", self.base_url, photo));
        }
        None
    }

    pub fn card_face(&self, player: &Player) -> CardFace {
        if let Some(reference) = player.photo.as_deref().and_then(|p| self.resolve_photo(p)) {
            return CardFace::Photo(reference);
        }
        if player.number != 0 {
            CardFace::Badge(player.number.to_string())
        } else {
            CardFace::Badge(player.initials())
        }
    }

    /// Draft for `filename`, or `None` when the file is not in the catalog.
    pub fn draft_for(&self, filename: &str, current: &[Player]) -> Option<PlayerDraft> {
        self.contains(filename).then(|| draft_from_asset(filename, current))
    }
}

fn is_absolute_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://") || reference.starts_with("data:")
}

/// Filename without its `.png` extension.
pub fn display_name(filename: &str) -> String {
    filename.strip_suffix(".png").unwrap_or(filename).to_string()
}

pub fn draft_from_asset(filename: &str, current: &[Player]) -> PlayerDraft {
    PlayerDraft::new(display_name(filename), ASSET_POSITION, next_available_number(current))
        .at(50.0, 50.0)
        .with_photo(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;

    fn player(photo: Option<&str>, number: u32) -> Player {
        let mut draft = PlayerDraft::new("Fuchsi Falke", "FIELD", number);
        draft.photo = photo.map(str::to_string);
        Player::from_draft(PlayerId::new("p"), draft)
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Anton.png"), "Anton");
        assert_eq!(display_name("Anton"), "Anton");
    }

    #[test]
    fn test_draft_from_asset() {
        let draft = draft_from_asset("Leo.png", &[player(None, 1)]);
        assert_eq!(draft.name, "Leo");
        assert_eq!(draft.position, "FIELD");
        assert_eq!(draft.photo.as_deref(), Some("Leo.png"));
        assert_eq!(draft.number, 2);
        assert_eq!((draft.x, draft.y), (50.0, 50.0));
    }

    #[test]
    fn test_resolve_photo() {
        let catalog = AssetCatalog::embedded(&AssetConfig { base_url: "/lineup/".to_string() });
        assert_eq!(catalog.resolve_photo("Max.png").as_deref(), Some("/lineup/Max.png"));
        assert_eq!(
            catalog.resolve_photo("https://example.org/a.png").as_deref(),
            Some("https://example.org/a.png")
        );
        assert_eq!(catalog.resolve_photo("Nobody.png"), None);
        assert!(catalog.draft_for("Nobody.png", &[]).is_none());
    }

    #[test]
    fn test_card_face_fallbacks() {
        let catalog = AssetCatalog::default();
        assert_eq!(catalog.card_face(&player(Some("Max.png"), 9)), CardFace::Photo("/Max.png".to_string()));
        assert_eq!(catalog.card_face(&player(Some("missing.png"), 9)), CardFace::Badge("9".to_string()));
        assert_eq!(catalog.card_face(&player(None, 0)), CardFace::Badge("FF".to_string()));
    }
}
