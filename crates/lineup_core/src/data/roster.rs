use serde::{Deserialize, Serialize};

use super::embedded::known_players;
use crate::models::{Player, PlayerDraft};
use crate::tactics::{next_available_number, PositionTag};

/// A real-world player from the embedded roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownPlayer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub position: String,
    pub club: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl KnownPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn matches(&self, needle: &str) -> bool {
        self.full_name().to_lowercase().contains(needle)
            || self.position.to_lowercase().contains(needle)
            || self.club.to_lowercase().contains(needle)
    }
}

/// Case-insensitive substring search over name, position and club.
/// An empty term returns the whole roster.
pub fn search(term: &str) -> Vec<&'static KnownPlayer> {
    search_in(known_players(), term)
}

pub fn search_in<'a>(roster: &'a [KnownPlayer], term: &str) -> Vec<&'a KnownPlayer> {
    let needle = term.trim().to_lowercase();
    roster.iter().filter(|p| p.matches(&needle)).collect()
}

pub fn find_by_id(id: &str) -> Option<&'static KnownPlayer> {
    known_players().iter().find(|p| p.id == id)
}

/// Draft placing `known` at its position's anchor with the next free number.
pub fn draft_from_known(known: &KnownPlayer, current: &[Player]) -> PlayerDraft {
    let (x, y) = PositionTag::parse(&known.position).anchor_or_center();
    let mut draft = PlayerDraft::new(known.full_name(), known.position.clone(), next_available_number(current)).at(x, y);
    draft.photo = known.photo.clone();
    draft
}
