use serde::{Deserialize, Serialize};

use super::ids::PlayerId;

/// One card placed on the pitch.
///
/// `x` / `y` are percentages of the field width / height. The store never
/// clamps them; clamping happens at the drag-input boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Free-form tactical role tag ("GK", "ST", "FIELD", "ZDM", ...)
    pub position: String,
    /// Jersey number. Older layouts may omit it; 0 means "no number".
    #[serde(default)]
    pub number: u32,
    /// Reference to an external image asset (filename or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl Player {
    pub fn from_draft(id: PlayerId, draft: PlayerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            number: draft.number,
            photo: draft.photo,
            x: draft.x,
            y: draft.y,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Initials used by the badge fallback when no photo can be shown.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Player data without an identity; input to `add_player` / `replace_player`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl PlayerDraft {
    pub fn new(name: impl Into<String>, position: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            number,
            photo: None,
            x: 50.0,
            y: 50.0,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// Partial update merged into an existing player by `update_player`.
/// Unset fields are left untouched; the id is never changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub number: Option<u32>,
    pub photo: Option<String>,
    /// Remove the photo (ignored when `photo` is also set)
    pub clear_photo: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PlayerUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.number.is_none()
            && self.photo.is_none()
            && !self.clear_photo
            && self.x.is_none()
            && self.y.is_none()
    }

    pub fn apply_to(&self, player: &mut Player) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(position) = &self.position {
            player.position = position.clone();
        }
        if let Some(number) = self.number {
            player.number = number;
        }
        if let Some(photo) = &self.photo {
            player.photo = Some(photo.clone());
        } else if self.clear_photo {
            player.photo = None;
        }
        if let Some(x) = self.x {
            player.x = x;
        }
        if let Some(y) = self.y {
            player.y = y;
        }
    }
}
