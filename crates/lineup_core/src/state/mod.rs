//! Formation Store
//!
//! The single owner of the board: the ordered player collection, the selection
//! pointer, the last saved formation and the preset list. Every change goes
//! through the operations below; consumers read through accessors and learn
//! about changes from subscriptions.
//!
//! Operations are synchronous and total. An id that is not on the board makes
//! the plain operation a silent no-op; each id-keyed operation also has a
//! `try_*` form that reports `StoreError::PlayerNotFound` instead.

pub mod events;

use chrono::Utc;
use std::collections::HashSet;
use std::fmt;

use crate::config::{DragBounds, EditorConfig};
use crate::error::{StoreError, StoreResult};
use crate::models::{
    Formation, FormationPreset, IdGenerator, LayoutSource, Player, PlayerDraft, PlayerId,
    PlayerUpdate,
};
use crate::pitch::{drop_position, FieldDimensions, PercentPos};
use crate::save::{ExportEnvelope, ImportedLayout};
use crate::tactics::{apply_preset, build_replacement, default_presets, find_preset};

pub use events::{StoreEvent, SubscriptionId};

/// Observer callback. Receives the event and the store after the change.
pub type Listener = Box<dyn FnMut(&StoreEvent, &FormationStore)>;

pub struct FormationStore {
    players: Vec<Player>,
    selected: Option<PlayerId>,
    current_formation: Option<Formation>,
    presets: Vec<FormationPreset>,
    /// Shape label of the board: last applied preset or loaded formation
    active_preset: Option<String>,
    ids: IdGenerator,
    drag_bounds: DragBounds,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for FormationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormationStore")
            .field("players", &self.players)
            .field("selected", &self.selected)
            .field("current_formation", &self.current_formation.as_ref().map(|f| &f.name))
            .field("active_preset", &self.active_preset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FormationStore {
    /// Empty board with the built-in presets.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            selected: None,
            current_formation: None,
            presets: default_presets().to_vec(),
            active_preset: None,
            ids: IdGenerator::new(),
            drag_bounds: DragBounds::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        let mut store = Self::new();
        store.drag_bounds = config.drag_bounds;
        store
    }

    /// Replace the preset list offered by this store.
    pub fn with_presets(mut self, presets: Vec<FormationPreset>) -> Self {
        self.presets = presets;
        self
    }

    // ========================
    // Accessors
    // ========================

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.player(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The selected player, resolved against the live collection.
    pub fn selected(&self) -> Option<&Player> {
        self.selected.as_ref().and_then(|id| self.player(id))
    }

    pub fn selected_id(&self) -> Option<&PlayerId> {
        self.selected.as_ref()
    }

    pub fn current_formation(&self) -> Option<&Formation> {
        self.current_formation.as_ref()
    }

    pub fn presets(&self) -> &[FormationPreset] {
        &self.presets
    }

    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    pub fn next_available_number(&self) -> u32 {
        crate::tactics::next_available_number(&self.players)
    }

    // ========================
    // Subscriptions
    // ========================

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &FormationStore) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        log::debug!("Store event: {:?}", event);
        if self.listeners.is_empty() {
            return;
        }
        // Listeners only get `&self`, so the list cannot change mid-dispatch.
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(&event, self);
        }
        self.listeners = listeners;
    }

    // ========================
    // Player Management
    // ========================

    fn index_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == *id)
    }

    fn fresh_player_id(&mut self) -> PlayerId {
        loop {
            let id = self.ids.next_player_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Append a new player with a fresh id. Always succeeds.
    pub fn add_player(&mut self, draft: PlayerDraft) -> Player {
        let id = self.fresh_player_id();
        let player = Player::from_draft(id, draft);
        self.players.push(player.clone());
        self.emit(StoreEvent::PlayerAdded(player.id.clone()));
        player
    }

    /// Merge `update` into the player with `id`; no-op when absent.
    pub fn update_player(&mut self, id: &PlayerId, update: &PlayerUpdate) {
        let _ = self.try_update_player(id, update);
    }

    pub fn try_update_player(&mut self, id: &PlayerId, update: &PlayerUpdate) -> StoreResult<()> {
        let idx = self.index_of(id).ok_or_else(|| StoreError::PlayerNotFound(id.clone()))?;
        if update.is_empty() {
            return Ok(());
        }
        let player = &mut self.players[idx];
        let before = player.clone();
        update.apply_to(player);
        if *player != before {
            self.emit(StoreEvent::PlayerUpdated(id.clone()));
        }
        Ok(())
    }

    /// Delete the player with `id`, clearing the selection if it pointed there.
    pub fn remove_player(&mut self, id: &PlayerId) {
        let _ = self.try_remove_player(id);
    }

    pub fn try_remove_player(&mut self, id: &PlayerId) -> StoreResult<Player> {
        let idx = self.index_of(id).ok_or_else(|| StoreError::PlayerNotFound(id.clone()))?;
        let removed = self.players.remove(idx);
        self.emit(StoreEvent::PlayerRemoved(removed.id.clone()));

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            self.emit(StoreEvent::SelectionChanged(None));
        }
        Ok(removed)
    }

    /// Swap the identity at `old_id` for a new player built from `draft`.
    ///
    /// The newcomer keeps the old board coordinates and collection index, and
    /// inherits the selection if the old player held it.
    pub fn replace_player(&mut self, old_id: &PlayerId, draft: PlayerDraft) {
        let _ = self.try_replace_player(old_id, draft);
    }

    pub fn try_replace_player(&mut self, old_id: &PlayerId, draft: PlayerDraft) -> StoreResult<Player> {
        let idx = self.index_of(old_id).ok_or_else(|| StoreError::PlayerNotFound(old_id.clone()))?;
        let new_id = self.fresh_player_id();
        let replacement = build_replacement(&self.players[idx], draft, new_id);
        self.players[idx] = replacement.clone();

        self.emit(StoreEvent::PlayerReplaced { old: old_id.clone(), new: replacement.id.clone() });

        if self.selected.as_ref() == Some(old_id) {
            self.selected = Some(replacement.id.clone());
            self.emit(StoreEvent::SelectionChanged(self.selected.clone()));
        }
        Ok(replacement)
    }

    /// Set or clear the selection. Always succeeds; an id that is not on the
    /// board clears the selection, so it only ever points at a live player.
    pub fn select_player(&mut self, id: Option<PlayerId>) {
        let id = id.filter(|id| {
            let live = self.contains(id);
            if !live {
                log::debug!("Selection target '{}' not on the board, clearing", id);
            }
            live
        });
        if self.selected == id {
            return;
        }
        self.selected = id;
        self.emit(StoreEvent::SelectionChanged(self.selected.clone()));
    }

    /// Set the coordinates of `id`. No clamping; callers clamp at input time.
    pub fn move_player(&mut self, id: &PlayerId, x: f64, y: f64) {
        let _ = self.try_move_player(id, x, y);
    }

    pub fn try_move_player(&mut self, id: &PlayerId, x: f64, y: f64) -> StoreResult<()> {
        let idx = self.index_of(id).ok_or_else(|| StoreError::PlayerNotFound(id.clone()))?;
        let player = &mut self.players[idx];
        if player.x == x && player.y == y {
            return Ok(());
        }
        player.x = x;
        player.y = y;
        self.emit(StoreEvent::PlayerMoved(id.clone()));
        Ok(())
    }

    /// Drag-end: convert the drop pixel to board percentages, clamp into the
    /// configured bounds, then move. Returns where the card landed, or `None`
    /// if `id` is not on the board.
    pub fn drop_player(
        &mut self,
        id: &PlayerId,
        pixel_x: f64,
        pixel_y: f64,
        dims: FieldDimensions,
    ) -> Option<PercentPos> {
        let (x, y) = drop_position(pixel_x, pixel_y, dims, self.drag_bounds);
        self.try_move_player(id, x, y).ok().map(|_| (x, y))
    }

    // ========================
    // Layout Management
    // ========================

    /// Replace the whole collection with `source` and clear the selection.
    ///
    /// A `Formation` source is also recorded as the current formation and its
    /// shape label becomes the active one; a bare list resets the label. Ids
    /// that repeat within the source are re-issued so the board never holds
    /// two players with the same id.
    pub fn load_formation(&mut self, source: impl Into<LayoutSource>) {
        let (mut players, mut formation) = match source.into() {
            LayoutSource::Players(players) => (players, None),
            LayoutSource::Formation(mut formation) => {
                let players = std::mem::take(&mut formation.players);
                (players, Some(formation))
            }
        };

        let mut seen = HashSet::new();
        for player in players.iter_mut() {
            if !seen.insert(player.id.clone()) {
                let reissued = loop {
                    let id = self.ids.next_player_id();
                    if !seen.contains(&id) {
                        break id;
                    }
                };
                log::warn!("Duplicate player id '{}' in loaded layout, re-issued as '{}'", player.id, reissued);
                seen.insert(reissued.clone());
                player.id = reissued;
            }
        }

        // A bare layout has no known shape; a named save carries its own.
        self.active_preset = formation.as_ref().map(|f| f.formation.clone());
        if let Some(mut formation) = formation.take() {
            formation.players = players.clone();
            self.current_formation = Some(formation);
        }

        let count = players.len();
        self.players = players;
        let had_selection = self.selected.take().is_some();

        log::info!("Loaded layout with {} players", count);
        self.emit(StoreEvent::LayoutLoaded { count });
        if had_selection {
            self.emit(StoreEvent::SelectionChanged(None));
        }
    }

    /// Snapshot the board into a new `Formation` and record it as current.
    ///
    /// The shape label is the active one (last applied preset or loaded
    /// formation), or `name` when the board has none. The live collection is
    /// left untouched.
    pub fn save_formation(&mut self, name: &str, description: &str) -> Formation {
        let formation = Formation {
            id: self.ids.next_formation_id(),
            name: name.to_string(),
            description: description.to_string(),
            formation: self.active_preset.clone().unwrap_or_else(|| name.to_string()),
            players: self.players.clone(),
            saved_at: Some(Utc::now()),
        };
        self.current_formation = Some(formation.clone());

        log::info!("Saved formation '{}' ({} players)", formation.name, formation.players.len());
        self.emit(StoreEvent::FormationSaved(formation.id.clone()));
        formation
    }

    /// Replace the board with one fresh player per preset slot and clear the
    /// selection.
    pub fn set_formation_preset(&mut self, preset: &FormationPreset) {
        self.players = apply_preset(preset, &mut self.ids);
        self.selected = None;
        self.active_preset = Some(preset.formation.clone());

        self.emit(StoreEvent::PresetApplied {
            formation: preset.formation.clone(),
            count: self.players.len(),
        });
    }

    /// Look up one of this store's presets by name and apply it.
    /// Returns false (and changes nothing) when no preset matches.
    pub fn apply_preset_named(&mut self, name: &str) -> bool {
        let Some(preset) = find_preset(&self.presets, name).cloned() else {
            return false;
        };
        self.set_formation_preset(&preset);
        true
    }

    // ========================
    // Import / Export
    // ========================

    /// Export envelope of the live board.
    pub fn export_envelope(&self, name: &str) -> ExportEnvelope {
        ExportEnvelope::new(name, self.players.clone())
    }

    /// Load a validated import as a bare layout (one atomic load).
    pub fn import_layout(&mut self, imported: ImportedLayout) {
        self.load_formation(LayoutSource::Players(imported.players));
    }
}
