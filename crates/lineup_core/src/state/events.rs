//! Change notifications emitted by the store.

use crate::models::{FormationId, PlayerId};

/// What changed. Emitted after the mutation has been applied; no-op calls
/// emit nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    PlayerAdded(PlayerId),
    PlayerUpdated(PlayerId),
    PlayerRemoved(PlayerId),
    PlayerReplaced { old: PlayerId, new: PlayerId },
    PlayerMoved(PlayerId),
    SelectionChanged(Option<PlayerId>),
    /// Whole collection swapped by `load_formation` / import
    LayoutLoaded { count: usize },
    FormationSaved(FormationId),
    PresetApplied { formation: String, count: usize },
}

/// Handle returned by `FormationStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
