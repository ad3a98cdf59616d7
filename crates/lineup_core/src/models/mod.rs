//! Board data model: players, saved formations, preset templates and ids.

pub mod formation;
pub mod ids;
pub mod player;

pub use formation::{Formation, FormationPreset, LayoutSource, PresetSlot};
pub use ids::{FormationId, IdGenerator, PlayerId};
pub use player::{Player, PlayerDraft, PlayerUpdate};
