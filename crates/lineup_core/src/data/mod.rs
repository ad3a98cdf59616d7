//! Read-only lookup data
//!
//! - Known-player roster (search, drafts at position anchors)
//! - Photo asset catalog (drafts from filenames, card faces)

pub mod assets;
pub mod embedded;
pub mod roster;

pub use assets::{display_name, draft_from_asset, AssetCatalog, CardFace, ASSET_POSITION};
pub use embedded::{asset_files, known_players};
pub use roster::{draft_from_known, find_by_id, search, search_in, KnownPlayer};
