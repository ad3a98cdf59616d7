//! Embedded lookup data
//!
//! `include_str!` bakes the JSON into the binary; each table is parsed once on
//! first use.
//!
//! - known_players.json: national-team roster for search
//! - asset_catalog.json: bundled card photos (filenames)

use once_cell::sync::Lazy;

use super::roster::KnownPlayer;

pub const KNOWN_PLAYERS_JSON: &str = include_str!("../../data/known_players.json");

pub const ASSET_CATALOG_JSON: &str = include_str!("../../data/asset_catalog.json");

// A corrupt table degrades to an empty lookup rather than a panic.
static KNOWN_PLAYERS: Lazy<Vec<KnownPlayer>> = Lazy::new(|| {
    serde_json::from_str(KNOWN_PLAYERS_JSON).unwrap_or_else(|e| {
        log::error!("Embedded known-player roster is corrupted: {}", e);
        Vec::new()
    })
});

static ASSET_FILES: Lazy<Vec<String>> = Lazy::new(|| {
    serde_json::from_str(ASSET_CATALOG_JSON).unwrap_or_else(|e| {
        log::error!("Embedded asset catalog is corrupted: {}", e);
        Vec::new()
    })
});

pub fn known_players() -> &'static [KnownPlayer] {
    &KNOWN_PLAYERS
}

pub fn asset_files() -> &'static [String] {
    &ASSET_FILES
}
