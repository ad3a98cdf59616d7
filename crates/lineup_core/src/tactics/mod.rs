// crates/lineup_core/src/tactics/mod.rs
// Formation presets, preset expansion and role tags

pub mod positions;
pub mod presets;
pub mod resolver;

pub use positions::{PositionTag, CENTER_ANCHOR};
pub use presets::{default_presets, find_preset};
pub use resolver::{apply_preset, build_replacement, next_available_number, MAX_AUTO_NUMBER};
