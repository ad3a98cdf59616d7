use thiserror::Error;

use crate::models::PlayerId;

/// Outcome of the checked (`try_*`) store operations.
///
/// The plain operations treat a missing id as a silent no-op; the checked
/// variants report it so callers and tests can assert on the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
