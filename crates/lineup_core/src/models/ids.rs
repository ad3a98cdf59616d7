//! Identifier newtypes and the id generator shared by players and saved formations.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque player identifier. Serializes as a plain string so layouts written
/// by other tools (with arbitrary string ids) import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

/// Opaque identifier of a saved formation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormationId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FormationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FormationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Id generator: a per-store monotonic sequence plus a random v4 fragment.
///
/// The sequence makes ids unique within one store even when many are minted in
/// the same clock tick; the random fragment keeps them apart from ids minted by
/// other sessions (e.g. an imported layout).
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    seq: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { seq: 0 }
    }

    fn next_raw(&mut self, prefix: &str) -> String {
        self.seq += 1;
        let random = Uuid::new_v4().simple().to_string();
        format!("{}-{:x}-{}", prefix, self.seq, &random[..12])
    }

    pub fn next_player_id(&mut self) -> PlayerId {
        PlayerId(self.next_raw("player"))
    }

    pub fn next_formation_id(&mut self) -> FormationId {
        FormationId(self.next_raw("formation"))
    }

    /// Number of ids minted so far.
    pub fn issued(&self) -> u64 {
        self.seq
    }
}
