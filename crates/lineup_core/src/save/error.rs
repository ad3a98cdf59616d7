use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout must be a JSON object")]
    NotAnObject,

    #[error("Layout has no 'players' field")]
    MissingPlayers,

    #[error("'players' must be a list")]
    PlayersNotAList,

    #[error("Invalid player at index {index}: {reason}")]
    InvalidPlayer { index: usize, reason: String },

    #[error("Duplicate player id: {id}")]
    DuplicatePlayerId { id: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl SaveError {
    /// Whether retrying with a different file could succeed. Shape errors
    /// mean the document itself is bad.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            _ => false,
        }
    }

    /// Rejections of the document shape, as opposed to I/O failures.
    pub fn is_rejected_import(&self) -> bool {
        matches!(
            self,
            SaveError::Json(_)
                | SaveError::NotAnObject
                | SaveError::MissingPlayers
                | SaveError::PlayersNotAList
                | SaveError::InvalidPlayer { .. }
                | SaveError::DuplicatePlayerId { .. }
        )
    }
}
