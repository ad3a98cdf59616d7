use super::error::SaveError;
use super::format::{export_file_name, export_json, parse_import, ExportEnvelope, ImportedLayout};
use crate::config::ExportConfig;

use chrono::Utc;
use std::fs::{rename, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-level export/import of layouts.
pub struct LayoutFiles;

impl LayoutFiles {
    /// Write `envelope` to `path`, creating parent directories.
    pub fn export_to_path(path: &Path, envelope: &ExportEnvelope) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = export_json(envelope)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, path)?;

        log::info!("Exported {} players to {:?}", envelope.players.len(), path);
        Ok(())
    }

    /// Read `path` and run the import check.
    pub fn import_from_path(path: &Path) -> Result<ImportedLayout, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let text = std::fs::read_to_string(path)?;
        let layout = parse_import(&text).map_err(|e| {
            log::warn!("Rejected import {:?}: {}", path, e);
            e
        })?;

        log::debug!("Imported {} players from {:?}", layout.players.len(), path);
        Ok(layout)
    }

    /// Export into the configured directory under today's dated file name.
    pub fn export_to_dir(config: &ExportConfig, envelope: &ExportEnvelope) -> Result<PathBuf, SaveError> {
        let file_name = export_file_name(&config.file_prefix, Utc::now().date_naive());
        let path = config.directory.join(file_name);
        Self::export_to_path(&path, envelope)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, PlayerDraft, PlayerId};
    use tempfile::TempDir;

    fn envelope() -> ExportEnvelope {
        let players = vec![
            Player::from_draft(PlayerId::new("a"), PlayerDraft::new("Joshua Kimmich", "ZDM", 6).at(40.0, 60.0)),
            Player::from_draft(PlayerId::new("b"), PlayerDraft::new("Kai Havertz", "ST", 7).at(50.0, 25.0)),
        ];
        ExportEnvelope::new("Heimspiel", players)
    }

    #[test]
    fn test_export_import_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("layout.json");

        let original = envelope();
        LayoutFiles::export_to_path(&path, &original).unwrap();
        let loaded = LayoutFiles::import_from_path(&path).unwrap();

        assert_eq!(loaded.players, original.players);
        assert_eq!(loaded.name.as_deref(), Some("Heimspiel"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = LayoutFiles::import_from_path(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SaveError::FileNotFound { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_rejected_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, r#"{"players": "none"}"#).unwrap();
        assert!(matches!(LayoutFiles::import_from_path(&path), Err(SaveError::PlayersNotAList)));
    }

    #[test]
    fn test_export_to_dir_uses_dated_name() {
        let temp_dir = TempDir::new().unwrap();
        let config = ExportConfig {
            directory: temp_dir.path().to_path_buf(),
            file_prefix: "lineup".to_string(),
        };

        let path = LayoutFiles::export_to_dir(&config, &envelope()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("lineup-"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "lineup-YYYY-MM-DD.json".len());
        assert!(path.exists());
    }
}
