//! # Editor configuration
//!
//! Layout constants for the pitch viewport, the drag clamp region, export
//! naming and the asset base. Everything has a default; a JSON file named by
//! `LINEUP_CONFIG_PATH` can override any subset of fields.
//!
//! ```rust
//! use lineup_core::config::EditorConfig;
//!
//! let config = EditorConfig::default();
//! assert_eq!(config.drag_bounds.min, 5.0);
//! let compact = EditorConfig::compact();
//! assert_eq!(compact.viewport.sidebar_width, 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

/// Env var naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "LINEUP_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Sizing rules for fitting the pitch into the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// width / height
    pub aspect_ratio: f64,
    pub max_width: f64,
    /// Below these floors the aspect ratio is abandoned
    pub min_width: f64,
    pub min_height: f64,
    /// Width taken by the side panel when it is open
    pub sidebar_width: f64,
    pub horizontal_padding: f64,
    /// Header plus padding above/below the pitch
    pub vertical_chrome: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 4.0 / 3.0,
            max_width: 1000.0,
            min_width: 400.0,
            min_height: 300.0,
            sidebar_width: 320.0,
            horizontal_padding: 40.0,
            vertical_chrome: 120.0,
        }
    }
}

/// Percentage range a dropped card's centre is clamped into (both axes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self { min: crate::pitch::CLAMP_MIN, max: crate::pitch::CLAMP_MAX }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from("exports"), file_prefix: "formation".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Prefix joined to catalog filenames to form a loadable reference
    pub base_url: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self { base_url: "/".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub viewport: ViewportConfig,
    pub drag_bounds: DragBounds,
    pub export: ExportConfig,
    pub assets: AssetConfig,
}

impl EditorConfig {
    /// Embedded hosts without a side panel
    pub fn compact() -> Self {
        let mut cfg = Self::default();
        cfg.viewport.sidebar_width = 0.0;
        cfg.viewport.horizontal_padding = 16.0;
        cfg.viewport.vertical_chrome = 48.0;
        cfg.viewport.min_width = 320.0;
        cfg.viewport.min_height = 240.0;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&content)
    }

    /// Load from `LINEUP_CONFIG_PATH` when set, defaults otherwise.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let config = Self::from_path(Path::new(path))?;
        log::info!("Loaded editor config from {}='{}'", CONFIG_PATH_ENV, path);
        Ok(config)
    }

    /// Like `load_from_env`, but falls back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load_from_env().unwrap_or_else(|e| {
            log::warn!("Ignoring editor config: {}", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.viewport;
        if !(v.aspect_ratio.is_finite() && v.aspect_ratio > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport.aspect_ratio must be positive, got {}",
                v.aspect_ratio
            )));
        }
        if v.min_width < 0.0 || v.min_height < 0.0 || v.max_width <= 0.0 {
            return Err(ConfigError::Invalid("viewport sizes must be positive".to_string()));
        }
        if v.sidebar_width < 0.0 || v.horizontal_padding < 0.0 || v.vertical_chrome < 0.0 {
            return Err(ConfigError::Invalid("viewport chrome must not be negative".to_string()));
        }

        let b = &self.drag_bounds;
        if !(0.0..=100.0).contains(&b.min) || !(0.0..=100.0).contains(&b.max) || b.min > b.max {
            return Err(ConfigError::Invalid(format!(
                "drag_bounds must satisfy 0 <= min <= max <= 100, got {}..{}",
                b.min, b.max
            )));
        }

        if self.export.file_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("export.file_prefix must not be empty".to_string()));
        }
        Ok(())
    }
}
