//! Lineup CLI
//!
//! Create, inspect and edit exported layout files from the shell.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use lineup_core::data::{self, AssetCatalog};
use lineup_core::pitch::{clamp_to, field_dimensions_for_window};
use lineup_core::{EditorConfig, FormationStore, LayoutFiles, PlayerId};

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Edit formation layouts", long_about = None)]
struct Cli {
    /// Editor config file (overrides LINEUP_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in presets
    Presets,

    /// Export a fresh board laid out by a preset
    New {
        /// Preset name or formation label (e.g. "4-3-3")
        #[arg(long)]
        preset: String,

        /// Layout name stored in the export
        #[arg(long, default_value = "Formation")]
        name: String,

        /// Output file
        #[arg(long, conflicts_with = "dir")]
        out: Option<PathBuf>,

        /// Output directory (dated file name)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the players of a layout file
    Show {
        file: PathBuf,

        /// Print the raw player list as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Check that a file is an importable layout
    Validate { file: PathBuf },

    /// Search the known-player roster
    Search {
        #[arg(default_value = "")]
        term: String,
    },

    /// Add a roster player to a layout file
    AddKnown { file: PathBuf, roster_id: String },

    /// Add a photo-library player to a layout file
    AddAsset { file: PathBuf, filename: String },

    /// Move a player (clamped to the drag bounds)
    Move { file: PathBuf, player_id: String, x: f64, y: f64 },

    /// Print the field size fitted to a window
    Fit {
        window_width: f64,
        window_height: f64,

        #[arg(long, default_value = "false")]
        no_sidebar: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init()
        .ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    run(cli.command, &config)
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let config = match path {
        Some(path) => EditorConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        // An unusable LINEUP_CONFIG_PATH only warns; an explicit --config is fatal.
        None => EditorConfig::load_or_default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(command: Commands, config: &EditorConfig) -> Result<()> {
    match command {
        Commands::Presets => {
            let store = FormationStore::with_config(config);
            for preset in store.presets() {
                println!("{:<8} {:>2} players", preset.formation, preset.len());
            }
        }

        Commands::New { preset, name, out, dir } => {
            let mut store = FormationStore::with_config(config);
            if !store.apply_preset_named(&preset) {
                bail!("Unknown preset '{}'", preset);
            }
            let envelope = store.export_envelope(&name);

            let path = match (out, dir) {
                (Some(out), _) => {
                    LayoutFiles::export_to_path(&out, &envelope)?;
                    out
                }
                (None, dir) => {
                    let mut export = config.export.clone();
                    if let Some(dir) = dir {
                        export.directory = dir;
                    }
                    LayoutFiles::export_to_dir(&export, &envelope)?
                }
            };
            println!("✅ {} ({}) written to {}", name, preset, path.display());
        }

        Commands::Show { file, json } => {
            let layout = LayoutFiles::import_from_path(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout.players)?);
                return Ok(());
            }

            if let Some(name) = &layout.name {
                println!("📋 {}", name);
            }
            if let Some(timestamp) = &layout.timestamp {
                println!("   Exported: {}", timestamp);
            }
            let catalog = AssetCatalog::embedded(&config.assets);
            for player in &layout.players {
                println!(
                    "{:>3}  {:<24} {:<6} ({:>5.1}, {:>5.1})  {}",
                    player.number,
                    player.name,
                    player.position,
                    player.x,
                    player.y,
                    describe_face(&catalog, player)
                );
            }
        }

        Commands::Validate { file } => match LayoutFiles::import_from_path(&file) {
            Ok(layout) => println!("✅ Valid layout: {} players", layout.players.len()),
            Err(e) => bail!("❌ Rejected {}: {}", file.display(), e),
        },

        Commands::Search { term } => {
            let hits = data::search(&term);
            if hits.is_empty() {
                println!("No players match '{}'", term);
            }
            for known in hits {
                println!("{:<6} {:<20} {:<4} {}", known.id, known.full_name(), known.position, known.club);
            }
        }

        Commands::AddKnown { file, roster_id } => {
            let known = data::find_by_id(&roster_id)
                .with_context(|| format!("Unknown roster player '{}'", roster_id))?;
            edit_file(&file, config, |store| {
                let draft = data::draft_from_known(known, store.players());
                let player = store.add_player(draft);
                println!("➕ {} #{} at ({}, {})", player.name, player.number, player.x, player.y);
                Ok(())
            })?;
        }

        Commands::AddAsset { file, filename } => {
            let catalog = AssetCatalog::embedded(&config.assets);
            edit_file(&file, config, |store| {
                let draft = catalog
                    .draft_for(&filename, store.players())
                    .with_context(|| format!("Unknown asset '{}'", filename))?;
                let player = store.add_player(draft);
                println!("➕ {} #{}", player.name, player.number);
                Ok(())
            })?;
        }

        Commands::Move { file, player_id, x, y } => {
            let bounds = config.drag_bounds;
            edit_file(&file, config, |store| {
                let id = PlayerId::new(player_id.clone());
                let (x, y) = (clamp_to(x, bounds.min, bounds.max), clamp_to(y, bounds.min, bounds.max));
                store
                    .try_move_player(&id, x, y)
                    .with_context(|| format!("Cannot move '{}'", player_id))?;
                println!("↔️  {} -> ({}, {})", player_id, x, y);
                Ok(())
            })?;
        }

        Commands::Fit { window_width, window_height, no_sidebar } => {
            let dims = field_dimensions_for_window(window_width, window_height, !no_sidebar, &config.viewport);
            println!("{:.0} x {:.0}", dims.width, dims.height);
        }
    }

    Ok(())
}

/// Import `file`, apply `edit`, export back in place under the same name.
fn edit_file<F>(file: &Path, config: &EditorConfig, edit: F) -> Result<()>
where
    F: FnOnce(&mut FormationStore) -> Result<()>,
{
    let layout = LayoutFiles::import_from_path(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;
    let name = layout.name.clone().unwrap_or_else(|| "Formation".to_string());

    let mut store = FormationStore::with_config(config);
    store.import_layout(layout);
    edit(&mut store)?;

    LayoutFiles::export_to_path(file, &store.export_envelope(&name))?;
    tracing::debug!(file = %file.display(), players = store.len(), "layout rewritten");
    Ok(())
}

fn describe_face(catalog: &AssetCatalog, player: &lineup_core::Player) -> String {
    match catalog.card_face(player) {
        data::CardFace::Photo(reference) => reference,
        data::CardFace::Badge(label) => format!("[{}]", label),
    }
}
