//! Settings persistence
//!
//! Loads [`Settings`] from a JSON file in the user's configuration directory and
//! saves it back. Missing or invalid files fall back to defaults with a warning, so a
//! broken settings file never stops a game from starting.
//!
//! # File Location
//!
//! `settings.json` under the platform config dir, e.g.
//! `~/.config/AdaptiveChess/settings.json` on Linux. Falls back to the working
//! directory if no config dir can be resolved.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::game::ai::{AIDifficulty, DEFAULT_MOVE_ATTEMPTS};
use crate::game::error::{GameError, GameResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Data directory used when the platform has no data dir
const FALLBACK_DATA_DIR: &str = "chess_data";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "adaptive-chess", "AdaptiveChess")
}

/// Path of `settings.json` in the user's configuration directory
pub fn settings_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// User preferences and storage locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root for game records and the rating file; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Game record directory, relative to the data dir
    pub games_dir: String,
    /// Rating file name, relative to the data dir
    pub rating_file: String,
    /// Selection attempts per AI turn before the AI forfeits
    pub ai_move_attempts: u32,
    pub default_difficulty: AIDifficulty,
    /// Build game memory for the Hard AI
    pub learning: bool,
    /// Offer a suggested move on human turns
    pub suggested_moves: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            games_dir: "games".to_string(),
            rating_file: "rating.txt".to_string(),
            ai_move_attempts: DEFAULT_MOVE_ATTEMPTS,
            default_difficulty: AIDifficulty::Medium,
            learning: true,
            suggested_moves: false,
        }
    }
}

impl Settings {
    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!("[SETTINGS] Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> GameResult<()> {
        self.save_to(&settings_path())
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> GameResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| GameError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| GameError::Settings {
            message: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| GameError::io(path, e))?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => PathBuf::from(FALLBACK_DATA_DIR),
        }
    }

    pub fn games_path(&self) -> PathBuf {
        self.data_dir().join(&self.games_dir)
    }

    pub fn rating_path(&self) -> PathBuf {
        self.data_dir().join(&self.rating_file)
    }
}
