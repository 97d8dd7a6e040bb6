//! Persistent player rating
//!
//! The rating file holds a single decimal integer. A missing or unreadable file means
//! the default rating of 1000. Each rated game moves the rating by the difficulty's
//! K-factor and the result is clamped at zero.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::game::ai::AIDifficulty;
use crate::game::error::{GameError, GameResult};
use crate::game::resources::MatchResult;

pub const DEFAULT_RATING: u32 = 1000;

/// Owns the rating file
#[derive(Debug, Clone)]
pub struct RatingTracker {
    path: PathBuf,
}

impl RatingTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored rating, `Ok(None)` if no file exists yet
    ///
    /// Negative stored values read as zero.
    pub fn read(&self) -> GameResult<Option<u32>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(GameError::io(&self.path, e)),
        };

        let value: i64 = content
            .trim()
            .parse()
            .map_err(|_| GameError::RatingParse {
                path: self.path.clone(),
                content: content.clone(),
            })?;
        Ok(Some(value.clamp(0, i64::from(u32::MAX)) as u32))
    }

    /// Current rating, or [`DEFAULT_RATING`] if absent or unreadable
    pub fn load(&self) -> u32 {
        match self.read() {
            Ok(Some(rating)) => rating,
            Ok(None) => {
                debug!("[RATING] No rating file at {:?}, using default", self.path);
                DEFAULT_RATING
            }
            Err(e) => {
                warn!("[RATING] {}. Using default rating.", e);
                DEFAULT_RATING
            }
        }
    }

    /// Apply a game result, persist it and return the new rating
    pub fn update(&self, result: MatchResult, difficulty: AIDifficulty) -> GameResult<u32> {
        let current = self.load();
        let k = difficulty.k_factor();
        let updated = match result {
            MatchResult::Win => current.saturating_add(k),
            MatchResult::Loss => current.saturating_sub(k),
            MatchResult::Draw => current,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| GameError::io(parent, e))?;
            }
        }
        fs::write(&self.path, updated.to_string()).map_err(|e| GameError::io(&self.path, e))?;

        info!(
            "[RATING] {:?} vs {} AI: {} -> {}",
            result, difficulty, current, updated
        );
        Ok(updated)
    }
}
