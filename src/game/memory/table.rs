//! Learned move statistics aggregated from game records
//!
//! For every recorded ply the game's outcome is credited to the side that was to move
//! in that position: a White win is a win for White's moves and a loss for Black's
//! moves. Tallies only ever add up, so the table is the same whatever order the
//! records are folded in. That is what lets [`MemoryTable::build_from_dir`] parse files
//! in parallel.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use chess_engine::PositionKey;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::record::GameRecord;
use crate::game::resources::MatchResult;

/// Win/loss/draw tally for one move from one position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStat {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MoveStat {
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// `(wins - losses) / total`, in `[-1, 1]`; zero when never observed
    pub fn score(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (f64::from(self.wins) - f64::from(self.losses)) / f64::from(total),
        }
    }

    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Loss => self.losses += 1,
            MatchResult::Draw => self.draws += 1,
        }
    }

    fn absorb(&mut self, other: &MoveStat) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.draws += other.draws;
    }
}

/// Position key -> move notation -> tally
///
/// Moves are kept in notation order so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTable {
    positions: HashMap<PositionKey, BTreeMap<String, MoveStat>>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one move with a result for the side that played it
    pub fn record_move(&mut self, key: PositionKey, notation: &str, result: MatchResult) {
        self.positions
            .entry(key)
            .or_default()
            .entry(notation.to_string())
            .or_default()
            .record(result);
    }

    /// Fold every ply of a record into the table
    pub fn record_game(&mut self, record: &GameRecord) {
        let outcome = record.outcome();
        for mv in &record.moves {
            let Some(side) = mv.key.side_to_move() else {
                continue;
            };
            self.record_move(mv.key.clone(), &mv.notation, outcome.result_for(side));
        }
    }

    /// Table built from a single record
    pub fn from_record(record: &GameRecord) -> Self {
        let mut table = Self::new();
        table.record_game(record);
        table
    }

    /// Add all of `other`'s tallies into this table
    pub fn merge(&mut self, other: MemoryTable) {
        for (key, moves) in other.positions {
            let row = self.positions.entry(key).or_default();
            for (notation, stat) in moves {
                row.entry(notation).or_default().absorb(&stat);
            }
        }
    }

    fn merged(mut self, other: MemoryTable) -> Self {
        self.merge(other);
        self
    }

    /// Parse every `*.txt` record under `dir` and aggregate them
    ///
    /// A missing directory yields an empty table. Entries that cannot be listed, and
    /// `*.txt` paths that cannot be read or parsed, are skipped with a warning.
    pub fn build_from_dir(dir: &Path) -> Self {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("[MEMORY] No game records at {:?}: {}", dir, e);
                return Self::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!("[MEMORY] Skipping unreadable entry in {:?}: {}", dir, e);
                    None
                }
            })
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        paths.sort();

        let table = paths
            .par_iter()
            .filter_map(|path| match GameRecord::read(path) {
                Ok(record) => Some(Self::from_record(&record)),
                Err(e) => {
                    warn!("[MEMORY] Skipping game record {:?}: {}", path, e);
                    None
                }
            })
            .reduce(Self::new, Self::merged);

        info!(
            "[MEMORY] Loaded {} positions ({} observations) from {} files",
            table.len(),
            table.total_observations(),
            paths.len()
        );
        table
    }

    /// Recorded moves for a position, if any
    pub fn lookup(&self, key: &PositionKey) -> Option<&BTreeMap<String, MoveStat>> {
        self.positions.get(key)
    }

    /// Number of distinct positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of every tally in the table
    pub fn total_observations(&self) -> u64 {
        self.positions
            .values()
            .flat_map(|moves| moves.values())
            .map(|stat| u64::from(stat.total()))
            .sum()
    }
}
