//! Per-game statistics shown at the end of a game

use std::fmt;
use std::time::{Duration, Instant};

use chess_engine::api::MoveEffect;
use chess_engine::Color;

/// Running tallies for one game
///
/// `white_captures` counts pieces White took (Black pieces removed), and vice versa.
#[derive(Debug, Clone)]
pub struct GameStats {
    pub moves: u32,
    pub white_captures: u32,
    pub black_captures: u32,
    pub promotions: u32,
    pub checks: u32,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            moves: 0,
            white_captures: 0,
            black_captures: 0,
            promotions: 0,
            checks: 0,
            started_at: Instant::now(),
            finished_at: None,
        }
    }
}

impl GameStats {
    /// Count a committed move
    pub fn record_move(&mut self, effect: &MoveEffect) {
        self.moves += 1;
        if effect.captured.is_some() {
            match effect.piece.color {
                Color::White => self.white_captures += 1,
                Color::Black => self.black_captures += 1,
            }
        }
        if effect.promoted_to.is_some() {
            self.promotions += 1;
        }
    }

    pub fn captures_by(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_captures,
            Color::Black => self.black_captures,
        }
    }

    /// Freeze the clock; later calls keep the first finish time
    pub fn finish(&mut self) {
        self.finished_at.get_or_insert_with(Instant::now);
    }

    /// Elapsed game time, up to `finish` if it was called
    pub fn duration(&self) -> Duration {
        self.finished_at
            .unwrap_or_else(Instant::now)
            .duration_since(self.started_at)
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Statistics:")?;
        writeln!(f, "  Total moves: {}", self.moves)?;
        writeln!(f, "  White captures: {}", self.captures_by(Color::White))?;
        writeln!(f, "  Black captures: {}", self.captures_by(Color::Black))?;
        writeln!(f, "  Promotions: {}", self.promotions)?;
        writeln!(f, "  Checks: {}", self.checks)?;
        write!(f, "  Duration: {:.1} seconds", self.duration().as_secs_f64())
    }
}
