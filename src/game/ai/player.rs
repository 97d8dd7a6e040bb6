//! AI turn driver
//!
//! Asks the difficulty's strategy for a move up to `attempts` times and accepts the
//! first candidate that, once simulated, does not leave the AI's own King in check.
//! Strategies that are random can produce a different candidate on each attempt;
//! the deterministic ones cannot, so a rejected static pick fails every attempt.

use chess_engine::check::leaves_king_in_check;
use chess_engine::{Board, Color, Move};
use rand::Rng;
use tracing::debug;

use super::resource::AIDifficulty;
use super::strategies::select_move;
use crate::game::memory::MemoryTable;

/// Default number of selection attempts per AI turn
pub const DEFAULT_MOVE_ATTEMPTS: u32 = 3;

/// The AI side of a game: difficulty, optional learned memory and retry budget
#[derive(Debug, Clone)]
pub struct AiPlayer {
    pub difficulty: AIDifficulty,
    memory: Option<MemoryTable>,
    attempts: u32,
}

impl AiPlayer {
    pub fn new(difficulty: AIDifficulty) -> Self {
        Self {
            difficulty,
            memory: None,
            attempts: DEFAULT_MOVE_ATTEMPTS,
        }
    }

    /// Attach learned statistics; only the Hard strategy reads them
    pub fn with_memory(mut self, memory: MemoryTable) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn memory(&self) -> Option<&MemoryTable> {
        self.memory.as_ref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Pick a move for `color`, or `None` if every attempt failed
    ///
    /// The returned move carries no promotion piece: AI pawns always become Queens.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        color: Color,
        rng: &mut R,
    ) -> Option<Move> {
        for attempt in 1..=self.attempts {
            let Some(candidate) =
                select_move(board, color, self.difficulty, self.memory.as_ref(), rng)
            else {
                debug!("[AI] Attempt {}: no move available", attempt);
                continue;
            };

            if leaves_king_in_check(board, candidate, color) {
                debug!(
                    "[AI] Attempt {}: {} rejected, leaves king in check",
                    attempt, candidate
                );
                continue;
            }

            debug!("[AI] Attempt {}: {} accepted", attempt, candidate);
            return Some(Move {
                promotion: None,
                ..candidate
            });
        }
        None
    }
}
