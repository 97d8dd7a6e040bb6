//! Game over state tracking and result management
//!
//! # Terminal Conditions
//!
//! Checked at the start of every turn, in this order:
//!
//! - **KingCaptured**: a King is missing from the board. If both are gone the game is a
//!   draw (unreachable in play, but defined)
//! - **Checkmate**: the side to move is in check and no simulated move escapes
//!
//! And during the turn itself:
//!
//! - **NoValidMoves**: the AI exhausted its attempts without a move that keeps its King
//!   out of check; the AI side loses
//! - **Abandoned**: the player typed `quit`
//!
//! The result line written to game records and fed to the rating is derived from the
//! condition that actually fired, never from a generic fallback.

use std::fmt;

use chess_engine::api::BoardOutcome;
use chess_engine::Color;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    KingCaptured(BoardOutcome),
    Checkmate { winner: Color },
    NoValidMoves { loser: Color },
    Abandoned,
}

impl GameOverReason {
    /// Final outcome from White's point of view
    pub fn outcome(self) -> GameOutcome {
        match self {
            GameOverReason::KingCaptured(BoardOutcome::Winner(color))
            | GameOverReason::Checkmate { winner: color } => GameOutcome::won_by(color),
            GameOverReason::NoValidMoves { loser } => GameOutcome::won_by(loser.opponent()),
            GameOverReason::KingCaptured(BoardOutcome::Draw) | GameOverReason::Abandoned => {
                GameOutcome::Draw
            }
        }
    }

    /// Result text for records and the end-of-game banner
    ///
    /// Wins always contain `"White wins"` or `"Black wins"` so that memory parsing can
    /// attribute them.
    pub fn result_text(self) -> String {
        match self {
            GameOverReason::KingCaptured(BoardOutcome::Winner(color)) => {
                format!("{} wins by king capture", color)
            }
            GameOverReason::KingCaptured(BoardOutcome::Draw) => {
                "Draw (both kings captured)".to_string()
            }
            GameOverReason::Checkmate { winner } => format!("{} wins by checkmate", winner),
            GameOverReason::NoValidMoves { loser } => format!(
                "{} wins ({} AI has no valid moves)",
                loser.opponent(),
                loser
            ),
            GameOverReason::Abandoned => "Game abandoned".to_string(),
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result_text())
    }
}

/// Result of a finished game, independent of who was watching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    pub fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::WhiteWins,
            Color::Black => GameOutcome::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::BlackWins => Some(Color::Black),
            GameOutcome::Draw => None,
        }
    }

    /// Interpret free-form result text: substring match on `"White wins"` and
    /// `"Black wins"`, anything else is a draw
    pub fn from_result_text(text: &str) -> Self {
        if text.contains("White wins") {
            GameOutcome::WhiteWins
        } else if text.contains("Black wins") {
            GameOutcome::BlackWins
        } else {
            GameOutcome::Draw
        }
    }

    /// The outcome as experienced by `color`
    pub fn result_for(self, color: Color) -> MatchResult {
        match self.winner() {
            None => MatchResult::Draw,
            Some(winner) if winner == color => MatchResult::Win,
            Some(_) => MatchResult::Loss,
        }
    }
}

/// Win, loss or draw for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}
