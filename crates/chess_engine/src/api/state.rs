//! Terminal-state queries
//!
//! The game ends on whichever is detected first at the start of a turn:
//! - a King is missing from the board (captured)
//! - the side to move is checkmated
//!
//! Stalemate is not distinguished: a side that is not in check is never mated, even
//! with no safe move available.

use crate::board::Board;
use crate::check::{is_checkmate, is_in_check};
use crate::types::Color;

/// Result of the king-absence test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOutcome {
    /// Only this side still has its King
    Winner(Color),
    /// Both Kings are gone; unreachable in play but defined
    Draw,
}

/// Status of the side about to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate { winner: Color },
    KingCaptured(BoardOutcome),
}

/// Simple win test: has either King left the board?
pub fn check_for_win(board: &Board) -> Option<BoardOutcome> {
    match (board.has_king(Color::White), board.has_king(Color::Black)) {
        (true, true) => None,
        (true, false) => Some(BoardOutcome::Winner(Color::White)),
        (false, true) => Some(BoardOutcome::Winner(Color::Black)),
        (false, false) => Some(BoardOutcome::Draw),
    }
}

/// Full status for `to_move`: king capture first, then checkmate, then check
pub fn game_status(board: &Board, to_move: Color) -> GameStatus {
    if let Some(outcome) = check_for_win(board) {
        return GameStatus::KingCaptured(outcome);
    }
    if is_checkmate(board, to_move) {
        return GameStatus::Checkmate {
            winner: to_move.opponent(),
        };
    }
    if is_in_check(board, to_move) {
        return GameStatus::Check;
    }
    GameStatus::Playing
}
