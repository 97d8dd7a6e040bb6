//! Check and checkmate detection
//!
//! Both queries are built directly on pseudo-legal move generation:
//!
//! - **Check**: some opposing piece has a pseudo-legal move landing on the King
//! - **Checkmate**: in check, and no pseudo-legal move of the side, once simulated,
//!   leaves it out of check
//!
//! The checkmate scan is exhaustive (pieces x moves) with no pruning, which is fine at
//! this board size.
//!
//! A side whose King is absent is never "in check". The king-absence test in
//! [`crate::api::check_for_win`] ends such games before these queries matter.

use crate::api::simulate_move;
use crate::board::Board;
use crate::move_gen::{all_pseudo_legal_moves, generate_pseudo_legal_moves};
use crate::types::*;

/// Is `color`'s King attacked by any opposing pseudo-legal move?
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king, color.opponent())
}

/// Can any piece of `by_color` pseudo-legally move onto `square`?
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.pieces_of(by_color).any(|(from, _)| {
        generate_pseudo_legal_moves(board, from)
            .iter()
            .any(|mv| mv.to == square)
    })
}

/// True if `color` is in check and every simulated reply still leaves it in check
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    !all_pseudo_legal_moves(board, color)
        .into_iter()
        .any(|mv| !is_in_check(&simulate_move(board, mv), color))
}

/// Pseudo-legal moves for `color` that do not leave its own King in check
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    all_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| !is_in_check(&simulate_move(board, *mv), color))
        .collect()
}

/// True if the move, once simulated, leaves the mover's own King in check
pub fn leaves_king_in_check(board: &Board, mv: Move, color: Color) -> bool {
    is_in_check(&simulate_move(board, mv), color)
}
