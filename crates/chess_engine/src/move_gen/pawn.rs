//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent's edge, destination must be empty
//! - **Double push**: from the pawn's home rank only, both squares must be empty
//! - **Captures**: one square diagonally forward, only onto an opposing piece
//! - **Promotion**: reaching the far rank is a promotion, performed by the executor
//!
//! There is no en passant in this rule set.

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// The double push is only considered once the single push is known to be open,
/// so a piece directly in front blocks both.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(Move::new(from, one));

            if from.rank == color.pawn_home_rank() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Some(target) = from.offset(forward, d_file) {
            if board.is_enemy(target, color) {
                moves.push(Move::new(from, target));
            }
        }
    }
}
