//! King move generation
//!
//! ## King Movement Rules
//!
//! - One square in any of the 8 directions
//! - Cannot move onto own pieces, may capture opposing ones
//! - Stepping into an attacked square is *not* filtered here; that is a legality
//!   concern handled by simulation
//!
//! Castling does not exist in this rule set.

use super::generate_step_moves;
use crate::board::Board;
use crate::constants::KING_DIRS;
use crate::types::*;

pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_step_moves(board, from, color, &KING_DIRS, moves);
}
