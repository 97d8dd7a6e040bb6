//! Knight move generation
//!
//! Knights jump in an L-shape and ignore anything standing in between. A destination
//! is valid when it is on the board and not occupied by a piece of the knight's color.

use super::generate_step_moves;
use crate::board::Board;
use crate::constants::KNIGHT_DIRS;
use crate::types::*;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    generate_step_moves(board, from, color, &KNIGHT_DIRS, moves);
}
