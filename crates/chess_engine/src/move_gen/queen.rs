//! Queen move generation
//!
//! Queens combine rook and bishop movement. Directions are cast in one pass with the
//! orthogonal rays first, then the diagonals.

use super::sliding;
use crate::board::Board;
use crate::constants::QUEEN_DIRS;
use crate::types::*;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &QUEEN_DIRS, moves);
}
