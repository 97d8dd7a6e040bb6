//! Sliding piece move generation
//!
//! Common ray-casting for bishops, rooks and queens.
//!
//! ## Algorithm
//!
//! For each direction, step outward from the origin until:
//! 1. the board edge: the ray ends
//! 2. an own piece: the ray ends, that square is excluded
//! 3. an opposing piece: the ray ends, that square is included as a capture

use crate::board::Board;
use crate::types::*;

/// Ray-cast along every direction in `dirs`, appending reachable squares
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(d_rank, d_file) {
            match board.color_at(next) {
                None => moves.push(Move::new(from, next)),
                Some(c) if c == color => break,
                Some(_) => {
                    moves.push(Move::new(from, next));
                    break;
                }
            }
            current = next;
        }
    }
}
