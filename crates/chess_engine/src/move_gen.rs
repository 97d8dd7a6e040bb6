//! Pseudo-legal move generation
//!
//! Enumerates every geometrically valid destination for a piece, without asking whether
//! the move would expose the mover's own King. Legality against self-check is layered on
//! top by [`crate::check`] and the executor's simulation.
//!
//! # Generation Order
//!
//! Board scans run rank 0 first, file a first, and each piece emits its destinations in a
//! fixed direction order. The heuristic opponent keeps the *first* best-scoring move it
//! sees, so this order is part of observable behavior.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

use crate::board::Board;
use crate::types::*;

/// Generate all pseudo-legal moves for the piece standing on `square`
///
/// Returns an empty vector for an empty square.
pub fn generate_pseudo_legal_moves(board: &Board, square: Square) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);
    generate_moves_into(board, square, &mut moves);
    moves
}

/// Generate all pseudo-legal moves for every piece of `color`
pub fn all_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (square, _) in board.pieces_of(color) {
        generate_moves_into(board, square, &mut moves);
    }
    moves
}

fn generate_moves_into(board: &Board, square: Square, moves: &mut Vec<Move>) {
    let Some(piece) = board.get(square) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, square, piece.color, moves),
        PieceKind::Knight => knight::generate_knight_moves(board, square, piece.color, moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, square, piece.color, moves),
        PieceKind::Rook => rook::generate_rook_moves(board, square, piece.color, moves),
        PieceKind::Queen => queen::generate_queen_moves(board, square, piece.color, moves),
        PieceKind::King => king::generate_king_moves(board, square, piece.color, moves),
    }
}

/// Shared step logic for pieces with a fixed offset set (knight, king)
///
/// Keeps in-bounds destinations that are empty or hold an opposing piece.
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in offsets {
        if let Some(to) = from.offset(d_rank, d_file) {
            if board.color_at(to) != Some(color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
