//! # Chess Engine Constants
//!
//! Piece valuations, movement direction sets and the starting layout.
//!
//! ## Material Values
//!
//! The heuristic opponent scores captures in whole pawns rather than centipawns:
//!
//! | Piece  | Value |
//! |--------|-------|
//! | Pawn   | 1     |
//! | Knight | 3     |
//! | Bishop | 3     |
//! | Rook   | 5     |
//! | Queen  | 9     |
//! | King   | 0     |
//!
//! The King is worth nothing as a capture target: capturing it ends the game outright,
//! so its value never needs to compete with material.
//!
//! ## Direction Sets
//!
//! Directions are `(rank delta, file delta)` pairs. Remember that rank 0 is Black's back
//! row, so `(-1, 0)` moves toward Black's side of the board.

use crate::types::PieceKind;

pub const PAWN_VALUE: f32 = 1.0;
pub const KNIGHT_VALUE: f32 = 3.0;
pub const BISHOP_VALUE: f32 = 3.0;
pub const ROOK_VALUE: f32 = 5.0;
pub const QUEEN_VALUE: f32 = 9.0;
pub const KING_VALUE: f32 = 0.0;

/// Positional bonus per rank of advancement toward the opponent's edge
pub const ADVANCEMENT_WEIGHT: f32 = 0.1;

/// Score the heuristic opponent starts from before any move is considered
pub const LOWEST_SCORE: f32 = -999.0;

/// Material value of a piece kind
pub const fn figure_value(kind: PieceKind) -> f32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KING_DIRS: [(i8, i8); 8] = QUEEN_DIRS;

pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

/// Back-row layout from file a to file h, shared by both colors
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Separator between ranks in a position key
pub const KEY_RANK_SEPARATOR: char = '/';

/// Separator between the board field and the side-to-move tag in a position key
pub const KEY_SIDE_SEPARATOR: char = ' ';
