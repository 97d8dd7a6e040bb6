//! Material evaluation
//!
//! Counts piece values (see [`crate::constants::figure_value`]) in whole pawns.

use crate::board::Board;
use crate::constants::figure_value;
use crate::types::*;

/// Material balance from White's point of view
pub fn evaluate_material(board: &Board) -> f32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = figure_value(piece.kind);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Value of whatever the move would capture, 0 for a quiet move
pub fn capture_value(board: &Board, mv: &Move) -> f32 {
    board
        .get(mv.to)
        .map(|captured| figure_value(captured.kind))
        .unwrap_or(0.0)
}
