//! Per-move positional scoring
//!
//! A move scores the material it captures plus [`ADVANCEMENT_WEIGHT`] for every rank its
//! destination lies in front of the mover's own back row. The bonus depends only on
//! where the piece lands, not on how far it travelled.

use super::material::capture_value;
use crate::board::Board;
use crate::constants::ADVANCEMENT_WEIGHT;
use crate::types::*;

/// Forward-advancement bonus for landing on `to`
pub fn advancement_bonus(color: Color, to: Square) -> f32 {
    let ranks_advanced = match color {
        Color::White => 7 - to.rank,
        Color::Black => to.rank,
    };
    ranks_advanced as f32 * ADVANCEMENT_WEIGHT
}

/// Heuristic score of `mv` for the side that owns the moving piece
pub fn score_move(board: &Board, mv: &Move, color: Color) -> f32 {
    capture_value(board, mv) + advancement_bonus(color, mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{parse_move, parse_square};

    #[test]
    fn test_advancement_is_relative_to_color() {
        let e4 = parse_square("e4").unwrap();
        assert!((advancement_bonus(Color::White, e4) - 0.3).abs() < 1e-6);
        assert!((advancement_bonus(Color::Black, e4) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_quiet_move_scores_only_advancement() {
        let board = Board::initial();
        let quiet = score_move(&board, &parse_move("e2e4").unwrap(), Color::White);
        assert!((quiet - 0.3).abs() < 1e-6);
    }
}
