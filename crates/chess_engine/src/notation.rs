//! Coordinate notation for squares and moves
//!
//! Squares are a file letter `a`-`h` followed by a rank digit `1`-`8`; rank `8` is
//! board rank 0. A move is two squares back to back, e.g. `e2e4`.
//!
//! Move input is forgiving about case, spaces and hyphens (`E2-E4`, `e2 e4`) but the
//! stripped text must be exactly four characters.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{Move, PieceKind, Square};

fn invalid(input: &str, reason: &str) -> ChessEngineError {
    ChessEngineError::InvalidNotation {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn square_from_chars(input: &str, file: char, rank: char) -> ChessEngineResult<Square> {
    if !('a'..='h').contains(&file) {
        return Err(invalid(input, "file must be a letter a-h"));
    }
    if !('1'..='8').contains(&rank) {
        return Err(invalid(input, "rank must be a digit 1-8"));
    }
    let file = file as u8 - b'a';
    let rank = 8 - (rank as u8 - b'0');
    Square::new(rank, file).ok_or(ChessEngineError::InvalidSquare {
        rank: rank as i32,
        file: file as i32,
    })
}

/// Parse a two-character square such as `e2`
pub fn parse_square(input: &str) -> ChessEngineResult<Square> {
    let normalized = input.trim().to_ascii_lowercase();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != 2 {
        return Err(invalid(input, "square must be two characters, e.g. 'e2'"));
    }
    square_from_chars(input, chars[0], chars[1])
}

/// Parse four-character move notation such as `e2e4`
pub fn parse_move(input: &str) -> ChessEngineResult<Move> {
    let normalized: String = input
        .to_ascii_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != 4 {
        return Err(invalid(input, "use format like 'a2a4'"));
    }
    let from = square_from_chars(input, chars[0], chars[1])?;
    let to = square_from_chars(input, chars[2], chars[3])?;
    Ok(Move::new(from, to))
}

/// Parse a promotion choice letter (`q`, `r`, `b` or `n`, any case)
pub fn parse_promotion(input: &str) -> ChessEngineResult<PieceKind> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => match PieceKind::from_letter(c) {
            Some(kind) if kind.is_promotion_target() => Ok(kind),
            _ => Err(ChessEngineError::InvalidPromotion { letter: c }),
        },
        _ => Err(invalid(input, "promotion must be one of Q, R, B, N")),
    }
}

/// Four-character notation for a move, e.g. `e2e4`
pub fn format_move(mv: &Move) -> String {
    mv.to_string()
}
