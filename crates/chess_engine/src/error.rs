//! Error types for chess engine
//!
//! Covers the two rejection classes of the rules kernel: malformed input (notation,
//! squares, position keys) and illegal moves. Every error is returned before the board
//! is touched.

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Move or square notation could not be parsed
    #[error("Invalid notation '{input}': {reason}")]
    InvalidNotation { input: String, reason: String },

    /// Coordinates outside the 8x8 grid
    #[error("Invalid square: rank {rank}, file {file} (must be 0-7)")]
    InvalidSquare { rank: i32, file: i32 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the player making the move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// Destination is not reachable by the piece under the movement rules
    #[error("Invalid move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// Move would leave the mover's own King attacked
    #[error("Invalid move {from}{to}: would leave king in check")]
    LeavesKingInCheck { from: Square, to: Square },

    /// Promotion piece other than Q, R, B or N
    #[error("Invalid promotion piece '{letter}' (expected Q, R, B or N)")]
    InvalidPromotion { letter: char },

    /// Position key could not be decoded into a board
    #[error("Invalid position key '{key}': {reason}")]
    PositionKeyDecode { key: String, reason: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
