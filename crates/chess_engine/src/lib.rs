//! # Chess Engine - Reduced-Rule Chess Kernel
//!
//! The rules kernel behind the adaptive console opponent: board model, pseudo-legal
//! move generation, check and checkmate detection, move execution and simulation,
//! static move scoring, and the position-key codec used by game memory.
//!
//! ## Rule Subset
//!
//! This is deliberately not full chess. There is no castling, no en passant, no
//! fifty-move or repetition draw and no stalemate. A game ends when a King is captured
//! or the side to move is checkmated.
//!
//! ## Module Organization
//!
//! - `types` - Color, PieceKind, Piece, Square, Move
//! - `board` - The 8x8 grid and piece queries
//! - `move_gen` - Pseudo-legal move generation per piece kind
//! - `check` - Check, checkmate and self-check filtering
//! - `api` - Executors, simulator, validation and terminal-state queries
//! - `evaluation` - Material and per-move heuristic scores
//! - `notation` - Square and move coordinate notation
//! - `position_key` - Board + side-to-move string keys
//! - `error` - Engine error type
//!
//! ## Example
//!
//! ```rust
//! use chess_engine::{api, notation, Board, Color};
//!
//! let mut board = Board::initial();
//! let mv = notation::parse_move("e2e4").unwrap();
//! api::validate_move(&board, mv, Color::White).unwrap();
//! api::execute_move(&mut board, mv);
//! assert!(!chess_engine::check::is_in_check(&board, Color::Black));
//! ```

pub mod api;
pub mod board;
pub mod check;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod notation;
pub mod position_key;
pub mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use position_key::PositionKey;
pub use types::{Color, Move, Piece, PieceKind, Square};
