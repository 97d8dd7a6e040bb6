//! Public API for the chess engine
//!
//! High-level entry points used by the game layer.
//!
//! ## Module Organization
//!
//! - `moves` - Move validation and the two executors (notifying and silent) plus the
//!   side-effect-free simulator
//! - `state` - Terminal-state queries (king capture, checkmate)

mod moves;
mod state;

pub use moves::{apply_move_silent, execute_move, simulate_move, validate_move, MoveEffect};
pub use state::{check_for_win, game_status, BoardOutcome, GameStatus};
