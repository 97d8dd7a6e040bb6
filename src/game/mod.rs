//! Game logic: sessions, the AI opponent and everything persisted between games
//!
//! The rules themselves live in the `chess_engine` crate. This module drives them.
//!
//! # Module Organization
//!
//! - `session` - Turn state machine, human move submission and queries
//! - `ai` - Difficulty tiers, move-selection strategies and the retry driver
//! - `resources` - Move history, statistics and terminal conditions
//! - `memory` - Game records on disk and the learned move table built from them
//! - `rating` - Persistent player rating
//! - `error` - Game-level error type

pub mod ai;
pub mod error;
pub mod memory;
pub mod rating;
pub mod resources;
pub mod session;

pub use error::{GameError, GameResult};
pub use session::{GameSession, TurnStart};
