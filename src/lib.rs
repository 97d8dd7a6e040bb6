//! # Adaptive Chess
//!
//! Console chess against an opponent that learns from the records of its own games.
//!
//! The rules kernel lives in the `chess_engine` workspace crate. This crate adds:
//!
//! - `game` - Sessions, the three-tier AI, game memory and the player rating
//! - `core` - Settings persistence

pub mod core;
pub mod game;

pub use game::{GameError, GameResult, GameSession};
