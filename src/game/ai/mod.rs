//! Chess AI opponent
//!
//! # Architecture
//!
//! - `resource` - [`GameMode`] and [`AIDifficulty`]
//! - `strategies` - One selection function per difficulty tier
//! - `player` - [`AiPlayer`], the bounded retry loop around a strategy
//!
//! The AI moves through the same executor as a human, after the retry loop has
//! confirmed the move does not leave its own King in check.

pub mod player;
pub mod resource;
pub mod strategies;

pub use player::{AiPlayer, DEFAULT_MOVE_ATTEMPTS};
pub use resource::{AIDifficulty, GameMode};
