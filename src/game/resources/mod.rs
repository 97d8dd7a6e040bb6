//! Game session state that is not the board itself
//!
//! # Resource Categories
//!
//! ## Game History
//! - [`MoveHistory`] - Every committed ply with the position key it was played from
//!
//! ## Game Status
//! - [`GameOverReason`] - Terminal condition that ended the game
//! - [`GameOutcome`] / [`MatchResult`] - The result from White's or one side's view
//!
//! ## Statistics
//! - [`GameStats`] - Moves, captures per side, promotions, checks, duration

pub mod game_over;
pub mod history;
pub mod stats;

pub use game_over::{GameOutcome, GameOverReason, MatchResult};
pub use history::{MoveHistory, MoveRecord};
pub use stats::GameStats;
