//! Static evaluation used by the heuristic opponent
//!
//! ## Module Organization
//!
//! - `material` - Piece values and material balance
//! - `position` - Per-move scoring: captured material plus forward advancement

mod material;
mod position;

pub use material::{capture_value, evaluate_material};
pub use position::{advancement_bonus, score_move};
