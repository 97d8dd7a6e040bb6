//! Game memory: records of finished games and the move statistics learned from them
//!
//! - `record` - The on-disk game record format, writing, parsing and replay
//! - `table` - [`MemoryTable`] aggregation keyed by position and move
//!
//! The table is built once, before the first AI move of a learning session, and is
//! read-only for the rest of that game.

pub mod record;
pub mod table;

pub use record::{GameRecord, RecordedMove};
pub use table::{MemoryTable, MoveStat};
