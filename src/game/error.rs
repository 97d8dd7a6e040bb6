//! Error types for game module
//!
//! Covers session-level failures (moves after the game ended, acting out of turn) and
//! the persistence layer (game records, rating file). Rules violations are the engine's
//! [`ChessEngineError`] passed through unchanged.

use std::path::PathBuf;

use chess_engine::ChessEngineError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Rejected by the rules kernel (bad notation, illegal move, self-check)
    #[error(transparent)]
    Engine(#[from] ChessEngineError),

    /// The session already reached a terminal state
    #[error("Game is over: {result}")]
    GameOver { result: String },

    /// A human move was submitted while the AI is to move
    #[error("It is not the player's turn ({to_move} to move)")]
    NotYourTurn { to_move: chess_engine::Color },

    /// Filesystem failure while reading or writing persisted data
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be serialized
    #[error("Settings error: {message}")]
    Settings { message: String },

    /// A game record is missing required fields or has a malformed line
    #[error("Malformed game record {path:?}: {reason}")]
    RecordParse { path: PathBuf, reason: String },

    /// The rating file does not hold a decimal integer
    #[error("Malformed rating file {path:?}: {content:?}")]
    RatingParse { path: PathBuf, content: String },
}

impl GameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
