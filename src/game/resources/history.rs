//! Move history for the current game
//!
//! Each entry keeps the position key from *before* the move alongside the move itself,
//! which is exactly what a game record needs.

use chess_engine::api::MoveEffect;
use chess_engine::{Move, Piece, PieceKind, PositionKey};

/// One committed ply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Position and side to move before the move was played
    pub key: PositionKey,
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
}

impl MoveRecord {
    pub fn new(key: PositionKey, mv: Move, effect: MoveEffect) -> Self {
        Self {
            key,
            mv,
            piece: effect.piece,
            captured: effect.captured,
            promoted_to: effect.promoted_to,
        }
    }

    /// Four-character notation of the move, e.g. `e2e4`
    pub fn notation(&self) -> String {
        chess_engine::notation::format_move(&self.mv)
    }
}

/// Chronological list of moves; index 0 is White's first move
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}
