//! Game records: one plain-text file per finished game
//!
//! ```text
//! Players: Player vs AI
//! Difficulty: Hard
//! Result: White wins by checkmate
//! Move:rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w:e2e4
//! Move:rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b:e7e5
//! ```
//!
//! Each `Move:` line holds the position key *before* the move and the move notation.
//! Position keys contain no `:`, so the notation is everything after the last one.

use std::fs;
use std::path::{Path, PathBuf};

use chess_engine::{api, notation, position_key, Board, Color, Move, PieceKind, PositionKey};
use tracing::{debug, info};

use crate::game::ai::AIDifficulty;
use crate::game::error::{GameError, GameResult};
use crate::game::resources::GameOutcome;

const PLAYERS_PREFIX: &str = "Players:";
const DIFFICULTY_PREFIX: &str = "Difficulty:";
const RESULT_PREFIX: &str = "Result:";
const MOVE_PREFIX: &str = "Move:";

/// One ply as stored in a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMove {
    pub key: PositionKey,
    pub notation: String,
}

/// A finished game as stored on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// `Player vs AI` or `Two Player`
    pub players: String,
    /// `None` is written as `N/A`
    pub difficulty: Option<AIDifficulty>,
    pub result: String,
    pub moves: Vec<RecordedMove>,
}

impl GameRecord {
    /// Outcome for White, read from the result text
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_result_text(&self.result)
    }

    /// Render in the on-disk line format
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&format!("{} {}\n", PLAYERS_PREFIX, self.players));
        let difficulty = self.difficulty.map_or("N/A", AIDifficulty::label);
        text.push_str(&format!("{} {}\n", DIFFICULTY_PREFIX, difficulty));
        text.push_str(&format!("{} {}\n", RESULT_PREFIX, self.result));
        for mv in &self.moves {
            text.push_str(&format!("{}{}:{}\n", MOVE_PREFIX, mv.key, mv.notation));
        }
        text
    }

    /// Parse record text; `source` only labels errors
    ///
    /// A record without a `Result:` line or without any `Move:` line is rejected, as is
    /// any `Move:` line with an invalid key or notation. Unknown lines are ignored.
    pub fn parse(text: &str, source: &Path) -> GameResult<Self> {
        let malformed = |reason: String| GameError::RecordParse {
            path: source.to_path_buf(),
            reason,
        };

        let mut players = None;
        let mut difficulty = None;
        let mut result = None;
        let mut moves = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if let Some(rest) = line.strip_prefix(PLAYERS_PREFIX) {
                players = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(DIFFICULTY_PREFIX) {
                difficulty = AIDifficulty::from_label(rest);
            } else if let Some(rest) = line.strip_prefix(RESULT_PREFIX) {
                result = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(MOVE_PREFIX) {
                let (key, mv) = rest
                    .rsplit_once(':')
                    .ok_or_else(|| malformed(format!("line {}: missing move notation", index + 1)))?;
                let key: PositionKey = key
                    .parse()
                    .map_err(|e| malformed(format!("line {}: {}", index + 1, e)))?;
                let parsed = notation::parse_move(mv)
                    .map_err(|e| malformed(format!("line {}: {}", index + 1, e)))?;
                moves.push(RecordedMove {
                    key,
                    notation: notation::format_move(&parsed),
                });
            }
        }

        let result = result.ok_or_else(|| malformed("missing Result line".to_string()))?;
        if moves.is_empty() {
            return Err(malformed("no Move lines".to_string()));
        }

        Ok(GameRecord {
            players: players.unwrap_or_default(),
            difficulty,
            result,
            moves,
        })
    }

    /// Read and parse a record file
    pub fn read(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
        Self::parse(&text, path)
    }

    /// Write to `dir/game_<timestamp>.txt`, creating `dir` if needed
    pub fn write_to_dir(&self, dir: &Path) -> GameResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| GameError::io(dir, e))?;

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f").to_string();
        let mut path = dir.join(format!("game_{}.txt", stamp));
        let mut suffix = 1;
        while path.exists() {
            path = dir.join(format!("game_{}_{}.txt", stamp, suffix));
            suffix += 1;
        }

        fs::write(&path, self.to_text()).map_err(|e| GameError::io(&path, e))?;
        info!("[MEMORY] Game record saved to {:?}", path);
        Ok(path)
    }

    /// Rebuild the final board by replaying every move silently from the start
    ///
    /// Notation carries no promotion piece, so a promoting move takes the kind found on
    /// its destination in the next recorded position. A promotion on the final ply has
    /// no next position and becomes a Queen.
    ///
    /// Fails if a recorded key disagrees with the replayed position or a move starts
    /// from an empty square.
    pub fn replay(&self) -> GameResult<Board> {
        let mut board = Board::initial();
        let mut side = Color::White;

        for (ply, recorded) in self.moves.iter().enumerate() {
            let expected = position_key::encode(&board, side);
            if expected != recorded.key {
                return Err(GameError::RecordParse {
                    path: PathBuf::new(),
                    reason: format!(
                        "ply {}: recorded position {} does not match replayed {}",
                        ply + 1,
                        recorded.key,
                        expected
                    ),
                });
            }

            let mut mv = notation::parse_move(&recorded.notation)?;
            if let Some(next) = self.moves.get(ply + 1) {
                if let Some(kind) = recorded_promotion(&board, mv, &next.key)? {
                    mv = mv.with_promotion(kind);
                }
            }
            if api::apply_move_silent(&mut board, mv).is_none() {
                return Err(GameError::RecordParse {
                    path: PathBuf::new(),
                    reason: format!("ply {}: no piece on {}", ply + 1, mv.from),
                });
            }
            side = side.opponent();
        }

        debug!("[MEMORY] Replayed {} plies", self.moves.len());
        Ok(board)
    }
}

/// Kind a pawn promoted to on `mv`, read from the position recorded after it
fn recorded_promotion(board: &Board, mv: Move, next: &PositionKey) -> GameResult<Option<PieceKind>> {
    let Some(piece) = board.get(mv.from) else {
        return Ok(None);
    };
    if piece.kind != PieceKind::Pawn || mv.to.rank != piece.color.promotion_rank() {
        return Ok(None);
    }

    let (after, _) = next.decode()?;
    Ok(after
        .get(mv.to)
        .filter(|placed| placed.color == piece.color && placed.kind.is_promotion_target())
        .map(|placed| placed.kind))
}
