//! Position keys: compact, FEN-like board encoding
//!
//! A key is the board field followed by a space and the side-to-move tag:
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b
//! ```
//!
//! - ranks are written rank 0 first and joined by `/`
//! - runs of empty squares collapse to one decimal digit `1`-`8`
//! - pieces use their letter, uppercase for White
//!
//! Keys are lookup keys for game memory. They carry no castling or en passant
//! fields because neither exists in this rule set.
//!
//! Decoding is strict: it accepts exactly what [`encode`] produces. Zero-length or
//! split runs (`0`, `44`), ranks that do not add up to eight squares, unknown letters and
//! missing or unknown side tags are all rejected.

use std::fmt;

use crate::board::Board;
use crate::constants::{KEY_RANK_SEPARATOR, KEY_SIDE_SEPARATOR};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionKey(String);

impl PositionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Side-to-move tag without decoding the board field
    pub fn side_to_move(&self) -> Option<Color> {
        let (_, tag) = self.0.rsplit_once(KEY_SIDE_SEPARATOR)?;
        let mut chars = tag.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_tag(c),
            _ => None,
        }
    }

    /// Decode this key back into a board and side to move
    pub fn decode(&self) -> ChessEngineResult<(Board, Color)> {
        decode(&self.0)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PositionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PositionKey {
    type Err = ChessEngineError;

    /// Accept only well-formed keys
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)?;
        Ok(PositionKey(s.to_string()))
    }
}

/// Encode a board and the side to move
pub fn encode(board: &Board, side_to_move: Color) -> PositionKey {
    let mut key = String::with_capacity(72);

    for (rank, row) in board.rows().iter().enumerate() {
        if rank > 0 {
            key.push(KEY_RANK_SEPARATOR);
        }
        let mut empty_run = 0u8;
        for cell in row {
            match cell {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        key.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    key.push(piece.to_char());
                }
            }
        }
        if empty_run > 0 {
            key.push((b'0' + empty_run) as char);
        }
    }

    key.push(KEY_SIDE_SEPARATOR);
    key.push(side_to_move.tag());
    PositionKey(key)
}

fn decode_error(key: &str, reason: impl Into<String>) -> ChessEngineError {
    ChessEngineError::PositionKeyDecode {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Decode a key into the board and side to move it describes
pub fn decode(key: &str) -> ChessEngineResult<(Board, Color)> {
    let (field, tag) = key
        .split_once(KEY_SIDE_SEPARATOR)
        .ok_or_else(|| decode_error(key, "missing side-to-move tag"))?;

    let mut tag_chars = tag.chars();
    let side = match (tag_chars.next(), tag_chars.next()) {
        (Some(c), None) => {
            Color::from_tag(c).ok_or_else(|| decode_error(key, format!("unknown side tag '{c}'")))?
        }
        _ => return Err(decode_error(key, "side-to-move tag must be one character")),
    };

    let ranks: Vec<&str> = field.split(KEY_RANK_SEPARATOR).collect();
    if ranks.len() != 8 {
        return Err(decode_error(
            key,
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    let mut board = Board::empty();
    for (rank, text) in ranks.iter().enumerate() {
        let mut file = 0u8;
        let mut previous_was_run = false;

        for c in text.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(decode_error(key, format!("invalid empty run '{c}'")));
                }
                if previous_was_run {
                    return Err(decode_error(key, "consecutive empty runs"));
                }
                file += run as u8;
                previous_was_run = true;
            } else {
                let piece = Piece::from_char(c)
                    .ok_or_else(|| decode_error(key, format!("unknown character '{c}'")))?;
                let square = Square::new(rank as u8, file)
                    .ok_or_else(|| decode_error(key, format!("rank {} overflows", rank)))?;
                board.set(square, Some(piece));
                file += 1;
                previous_was_run = false;
            }

            if file > 8 {
                return Err(decode_error(key, format!("rank {} overflows", rank)));
            }
        }

        if file != 8 {
            return Err(decode_error(
                key,
                format!("rank {} covers {} squares, expected 8", rank, file),
            ));
        }
    }

    Ok((board, side))
}
