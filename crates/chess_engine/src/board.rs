//! Board model and piece queries
//!
//! The board is an owned 8x8 grid of `Option<Piece>`. It is passed by `&mut` when a
//! move is committed and cloned when a move is only simulated, so there is never any
//! ambient board state.
//!
//! No invariant is kept on piece counts: a King can be captured and simply disappears.

use std::fmt;

use crate::constants::BACK_RANK;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl Board {
    /// A board with no pieces on it
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(*kind, Color::Black));
            board.squares[1][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][file] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    /// Build a board from `(square, piece)` placements; later entries win
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (square, piece) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank as usize][square.file as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank as usize][square.file as usize] = piece;
    }

    /// Remove and return whatever stands on `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank as usize][square.file as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the piece on `square`, if any
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|p| p.color)
    }

    /// True if `square` holds a piece of the opposite color to `color`
    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.color_at(square).is_some_and(|c| c != color)
    }

    /// All occupied squares and their pieces, rank 0 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares belonging to `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Location of `color`'s King, or `None` once it has been captured
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    #[inline]
    pub fn has_king(&self, color: Color) -> bool {
        self.find_king(color).is_some()
    }

    /// Rows of the grid, rank 0 first
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }
}

impl fmt::Display for Board {
    /// Plain-text diagram: `PNBRQK` for White, lowercase for Black, `.` for empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f, "  +-----------------+")?;
        for (rank, row) in self.squares.iter().enumerate() {
            write!(f, "{} |", 8 - rank)?;
            for cell in row {
                let c = cell.map(Piece::to_char).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "  +-----------------+")
    }
}
