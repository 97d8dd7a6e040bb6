//! Move execution, simulation and validation
//!
//! There are two ways to commit a move and one way to try it:
//!
//! - [`execute_move`] mutates the board and emits a notification for captures and
//!   promotions (the live game path)
//! - [`apply_move_silent`] mutates the board with no notifications (record replay)
//! - [`simulate_move`] returns a modified copy and leaves the input untouched (legality
//!   filtering, checkmate search, AI retry)
//!
//! None of them check legality. Call [`validate_move`] first; it never mutates.

use tracing::info;

use crate::board::Board;
use crate::check::is_in_check;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::generate_pseudo_legal_moves;
use crate::types::*;

/// What a committed move did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffect {
    /// The piece that moved, as it stood on the origin square
    pub piece: Piece,
    /// Piece removed from the destination square, if any
    pub captured: Option<Piece>,
    /// Kind the moving pawn became, if the move was a promotion
    pub promoted_to: Option<PieceKind>,
}

/// Relocate a piece without any notification
///
/// Returns `None` and leaves the board untouched when the origin square is empty.
/// A pawn reaching its promotion rank becomes `mv.promotion`, or a Queen if none
/// was supplied.
pub fn apply_move_silent(board: &mut Board, mv: Move) -> Option<MoveEffect> {
    let piece = board.get(mv.from)?;
    let captured = board.get(mv.to);

    let promoted_to = if piece.kind == PieceKind::Pawn && mv.to.rank == piece.color.promotion_rank()
    {
        Some(mv.promotion.unwrap_or(PieceKind::Queen))
    } else {
        None
    };

    let placed = match promoted_to {
        Some(kind) => Piece::new(kind, piece.color),
        None => piece,
    };

    board.set(mv.to, Some(placed));
    board.set(mv.from, None);

    Some(MoveEffect {
        piece,
        captured,
        promoted_to,
    })
}

/// Relocate a piece and announce captures and promotions
pub fn execute_move(board: &mut Board, mv: Move) -> Option<MoveEffect> {
    let effect = apply_move_silent(board, mv)?;

    if let Some(captured) = effect.captured {
        info!("[MOVE] {} captured {} on {}", effect.piece, captured, mv.to);
    }
    if let Some(kind) = effect.promoted_to {
        info!(
            "[MOVE] {} pawn promoted to {} on {}",
            effect.piece.color,
            kind.letter(),
            mv.to
        );
    }

    Some(effect)
}

/// Apply a move to a copy of the board
///
/// Simulation always auto-promotes to a Queen, whatever the move asks for.
pub fn simulate_move(board: &Board, mv: Move) -> Board {
    let mut copy = *board;
    apply_move_silent(
        &mut copy,
        Move {
            promotion: None,
            ..mv
        },
    );
    copy
}

/// Check a move for `color` without touching the board
///
/// Validates, in order:
/// - the origin holds a piece
/// - the piece belongs to `color`
/// - the destination is produced by the move generator
/// - any explicit promotion piece is Q, R, B or N
/// - the move does not leave `color`'s King in check
pub fn validate_move(board: &Board, mv: Move, color: Color) -> ChessEngineResult<()> {
    let piece = board
        .get(mv.from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.from })?;

    if piece.color != color {
        return Err(ChessEngineError::WrongPieceColor {
            square: mv.from,
            color,
        });
    }

    let reachable = generate_pseudo_legal_moves(board, mv.from)
        .iter()
        .any(|candidate| candidate.same_squares(&mv));
    if !reachable {
        return Err(ChessEngineError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    if let Some(kind) = mv.promotion {
        if !kind.is_promotion_target() {
            return Err(ChessEngineError::InvalidPromotion {
                letter: kind.letter(),
            });
        }
    }

    if is_in_check(&simulate_move(board, mv), color) {
        return Err(ChessEngineError::LeavesKingInCheck {
            from: mv.from,
            to: mv.to,
        });
    }

    Ok(())
}
