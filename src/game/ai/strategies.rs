//! Move-selection strategies for each difficulty
//!
//! Self-check filtering differs per tier and is kept that way on purpose:
//!
//! - **Easy** filters out self-check only when the mover is already in check
//! - **Medium** and the **Hard** static fallback never filter
//!
//! The retry driver in [`super::player`] rejects self-checking picks afterwards, so
//! the looser tiers can waste attempts and lose a game they could have continued.
//!
//! Strategies take the random source as a parameter so tests can seed it.

use chess_engine::check::{is_in_check, leaves_king_in_check};
use chess_engine::constants::LOWEST_SCORE;
use chess_engine::evaluation::score_move;
use chess_engine::move_gen::all_pseudo_legal_moves;
use chess_engine::{notation, position_key, Board, Color, Move};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::resource::AIDifficulty;
use crate::game::memory::MemoryTable;

/// Dispatch to the strategy for `difficulty`
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    difficulty: AIDifficulty,
    memory: Option<&MemoryTable>,
    rng: &mut R,
) -> Option<Move> {
    match difficulty {
        AIDifficulty::Easy => select_random(board, color, rng),
        AIDifficulty::Medium => select_capture(board, color, rng),
        AIDifficulty::Hard => select_heuristic(board, color, memory, rng),
    }
}

/// Easy: a uniformly random move
pub fn select_random<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let mut moves = all_pseudo_legal_moves(board, color);
    if is_in_check(board, color) {
        moves.retain(|mv| !leaves_king_in_check(board, *mv, color));
    }
    moves.choose(rng).copied()
}

/// Medium: a random capture if one exists, otherwise any random move
pub fn select_capture<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let moves = all_pseudo_legal_moves(board, color);
    let captures: Vec<Move> = moves
        .iter()
        .copied()
        .filter(|mv| board.is_enemy(mv.to, color))
        .collect();

    if captures.is_empty() {
        moves.choose(rng).copied()
    } else {
        captures.choose(rng).copied()
    }
}

/// Hard: the learned move if memory knows this position, else static evaluation,
/// else Medium
pub fn select_heuristic<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    memory: Option<&MemoryTable>,
    rng: &mut R,
) -> Option<Move> {
    if let Some(memory) = memory {
        if let Some(mv) = select_learned(board, color, memory, rng) {
            debug!("[AI] Using learned move {}", mv);
            return Some(mv);
        }
    }

    select_static(board, color, &all_pseudo_legal_moves(board, color))
        .or_else(|| select_capture(board, color, rng))
}

/// Best recorded move for this position by `(wins - losses) / total`
///
/// Ties are broken by a fair coin flip as candidates are visited. A recorded move
/// that is not a pseudo-legal move in the current position is ignored.
pub fn select_learned<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    memory: &MemoryTable,
    rng: &mut R,
) -> Option<Move> {
    let key = position_key::encode(board, color);
    let stats = memory.lookup(&key)?;
    let available = all_pseudo_legal_moves(board, color);

    let mut best: Option<(Move, f64)> = None;
    for (notation, stat) in stats {
        if stat.total() == 0 {
            continue;
        }
        let Ok(parsed) = notation::parse_move(notation) else {
            continue;
        };
        let Some(mv) = available.iter().copied().find(|m| m.same_squares(&parsed)) else {
            continue;
        };

        let score = stat.score();
        best = match best {
            None => Some((mv, score)),
            Some((_, best_score)) if score > best_score => Some((mv, score)),
            Some((_, best_score)) if score == best_score && rng.random_bool(0.5) => {
                Some((mv, score))
            }
            keep => keep,
        };
    }

    best.map(|(mv, _)| mv)
}

/// Highest `capture value + advancement` among `moves`; the first one found wins ties
pub fn select_static(board: &Board, color: Color, moves: &[Move]) -> Option<Move> {
    let mut best_value = LOWEST_SCORE;
    let mut best_move = None;
    for mv in moves {
        let value = score_move(board, mv, color);
        if value > best_value {
            best_value = value;
            best_move = Some(*mv);
        }
    }
    best_move
}
