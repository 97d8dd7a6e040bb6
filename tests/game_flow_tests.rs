//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation between a human and the AI
//! - Game end, records and rating
//! - Learning from saved games

use adaptive_chess::game::ai::{AIDifficulty, GameMode};
use adaptive_chess::game::memory::{GameRecord, MemoryTable};
use adaptive_chess::game::rating::{RatingTracker, DEFAULT_RATING};
use adaptive_chess::game::resources::{GameOverReason, GameOutcome, MatchResult};
use adaptive_chess::game::{GameSession, TurnStart};
use chess_engine::{notation, position_key, Board, Color};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Play until the game ends; the human side always plays its first legal move
fn play_out(session: &mut GameSession, rng: &mut StdRng, max_plies: usize) {
    for _ in 0..max_plies {
        match session.begin_turn() {
            TurnStart::Over(_) => return,
            TurnStart::Continue { .. } => {}
        }
        if session.is_ai_turn() {
            session.play_ai_turn(rng).unwrap();
        } else {
            let mv = chess_engine::check::legal_moves(session.board(), session.to_move())
                .into_iter()
                .next();
            match mv {
                Some(mv) => {
                    session.submit_move(&mv.to_string(), None).unwrap();
                }
                None => {
                    session.abandon();
                    return;
                }
            }
        }
    }
    session.abandon();
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_human_and_ai_alternate() {
    //! Human as White, Easy AI as Black: colors strictly alternate in the history
    let mut session = GameSession::new(GameMode::vs_ai(Color::White), AIDifficulty::Easy);
    let mut rng = StdRng::seed_from_u64(42);

    session.submit_move("e2e4", None).unwrap();
    assert!(session.is_ai_turn());
    session.begin_turn();
    session.play_ai_turn(&mut rng).unwrap();
    assert_eq!(session.to_move(), Color::White);

    let movers: Vec<Color> = session.history().iter().map(|m| m.piece.color).collect();
    assert_eq!(movers, vec![Color::White, Color::Black]);
}

#[test]
fn test_history_keys_replay_to_board() {
    //! Every recorded key is the position before its move
    let mut session = GameSession::new(GameMode::TwoPlayer, AIDifficulty::Medium);
    for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"] {
        session.submit_move(mv, None).unwrap();
    }

    let mut board = Board::initial();
    let mut color = Color::White;
    for entry in session.history().iter() {
        assert_eq!(entry.key, position_key::encode(&board, color));
        chess_engine::api::execute_move(&mut board, entry.mv);
        color = color.opponent();
    }
    assert_eq!(&board, session.board());
}

// ============================================================================
// Game End Tests
// ============================================================================

#[test]
fn test_fools_mate_full_flow() {
    //! Human as White walks into Fool's mate; record and rating follow
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::new(GameMode::TwoPlayer, AIDifficulty::Easy);
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        assert!(matches!(session.begin_turn(), TurnStart::Continue { .. }));
        session.submit_move(mv, None).unwrap();
    }

    assert_eq!(
        session.begin_turn(),
        TurnStart::Over(GameOverReason::Checkmate {
            winner: Color::Black
        })
    );

    let record = session.record().unwrap();
    assert_eq!(record.players, "Two Player");
    assert_eq!(record.difficulty, None);
    assert_eq!(record.outcome(), GameOutcome::BlackWins);

    let path = record.write_to_dir(dir.path()).unwrap();
    let loaded = GameRecord::read(&path).unwrap();
    assert_eq!(loaded, record);

    // Two-player games never touch the rating
    assert_eq!(session.rating_result(), None);
}

#[test]
fn test_rated_game_updates_rating() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = RatingTracker::new(dir.path().join("rating.txt"));

    let mut session = GameSession::new(GameMode::vs_ai(Color::Black), AIDifficulty::Hard);
    let mut rng = StdRng::seed_from_u64(5);
    play_out(&mut session, &mut rng, 400);

    let reason = session.game_over().unwrap();
    match session.rating_result() {
        Some((result, difficulty)) => {
            assert_eq!(difficulty, AIDifficulty::Hard);
            assert_eq!(result, reason.outcome().result_for(Color::Black));
            let updated = tracker.update(result, difficulty).unwrap();
            let expected = match result {
                MatchResult::Win => DEFAULT_RATING + 30,
                MatchResult::Loss => DEFAULT_RATING - 30,
                MatchResult::Draw => DEFAULT_RATING,
            };
            assert_eq!(updated, expected);
            assert_eq!(tracker.load(), expected);
        }
        None => assert_eq!(reason, GameOverReason::Abandoned),
    }
}

#[test]
fn test_rating_never_negative() {
    //! Repeated Hard losses bottom out at zero
    let dir = tempfile::tempdir().unwrap();
    let tracker = RatingTracker::new(dir.path().join("nested").join("rating.txt"));
    for _ in 0..50 {
        tracker.update(MatchResult::Loss, AIDifficulty::Hard).unwrap();
    }
    assert_eq!(tracker.load(), 0);
    assert_eq!(tracker.update(MatchResult::Win, AIDifficulty::Easy).unwrap(), 10);
}

// ============================================================================
// Learning Tests
// ============================================================================

#[test]
fn test_saved_games_teach_the_hard_ai() {
    //! A winning line saved to disk is replayed by the Hard AI from the same position
    let dir = tempfile::tempdir().unwrap();

    // Black wins twice after 1. f3 with 1... e5
    let mut session = GameSession::new(GameMode::TwoPlayer, AIDifficulty::Easy);
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        session.submit_move(mv, None).unwrap();
    }
    session.begin_turn();
    let record = session.record().unwrap();
    record.write_to_dir(dir.path()).unwrap();
    record.write_to_dir(dir.path()).unwrap();

    let memory = MemoryTable::build_from_dir(dir.path());
    assert_eq!(memory.len(), 4);
    assert_eq!(memory.total_observations(), 8);

    let mut board = Board::initial();
    chess_engine::api::execute_move(&mut board, notation::parse_move("f2f3").unwrap());
    let mut vs_ai = GameSession::from_position(
        board,
        Color::Black,
        GameMode::vs_ai(Color::White),
        AIDifficulty::Hard,
    )
    .with_memory(memory);

    let mut rng = StdRng::seed_from_u64(9);
    let chosen = vs_ai.play_ai_turn(&mut rng).unwrap().unwrap();
    assert_eq!(chosen, notation::parse_move("e7e5").unwrap());
}

#[test]
fn test_memory_is_order_independent() {
    //! Merging per-game tables in any order gives the same table
    let start = position_key::encode(&Board::initial(), Color::White);
    let texts = [
        ("Two Player", "N/A", "White wins by checkmate", "e2e4"),
        ("Player vs AI", "Hard", "Black wins by checkmate", "e2e4"),
        ("Player vs AI", "Easy", "Draw (both kings captured)", "d2d4"),
    ]
    .map(|(players, difficulty, result, mv)| {
        format!(
            "Players: {players}\nDifficulty: {difficulty}\nResult: {result}\nMove:{start}:{mv}\n"
        )
    });

    let source = std::path::Path::new("inline.txt");
    let records: Vec<GameRecord> = texts
        .iter()
        .map(|text| GameRecord::parse(text, source).unwrap())
        .collect();

    let mut forward = MemoryTable::new();
    for record in &records {
        forward.merge(MemoryTable::from_record(record));
    }
    let mut backward = MemoryTable::new();
    for record in records.iter().rev() {
        backward.merge(MemoryTable::from_record(record));
    }
    assert_eq!(forward, backward);

    let dir = tempfile::tempdir().unwrap();
    for (i, text) in texts.iter().enumerate() {
        std::fs::write(dir.path().join(format!("game_{i}.txt")), text).unwrap();
    }
    assert_eq!(MemoryTable::build_from_dir(dir.path()), forward);

    let e2e4 = forward.lookup(&start).unwrap()["e2e4"];
    assert_eq!((e2e4.wins, e2e4.losses, e2e4.draws), (1, 1, 0));
    let d2d4 = forward.lookup(&start).unwrap()["d2d4"];
    assert_eq!(d2d4.draws, 1);
}
