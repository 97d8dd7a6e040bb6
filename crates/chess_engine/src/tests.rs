//! Test suite for the rules kernel
//!
//! Exercises pseudo-legal move generation, check and checkmate detection on concrete
//! positions, using coordinate notation so positions read like a chess diagram.
//!
//! # Test Organization
//!
//! - `test_pawn_*` - Pawn pushes, double pushes, captures
//! - `test_knight_*`, `test_king_*` - Fixed-offset pieces
//! - `test_rook_*`, `test_bishop_*`, `test_queen_*` - Ray casting
//! - `test_check_*` - Check detection
//! - `test_checkmate_*` - Checkmate detection and its properties

use crate::api::{apply_move_silent, simulate_move, validate_move};
use crate::board::Board;
use crate::check::*;
use crate::move_gen::*;
use crate::notation::{parse_move, parse_square};
use crate::types::*;

fn sq(name: &str) -> Square {
    parse_square(name).unwrap()
}

fn piece(kind: PieceKind, color: Color) -> Piece {
    Piece::new(kind, color)
}

/// Build a board from `("e4", 'P')` style placements
fn board_with(placements: &[(&str, char)]) -> Board {
    Board::from_pieces(
        placements
            .iter()
            .map(|(name, c)| (sq(name), Piece::from_char(*c).unwrap())),
    )
}

fn destinations(board: &Board, from: &str) -> Vec<String> {
    let mut names: Vec<String> = generate_pseudo_legal_moves(board, sq(from))
        .iter()
        .map(|mv| mv.to.to_string())
        .collect();
    names.sort();
    names
}

fn play(board: &mut Board, moves: &[&str]) {
    for notation in moves {
        apply_move_silent(board, parse_move(notation).unwrap()).unwrap();
    }
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_single_and_double_push_from_home() {
    //! A pawn on its home rank may step one or two squares forward
    let board = Board::initial();
    assert_eq!(destinations(&board, "e2"), vec!["e3", "e4"]);
    assert_eq!(destinations(&board, "d7"), vec!["d5", "d6"]);
}

#[test]
fn test_pawn_e2e4_legal_e2e5_illegal() {
    //! e2e4 passes validation from the initial position, e2e5 does not
    let board = Board::initial();
    assert!(validate_move(&board, parse_move("e2e4").unwrap(), Color::White).is_ok());
    assert!(validate_move(&board, parse_move("e2e5").unwrap(), Color::White).is_err());
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    //! A piece on the intermediate square blocks both pushes; one on the
    //! destination blocks only the double push
    let blocked = board_with(&[("e2", 'P'), ("e3", 'n')]);
    assert!(destinations(&blocked, "e2").is_empty());

    let half = board_with(&[("e2", 'P'), ("e4", 'n')]);
    assert_eq!(destinations(&half, "e2"), vec!["e3"]);
}

#[test]
fn test_pawn_no_double_push_off_home_rank() {
    //! Only the home rank allows the two-square advance
    let board = board_with(&[("e3", 'P'), ("c6", 'p')]);
    assert_eq!(destinations(&board, "e3"), vec!["e4"]);
    assert_eq!(destinations(&board, "c6"), vec!["c5"]);
}

#[test]
fn test_pawn_captures_only_diagonally_onto_enemies() {
    //! Diagonal steps need an opposing piece; own pieces and empty squares don't count
    let board = board_with(&[("d4", 'P'), ("c5", 'p'), ("e5", 'N'), ("d5", 'p')]);
    assert_eq!(destinations(&board, "d4"), vec!["c5"]);
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    //! Stepping off the board produces nothing rather than panicking
    let board = board_with(&[("a8", 'P'), ("h1", 'p')]);
    assert!(destinations(&board, "a8").is_empty());
    assert!(destinations(&board, "h1").is_empty());
}

// ============================================================================
// Knight and King Tests
// ============================================================================

#[test]
fn test_knight_center_has_eight_moves() {
    //! From d4 a knight reaches all eight L-shaped squares
    let board = board_with(&[("d4", 'N')]);
    assert_eq!(
        destinations(&board, "d4"),
        vec!["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]
    );
}

#[test]
fn test_knight_corner_and_own_pieces() {
    //! Off-board and own-occupied squares are filtered, enemies are capturable
    let board = board_with(&[("a1", 'N'), ("b3", 'P'), ("c2", 'p')]);
    assert_eq!(destinations(&board, "a1"), vec!["c2"]);
}

#[test]
fn test_knight_jumps_over_pieces() {
    //! The initial b1 knight is surrounded but still reaches a3 and c3
    let board = Board::initial();
    assert_eq!(destinations(&board, "b1"), vec!["a3", "c3"]);
}

#[test]
fn test_king_adjacent_squares() {
    //! A king steps one square in any direction; no castling
    let board = board_with(&[("e1", 'K'), ("d1", 'Q'), ("f2", 'p'), ("h1", 'R')]);
    assert_eq!(destinations(&board, "e1"), vec!["d2", "e2", "f1", "f2"]);
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_rook_rays_stop_at_pieces() {
    //! Own pieces stop the ray before, enemy pieces stop it on the capture
    let board = board_with(&[("d4", 'R'), ("d6", 'p'), ("b4", 'P')]);
    assert_eq!(
        destinations(&board, "d4"),
        vec!["c4", "d1", "d2", "d3", "d5", "d6", "e4", "f4", "g4", "h4"]
    );
}

#[test]
fn test_bishop_diagonals() {
    //! Bishops only travel diagonally
    let board = board_with(&[("c1", 'B'), ("e3", 'p')]);
    assert_eq!(destinations(&board, "c1"), vec!["a3", "b2", "d2", "e3"]);
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    //! A queen alone in the centre reaches 27 squares
    let board = board_with(&[("d4", 'Q')]);
    assert_eq!(generate_pseudo_legal_moves(&board, sq("d4")).len(), 27);
}

#[test]
fn test_sliders_blocked_in_initial_position() {
    //! Nothing but pawns and knights can move at the start
    let board = Board::initial();
    for from in ["a1", "c1", "d1", "e1", "f1", "h1"] {
        assert!(destinations(&board, from).is_empty(), "{from} should be blocked");
    }
    assert_eq!(all_pseudo_legal_moves(&board, Color::White).len(), 20);
    assert_eq!(all_pseudo_legal_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_empty_square_generates_nothing() {
    //! Asking for moves from an empty square is not an error
    assert!(generate_pseudo_legal_moves(&Board::initial(), sq("e4")).is_empty());
}

// ============================================================================
// Check Detection Tests
// ============================================================================

#[test]
fn test_check_by_rook_on_open_file() {
    //! A rook on the king's file with nothing between gives check
    let board = board_with(&[("e1", 'K'), ("e8", 'r'), ("a8", 'k')]);
    assert!(is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));
}

#[test]
fn test_check_blocked_by_interposed_piece() {
    //! Any piece between attacker and king removes the check
    let board = board_with(&[("e1", 'K'), ("e4", 'N'), ("e8", 'r'), ("a8", 'k')]);
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_check_by_pawn_diagonal() {
    //! A pawn attacks only forward diagonally
    let board = board_with(&[("e4", 'K'), ("d5", 'p'), ("a8", 'k')]);
    assert!(is_in_check(&board, Color::White));

    let behind = board_with(&[("e4", 'K'), ("d3", 'p'), ("a8", 'k')]);
    assert!(!is_in_check(&behind, Color::White));
}

#[test]
fn test_check_matches_opposing_move_destinations() {
    //! is_in_check agrees with a direct scan of opposing pseudo-legal destinations
    let mut board = Board::initial();
    play(&mut board, &["e2e4", "f7f6", "d1h5"]);
    let king = board.find_king(Color::Black).unwrap();
    let attacked = all_pseudo_legal_moves(&board, Color::White)
        .iter()
        .any(|mv| mv.to == king);
    assert_eq!(is_in_check(&board, Color::Black), attacked);
    assert!(attacked);
}

#[test]
fn test_check_without_king_is_false() {
    //! A side with no King is never reported in check
    let board = board_with(&[("e1", 'Q'), ("e8", 'r')]);
    assert!(!is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));
}

// ============================================================================
// Checkmate Detection Tests
// ============================================================================

#[test]
fn test_checkmate_fools_mate() {
    //! 1.f3 e5 2.g4 Qh4# is mate, and every White reply still leaves the king in check
    let mut board = Board::initial();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(is_in_check(&board, Color::White));
    assert!(is_checkmate(&board, Color::White));
    for mv in all_pseudo_legal_moves(&board, Color::White) {
        assert!(
            is_in_check(&simulate_move(&board, mv), Color::White),
            "{mv} should not escape check"
        );
    }
    assert!(legal_moves(&board, Color::White).is_empty());
}

#[test]
fn test_checkmate_back_rank() {
    //! Rook mate against a king hemmed in by its own pawns
    let board = board_with(&[
        ("g8", 'k'),
        ("f7", 'p'),
        ("g7", 'p'),
        ("h7", 'p'),
        ("a8", 'R'),
        ("g1", 'K'),
    ]);
    assert!(is_checkmate(&board, Color::Black));
}

#[test]
fn test_check_with_escape_is_not_checkmate() {
    //! In check with at least one escaping move: not mate, and the escape exists
    let board = board_with(&[("e1", 'K'), ("e8", 'r'), ("a8", 'k')]);
    assert!(is_in_check(&board, Color::White));
    assert!(!is_checkmate(&board, Color::White));
    assert!(all_pseudo_legal_moves(&board, Color::White)
        .into_iter()
        .any(|mv| !is_in_check(&simulate_move(&board, mv), Color::White)));
}

#[test]
fn test_capturing_the_checker_escapes() {
    //! Taking the checking piece is a valid escape
    let board = board_with(&[("h8", 'k'), ("g7", 'Q'), ("a1", 'K')]);
    assert!(is_in_check(&board, Color::Black));
    assert!(!is_checkmate(&board, Color::Black));
    let escapes = legal_moves(&board, Color::Black);
    assert_eq!(escapes, vec![parse_move("h8g7").unwrap()]);
}

#[test]
fn test_lone_kings_not_checkmate() {
    //! Two bare kings: neither side is in check, so neither is mated
    let board = board_with(&[("a8", 'k'), ("c6", 'K')]);
    assert!(!is_in_check(&board, Color::Black));
    assert!(!is_checkmate(&board, Color::Black));
    assert!(!is_checkmate(&board, Color::White));
}

#[test]
fn test_boxed_in_king_without_check_is_not_checkmate() {
    //! No safe king move but not in check: this rule set reports no mate
    let board = board_with(&[("a8", 'k'), ("b6", 'Q'), ("c1", 'K')]);
    assert!(!is_in_check(&board, Color::Black));
    assert!(legal_moves(&board, Color::Black).is_empty());
    assert!(!is_checkmate(&board, Color::Black));
}

#[test]
fn test_leaves_king_in_check_for_pinned_piece() {
    //! Moving a pinned bishop off the pin line exposes the king
    let board = board_with(&[("e1", 'K'), ("e2", 'B'), ("e8", 'q'), ("a8", 'k')]);
    assert!(leaves_king_in_check(
        &board,
        parse_move("e2d3").unwrap(),
        Color::White
    ));
    assert_eq!(
        board.get(sq("e2")),
        Some(piece(PieceKind::Bishop, Color::White)),
        "the check test must not mutate the board"
    );
}
