//! Game session: the turn state machine
//!
//! A [`GameSession`] owns the board, the side to move, the move history and the
//! statistics for one game. Each turn goes through these steps in order:
//!
//! 1. [`GameSession::begin_turn`] runs the terminal tests (king capture, then
//!    checkmate of the side to move) and counts checks for both colors
//! 2. the move itself, either [`GameSession::play_ai_turn`] or
//!    [`GameSession::submit_move`]
//!
//! Turns alternate strictly. Every rejected human move leaves the board, the history
//! and the side to move exactly as they were.

use chess_engine::api::{self, GameStatus, MoveEffect};
use chess_engine::check::{is_in_check, legal_moves};
use chess_engine::move_gen::{all_pseudo_legal_moves, generate_pseudo_legal_moves};
use chess_engine::{notation, position_key, Board, ChessEngineError, Color, Move, PieceKind, Square};
use rand::Rng;
use tracing::{debug, info};

use crate::game::ai::strategies::select_static;
use crate::game::ai::{AIDifficulty, AiPlayer, GameMode};
use crate::game::error::{GameError, GameResult};
use crate::game::memory::{GameRecord, MemoryTable, RecordedMove};
use crate::game::resources::{GameOverReason, GameStats, MatchResult, MoveHistory, MoveRecord};

/// What `begin_turn` found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStart {
    /// The game goes on; `in_check` lists every color whose King is attacked
    Continue { in_check: Vec<Color> },
    /// The game has ended
    Over(GameOverReason),
}

/// One game from the first move to the result
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    to_move: Color,
    mode: GameMode,
    ai: Option<AiPlayer>,
    history: MoveHistory,
    stats: GameStats,
    game_over: Option<GameOverReason>,
    /// Ply for which checks were already counted
    checks_counted_at: Option<usize>,
}

impl GameSession {
    /// Fresh game from the initial position, White to move
    ///
    /// `difficulty` is only used when `mode` includes an AI.
    pub fn new(mode: GameMode, difficulty: AIDifficulty) -> Self {
        Self::from_position(Board::initial(), Color::White, mode, difficulty)
    }

    /// Game starting from an arbitrary position
    pub fn from_position(
        board: Board,
        to_move: Color,
        mode: GameMode,
        difficulty: AIDifficulty,
    ) -> Self {
        let ai = mode.ai_color().map(|_| AiPlayer::new(difficulty));
        Self {
            board,
            to_move,
            mode,
            ai,
            history: MoveHistory::default(),
            stats: GameStats::default(),
            game_over: None,
            checks_counted_at: None,
        }
    }

    /// Give the AI learned statistics
    pub fn with_memory(mut self, memory: MemoryTable) -> Self {
        self.ai = self.ai.map(|ai| ai.with_memory(memory));
        self
    }

    pub fn with_ai_move_attempts(mut self, attempts: u32) -> Self {
        self.ai = self.ai.map(|ai| ai.with_attempts(attempts));
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// AI difficulty, `None` in two-player games
    pub fn difficulty(&self) -> Option<AIDifficulty> {
        self.ai.as_ref().map(|ai| ai.difficulty)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn game_over(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Is the side to move controlled by the AI?
    pub fn is_ai_turn(&self) -> bool {
        self.mode.is_ai_turn(self.to_move)
    }

    // ========================================================================
    // Turn flow
    // ========================================================================

    /// Terminal tests and check announcement for the side to move
    ///
    /// Checks are counted once per ply, however often this is called.
    pub fn begin_turn(&mut self) -> TurnStart {
        if let Some(reason) = self.game_over {
            return TurnStart::Over(reason);
        }

        match api::game_status(&self.board, self.to_move) {
            GameStatus::KingCaptured(outcome) => {
                return TurnStart::Over(self.finish(GameOverReason::KingCaptured(outcome)));
            }
            GameStatus::Checkmate { winner } => {
                return TurnStart::Over(self.finish(GameOverReason::Checkmate { winner }));
            }
            GameStatus::Check | GameStatus::Playing => {}
        }

        let in_check: Vec<Color> = [Color::White, Color::Black]
            .into_iter()
            .filter(|color| is_in_check(&self.board, *color))
            .collect();

        let ply = self.history.len();
        if self.checks_counted_at != Some(ply) {
            self.checks_counted_at = Some(ply);
            self.stats.checks += in_check.len() as u32;
            for color in &in_check {
                debug!("[GAME] {} king in check", color);
            }
        }

        TurnStart::Continue { in_check }
    }

    /// Let the AI move for the side to move
    ///
    /// Returns the move played, or `None` if the AI exhausted its attempts, which ends
    /// the game as a loss for the AI side.
    pub fn play_ai_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult<Option<Move>> {
        self.ensure_playing()?;
        let color = self.to_move;
        let ai = self
            .ai
            .as_ref()
            .filter(|_| self.mode.is_ai_turn(color))
            .ok_or(GameError::NotYourTurn { to_move: color })?;

        match ai.choose_move(&self.board, color, rng) {
            Some(mv) => {
                info!("[AI] {} plays {}", color, mv);
                self.commit(mv)?;
                Ok(Some(mv))
            }
            None => {
                info!("[AI] {} has no valid moves", color);
                self.finish(GameOverReason::NoValidMoves { loser: color });
                Ok(None)
            }
        }
    }

    /// Validate and play a human move given in coordinate notation
    ///
    /// `promotion` only matters for a pawn reaching the last rank; without it the
    /// pawn becomes a Queen.
    pub fn submit_move(
        &mut self,
        input: &str,
        promotion: Option<PieceKind>,
    ) -> GameResult<MoveEffect> {
        let mut mv = self.check_move(input)?;
        if let Some(kind) = promotion {
            mv = mv.with_promotion(kind);
            api::validate_move(&self.board, mv, self.to_move)?;
        }

        self.commit(mv)
    }

    /// Parse and validate a human move without playing it
    ///
    /// No promotion piece is involved, so a front end can reject an illegal pawn
    /// move before asking which piece it should become.
    pub fn check_move(&self, input: &str) -> GameResult<Move> {
        self.ensure_playing()?;
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn {
                to_move: self.to_move,
            });
        }

        let mv = notation::parse_move(input)?;
        api::validate_move(&self.board, mv, self.to_move)?;
        Ok(mv)
    }

    /// Would `input` be a pawn move onto its promotion rank?
    ///
    /// Lets a front end ask for the promotion piece before submitting.
    pub fn is_promotion(&self, input: &str) -> bool {
        let Ok(mv) = notation::parse_move(input) else {
            return false;
        };
        self.board.get(mv.from).is_some_and(|piece| {
            piece.kind == PieceKind::Pawn && mv.to.rank == piece.color.promotion_rank()
        })
    }

    /// The player gave up; the game ends without a winner
    pub fn abandon(&mut self) -> GameOverReason {
        match self.game_over {
            Some(reason) => reason,
            None => self.finish(GameOverReason::Abandoned),
        }
    }

    fn ensure_playing(&self) -> GameResult<()> {
        match self.game_over {
            Some(reason) => Err(GameError::GameOver {
                result: reason.result_text(),
            }),
            None => Ok(()),
        }
    }

    /// Execute an already validated move and pass the turn
    fn commit(&mut self, mv: Move) -> GameResult<MoveEffect> {
        let key = position_key::encode(&self.board, self.to_move);
        let effect = api::execute_move(&mut self.board, mv)
            .ok_or(ChessEngineError::NoPieceAtSquare { square: mv.from })?;

        self.stats.record_move(&effect);
        self.history.add_move(MoveRecord::new(key, mv, effect));
        self.to_move = self.to_move.opponent();
        Ok(effect)
    }

    fn finish(&mut self, reason: GameOverReason) -> GameOverReason {
        info!("[GAME] Game over: {}", reason);
        self.stats.finish();
        self.game_over = Some(reason);
        reason
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Pseudo-legal destinations for the side-to-move's piece on `square`
    pub fn legal_destinations(&self, square: &str) -> GameResult<Vec<Square>> {
        let square = notation::parse_square(square)?;
        let piece = self
            .board
            .get(square)
            .ok_or(ChessEngineError::NoPieceAtSquare { square })?;
        if piece.color != self.to_move {
            return Err(ChessEngineError::WrongPieceColor {
                square,
                color: self.to_move,
            }
            .into());
        }
        Ok(generate_pseudo_legal_moves(&self.board, square)
            .into_iter()
            .map(|mv| mv.to)
            .collect())
    }

    /// Every pseudo-legal move of the side to move made by pieces of `kind`
    pub fn moves_for_kind(&self, kind: PieceKind) -> Vec<Move> {
        all_pseudo_legal_moves(&self.board, self.to_move)
            .into_iter()
            .filter(|mv| self.board.get(mv.from).is_some_and(|p| p.kind == kind))
            .collect()
    }

    /// The static-evaluation choice among the legal moves of the side to move
    pub fn suggest_move(&self) -> Option<Move> {
        let moves = legal_moves(&self.board, self.to_move);
        select_static(&self.board, self.to_move, &moves)
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Game record for a finished game
    pub fn record(&self) -> Option<GameRecord> {
        let reason = self.game_over?;
        Some(GameRecord {
            players: self.mode.players_label().to_string(),
            difficulty: self.difficulty(),
            result: reason.result_text(),
            moves: self
                .history
                .iter()
                .map(|entry| RecordedMove {
                    key: entry.key.clone(),
                    notation: entry.notation(),
                })
                .collect(),
        })
    }

    /// Result and difficulty to feed the rating, for finished, rated games
    ///
    /// Abandoned games and two-player games are not rated.
    pub fn rating_result(&self) -> Option<(MatchResult, AIDifficulty)> {
        let reason = self.game_over?;
        if reason == GameOverReason::Abandoned || !self.mode.is_rated() {
            return None;
        }
        let human = self.mode.human_color()?;
        let difficulty = self.difficulty()?;
        Some((reason.outcome().result_for(human), difficulty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::api::BoardOutcome;
    use chess_engine::Piece;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        notation::parse_square(name).unwrap()
    }

    fn two_player() -> GameSession {
        GameSession::new(GameMode::TwoPlayer, AIDifficulty::Medium)
    }

    // ========================================================================
    // Turn Alternation Tests
    // ========================================================================

    #[test]
    fn test_white_moves_first_and_turns_alternate() {
        //! Strict White, Black, White alternation in a two-player game
        let mut session = two_player();
        assert_eq!(session.to_move(), Color::White);
        session.submit_move("e2e4", None).unwrap();
        assert_eq!(session.to_move(), Color::Black);
        session.submit_move("e7e5", None).unwrap();
        assert_eq!(session.to_move(), Color::White);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.stats().moves, 2);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        //! Every rejection class leaves board, turn and history untouched
        let mut session = two_player();
        let before = *session.board();

        for input in ["e2e5", "e7e5", "e4e5", "e2", "z9z9"] {
            assert!(session.submit_move(input, None).is_err(), "{input}");
        }
        assert_eq!(*session.board(), before);
        assert_eq!(session.to_move(), Color::White);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_human_cannot_move_for_the_ai() {
        let mut session = GameSession::new(GameMode::vs_ai(Color::Black), AIDifficulty::Easy);
        assert!(session.is_ai_turn());
        assert!(matches!(
            session.submit_move("e2e4", None),
            Err(GameError::NotYourTurn { .. })
        ));
    }

    #[test]
    fn test_ai_turn_plays_and_passes_turn() {
        let mut session = GameSession::new(GameMode::vs_ai(Color::Black), AIDifficulty::Medium);
        let mut rng = StdRng::seed_from_u64(11);
        let mv = session.play_ai_turn(&mut rng).unwrap().unwrap();
        assert_eq!(session.to_move(), Color::Black);
        assert_eq!(session.history().last_move().unwrap().mv, mv);
        assert!(!session.is_ai_turn());
    }

    // ========================================================================
    // Terminal State Tests
    // ========================================================================

    #[test]
    fn test_king_capture_ends_game() {
        //! Capturing the King is detected at the start of the next turn
        let board = Board::from_pieces([
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("e7"), Piece::new(PieceKind::Rook, Color::White)),
            (sq("e8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let mut session =
            GameSession::from_position(board, Color::White, GameMode::TwoPlayer, AIDifficulty::Easy);

        session.submit_move("e7e8", None).unwrap();
        assert_eq!(
            session.begin_turn(),
            TurnStart::Over(GameOverReason::KingCaptured(BoardOutcome::Winner(
                Color::White
            )))
        );
        assert!(matches!(
            session.submit_move("e8e7", None),
            Err(GameError::GameOver { .. })
        ));
    }

    #[test]
    fn test_checkmate_detected_and_reported() {
        let mut session = two_player();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            session.submit_move(mv, None).unwrap();
        }
        let reason = GameOverReason::Checkmate {
            winner: Color::Black,
        };
        assert_eq!(session.begin_turn(), TurnStart::Over(reason));
        assert_eq!(session.record().unwrap().result, "Black wins by checkmate");
    }

    #[test]
    fn test_checks_counted_once_per_ply() {
        let mut session = two_player();
        for mv in ["e2e4", "f7f6", "d1h5"] {
            session.submit_move(mv, None).unwrap();
        }
        let start = session.begin_turn();
        assert_eq!(
            start,
            TurnStart::Continue {
                in_check: vec![Color::Black]
            }
        );
        session.begin_turn();
        assert_eq!(session.stats().checks, 1);
    }

    #[test]
    fn test_ai_without_valid_moves_loses() {
        let board = Board::from_pieces([
            (sq("h1"), Piece::new(PieceKind::King, Color::White)),
            (sq("g1"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("g2"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("g3"), Piece::new(PieceKind::Pawn, Color::Black)),
            (sq("a8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let mut session = GameSession::from_position(
            board,
            Color::White,
            GameMode::vs_ai(Color::Black),
            AIDifficulty::Hard,
        );
        assert!(matches!(session.begin_turn(), TurnStart::Continue { .. }));
        assert_eq!(session.play_ai_turn(&mut StdRng::seed_from_u64(0)).unwrap(), None);
        assert_eq!(
            session.game_over(),
            Some(GameOverReason::NoValidMoves {
                loser: Color::White
            })
        );
        assert_eq!(
            session.rating_result(),
            Some((MatchResult::Win, AIDifficulty::Hard))
        );
    }

    #[test]
    fn test_abandoned_game_is_not_rated() {
        let mut session = GameSession::new(GameMode::vs_ai(Color::White), AIDifficulty::Hard);
        session.submit_move("d2d4", None).unwrap();
        assert_eq!(session.abandon(), GameOverReason::Abandoned);
        assert_eq!(session.rating_result(), None);
        let record = session.record().unwrap();
        assert_eq!(record.result, "Game abandoned");
        assert_eq!(record.moves.len(), 1);
    }

    // ========================================================================
    // Promotion Tests
    // ========================================================================

    #[test]
    fn test_human_promotion_choice() {
        let board = Board::from_pieces([
            (sq("b7"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let mut session =
            GameSession::from_position(board, Color::White, GameMode::TwoPlayer, AIDifficulty::Easy);

        assert!(session.is_promotion("b7b8"));
        assert!(!session.is_promotion("e1e2"));
        let effect = session.submit_move("b7b8", Some(PieceKind::Knight)).unwrap();
        assert_eq!(effect.promoted_to, Some(PieceKind::Knight));
        assert_eq!(session.stats().promotions, 1);
    }

    #[test]
    fn test_pinned_pawn_promotion_rejected_before_piece_choice() {
        //! The pawn on b7 shields its King from the rook, so b7b8 is refused up front
        let board = Board::from_pieces([
            (sq("a7"), Piece::new(PieceKind::King, Color::White)),
            (sq("b7"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("h7"), Piece::new(PieceKind::Rook, Color::Black)),
            (sq("h1"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let session =
            GameSession::from_position(board, Color::White, GameMode::TwoPlayer, AIDifficulty::Easy);

        assert!(session.is_promotion("b7b8"));
        assert!(matches!(
            session.check_move("b7b8"),
            Err(GameError::Engine(ChessEngineError::LeavesKingInCheck { .. }))
        ));
        assert_eq!(session.check_move("a7a8").unwrap(), notation::parse_move("a7a8").unwrap());
    }

    #[test]
    fn test_promotion_to_king_rejected() {
        let board = Board::from_pieces([
            (sq("b7"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let mut session =
            GameSession::from_position(board, Color::White, GameMode::TwoPlayer, AIDifficulty::Easy);
        assert!(session.submit_move("b7b8", Some(PieceKind::King)).is_err());
        assert_eq!(session.to_move(), Color::White);
    }

    // ========================================================================
    // Query Tests
    // ========================================================================

    #[test]
    fn test_legal_destinations_for_square() {
        let session = two_player();
        let mut names: Vec<String> = session
            .legal_destinations("g1")
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        names.sort();
        assert_eq!(names, vec!["f3", "h3"]);

        assert!(session.legal_destinations("e4").is_err());
        assert!(session.legal_destinations("e7").is_err());
    }

    #[test]
    fn test_moves_for_kind() {
        let session = two_player();
        assert_eq!(session.moves_for_kind(PieceKind::Knight).len(), 4);
        assert_eq!(session.moves_for_kind(PieceKind::Pawn).len(), 16);
        assert!(session.moves_for_kind(PieceKind::Queen).is_empty());
    }

    #[test]
    fn test_suggestion_is_legal() {
        //! The pinned rook's capture scores higher but is not suggested
        let board = Board::from_pieces([
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("e2"), Piece::new(PieceKind::Rook, Color::White)),
            (sq("a2"), Piece::new(PieceKind::Queen, Color::Black)),
            (sq("e8"), Piece::new(PieceKind::Rook, Color::Black)),
            (sq("a8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let session =
            GameSession::from_position(board, Color::White, GameMode::TwoPlayer, AIDifficulty::Easy);
        let suggestion = session.suggest_move().unwrap();
        assert_eq!(suggestion, notation::parse_move("e2e8").unwrap());
    }
}
