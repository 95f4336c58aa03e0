//! A game session: one board, its move history and the engine settings.

use pig_chess_core::{
    Board, ChessError, Color, Move, Result, SearchLimits, SearchResult, Undo, annotate_terminal,
    legal_moves, parse_move,
};
use tracing::{info, warn};

use crate::config::{EngineConfig, MAX_LEVEL};
use crate::eval::{Evaluator, MATE_SCORE};
use crate::search;

/// One applied ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub undo: Undo,
    /// Position key after the move.
    pub key: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Repetition,
    InsufficientMaterial,
    FiftyMoves,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Search depth for a bot level, never below 1.
pub fn level_to_depth(level: u8) -> u8 {
    let level = i32::from(level.min(MAX_LEVEL));
    (level * 3 / 2 - 2).max(1) as u8
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<HistoryEntry>,
    start_key: u64,
    config: EngineConfig,
    evaluator: Evaluator,
    eval_count: u64,
}

impl Game {
    /// Start a game from `fen`, or from the standard position.
    pub fn new(fen: Option<&str>) -> Result<Self> {
        Self::with_config(fen, EngineConfig::default())
    }

    pub fn with_config(fen: Option<&str>, config: EngineConfig) -> Result<Self> {
        let board = Board::initialize(fen)?;
        info!(fen = %board.to_fen(), "new game");
        Ok(Self {
            start_key: board.position_hash(),
            evaluator: Evaluator::new(config.positional),
            board,
            history: Vec::new(),
            config,
            eval_count: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Static evaluations performed by searches and `evaluate_position`.
    pub fn eval_count(&self) -> u64 {
        self.eval_count
    }

    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    /// Apply a move given in coordinate notation. On error the game is
    /// unchanged.
    pub fn make_move(&mut self, text: &str) -> Result<Move> {
        match parse_move(&self.board, text) {
            Ok(mv) => Ok(self.commit(mv)),
            Err(e) => {
                warn!(text, error = %e, "move rejected");
                Err(e)
            }
        }
    }

    /// `mv` must be legal in the current position.
    fn commit(&mut self, mut mv: Move) -> Move {
        annotate_terminal(&mut self.board, &mut mv);
        let undo = self.board.make_move(mv);
        let key = self.board.position_hash();
        self.history.push(HistoryEntry { mv, undo, key });
        info!(mv = %mv, ply = self.history.len(), "move played");
        mv
    }

    /// Undo the last ply.
    pub fn takeback(&mut self) -> Result<Move> {
        let entry = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        self.board.unmake_move(entry.mv, entry.undo);
        info!(mv = %entry.mv, ply = self.history.len(), "move taken back");
        Ok(entry.mv)
    }

    /// Undo the last move of each side, so the same side is to move again.
    /// With only one ply played, that ply is undone.
    pub fn takeback_pair(&mut self) -> Result<()> {
        self.takeback()?;
        if !self.history.is_empty() {
            self.takeback()?;
        }
        Ok(())
    }

    /// Best move at `depth` without playing it.
    pub fn find_best_move(&mut self, depth: u8) -> Result<Option<Move>> {
        let result = self.search(self.config.limits(depth))?;
        Ok(result.best_move)
    }

    pub fn search(&mut self, limits: SearchLimits) -> Result<SearchResult> {
        let result = search::search(&self.board, &limits, &self.evaluator)?;
        self.eval_count += result.evals;
        Ok(result)
    }

    /// Static score for the side to move. Mated positions score
    /// `-MATE_SCORE`; stalemates and dead positions score 0.
    pub fn evaluate_position(&mut self) -> i32 {
        if self.legal_moves().is_empty() {
            return if self.is_in_check() { -MATE_SCORE } else { 0 };
        }
        if self.is_draw_by_insufficient_material() {
            return 0;
        }
        self.eval_count += 1;
        self.evaluator.evaluate(&self.board)
    }

    pub fn is_in_check(&self) -> bool {
        self.board.in_check(self.board.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// The current position has occurred at least three times, counting the
    /// starting position.
    pub fn is_draw_by_repetition(&self) -> bool {
        let key = self.board.position_hash();
        let seen = std::iter::once(self.start_key)
            .chain(self.history.iter().map(|e| e.key))
            .filter(|&k| k == key)
            .count();
        seen >= 3
    }

    pub fn is_draw_by_insufficient_material(&self) -> bool {
        self.board.is_insufficient_material()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.is_fifty_move_draw()
    }

    /// Mate and stalemate take precedence over the draw rules.
    pub fn status(&self) -> GameStatus {
        if self.legal_moves().is_empty() {
            return if self.is_in_check() {
                GameStatus::Checkmate {
                    winner: self.board.side_to_move.other(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_draw_by_repetition() {
            GameStatus::Repetition
        } else if self.is_draw_by_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else if self.is_fifty_move_draw() {
            GameStatus::FiftyMoves
        } else {
            GameStatus::InProgress
        }
    }

    pub fn level(&self, color: Color) -> u8 {
        match color {
            Color::White => self.config.white_level,
            Color::Black => self.config.black_level,
        }
    }

    /// 0 hands the side to a human; levels above 10 are capped.
    pub fn set_level(&mut self, color: Color, level: u8) {
        let level = level.min(MAX_LEVEL);
        match color {
            Color::White => self.config.white_level = level,
            Color::Black => self.config.black_level = level,
        }
    }

    /// Search for the side to move at its level's depth and play the result.
    /// Returns `None` when there is nothing to play.
    pub fn bot_move(&mut self) -> Result<Option<Move>> {
        self.bot_move_at_level(0)
    }

    /// Like [`Game::bot_move`], but a nonzero `level` replaces the side's
    /// configured level for this move.
    pub fn bot_move_at_level(&mut self, level: u8) -> Result<Option<Move>> {
        let level = match level {
            0 => self.level(self.board.side_to_move),
            l => l.min(MAX_LEVEL),
        };
        let depth = match level {
            0 => self.config.default_depth,
            l => level_to_depth(l),
        };
        let result = self.search(self.config.limits(depth))?;
        Ok(result.best_move.map(|mv| self.commit(mv)))
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
