use crate::engine::config::{GameConfig, OpponentKind};
use crate::engine::random::RandomMover;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::Searcher;
use crate::logic::board::{Board, Color, Piece};
use crate::logic::error::MoveError;
use crate::logic::grid::Square;
use crate::logic::history::History;
use crate::logic::rules::{legal_destinations, validate_move};
use crate::render::{Frame, Renderer, Snapshot};
use serde::{Deserialize, Serialize};

/// One applied Xiangqi move. Never edited after it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

/// Xiangqi controller: owns the board, the side to move and the history.
///
/// There is no terminal state. Generals can be captured like any other
/// piece and play simply continues.
pub struct GameState {
    board: Board,
    turn: Color,
    player: Color,
    history: History<Move>,
    searcher: Box<dyn Searcher>,
    renderer: Option<Box<dyn Renderer<Piece>>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let searcher: Box<dyn Searcher> = match config.opponent {
            OpponentKind::Random => Box::new(RandomMover::new(config.seed)),
            OpponentKind::AlphaBeta => Box::new(AlphaBetaEngine::new(config.xiangqi_depth)),
        };
        Self::with_searcher(config.player_color, searcher)
    }

    #[must_use]
    pub fn with_searcher(player: Color, searcher: Box<dyn Searcher>) -> Self {
        Self {
            board: Board::new(),
            turn: Color::Red,
            player,
            history: History::new(),
            searcher,
            renderer: None,
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer<Piece>>) -> Self {
        self.renderer = Some(renderer);
        self.redraw();
        self
    }

    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.turn = Color::Red;
        self.history.clear();
        tracing::info!(player = ?self.player, "new xiangqi game");
        self.redraw();
    }

    /// Replaces the position, e.g. to study an endgame. History is dropped.
    pub fn set_position(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.history.clear();
        self.redraw();
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub const fn player(&self) -> Color {
        self.player
    }

    #[must_use]
    pub const fn computer(&self) -> Color {
        self.player.opposite()
    }

    #[must_use]
    pub const fn history(&self) -> &History<Move> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Piece> {
        self.board.snapshot()
    }

    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from)
    }

    /// Applies a move for the side to move.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let piece = validate_move(&self.board, from, to, self.turn)?;

        let captured = self.board.make_move(from, to);
        let mv = Move {
            from,
            to,
            piece,
            captured,
        };
        self.history.push(mv);
        self.turn = self.turn.opposite();

        tracing::debug!(%from, %to, piece = ?piece.piece_type, captured = ?captured.map(|p| p.piece_type), "xiangqi move applied");
        self.redraw();
        Ok(mv)
    }

    /// Applies a move for the human side. Rejected while the computer is to move.
    pub fn apply_player_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        if self.turn != self.player {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(from, to)
    }

    /// Lets the configured searcher move for the computer side.
    pub fn opponent_move(&mut self) -> Result<Move, MoveError> {
        if self.turn != self.computer() {
            return Err(MoveError::NotYourTurn);
        }

        let Some(result) = self.searcher.search(&self.board, self.turn) else {
            tracing::warn!(color = ?self.turn, "opponent has no legal move");
            return Err(MoveError::NoLegalMove);
        };
        tracing::debug!(
            depth = result.stats.depth,
            nodes = result.stats.nodes,
            score = result.score,
            "opponent move selected"
        );
        self.apply_move(result.from, result.to)
    }

    /// Takes back the last move, whoever made it.
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        let mv = self.history.pop().ok_or(MoveError::NoHistoryToUndo)?;
        self.board.unmake_move(mv.from, mv.to, mv.captured);
        self.turn = self.turn.opposite();

        tracing::debug!(from = %mv.from, to = %mv.to, remaining = self.history.len(), "xiangqi move undone");
        self.redraw();
        Ok(mv)
    }

    fn status_message(&self) -> String {
        let side = match self.turn {
            Color::Red => "Red",
            Color::Black => "Black",
        };
        if self.turn == self.player {
            format!("{side} to move (you)")
        } else {
            format!("{side} to move (computer)")
        }
    }

    fn redraw(&mut self) {
        if self.renderer.is_none() {
            return;
        }
        let frame = Frame {
            snapshot: self.board.snapshot(),
            marked: self.history.last().map(|m| vec![m.from, m.to]).unwrap_or_default(),
            message: self.status_message(),
        };
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.draw(&frame);
        }
    }
}
