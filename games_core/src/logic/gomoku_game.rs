use crate::engine::config::GameConfig;
use crate::engine::gomoku_search::GomokuSearch;
use crate::logic::error::MoveError;
use crate::logic::gomoku::{check_win, GomokuBoard, Stone};
use crate::logic::grid::Square;
use crate::logic::history::History;
use crate::render::{Frame, Renderer, Snapshot};
use serde::{Deserialize, Serialize};

/// The human always plays Black and moves first; the engine plays White.
pub const PLAYER: Stone = Stone::Black;
pub const COMPUTER: Stone = Stone::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub square: Square,
    pub stone: Stone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won(Stone),
    Draw,
}

pub struct GomokuGame {
    board: GomokuBoard,
    turn: Stone,
    outcome: Option<Outcome>,
    history: History<Placement>,
    engine: GomokuSearch,
    renderer: Option<Box<dyn Renderer<Stone>>>,
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GomokuGame {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: GomokuBoard::new(),
            turn: PLAYER,
            outcome: None,
            history: History::new(),
            engine: GomokuSearch::new(config.gomoku_depth),
            renderer: None,
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer<Stone>>) -> Self {
        self.renderer = Some(renderer);
        self.redraw();
        self
    }

    pub fn new_game(&mut self) {
        self.board.clear();
        self.turn = PLAYER;
        self.outcome = None;
        self.history.clear();
        tracing::info!(depth = self.engine.depth(), "new gomoku game");
        self.redraw();
    }

    #[must_use]
    pub const fn board(&self) -> &GomokuBoard {
        &self.board
    }

    #[must_use]
    pub const fn turn(&self) -> Stone {
        self.turn
    }

    #[must_use]
    pub const fn history(&self) -> &History<Placement> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Placement> {
        self.history.last()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Stone> {
        self.board.snapshot()
    }

    #[must_use]
    pub const fn is_game_over(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Stone> {
        match self.outcome {
            Some(Outcome::Won(stone)) => Some(stone),
            _ => None,
        }
    }

    /// Places a stone for the side to move.
    pub fn place_stone(&mut self, square: Square) -> Result<Placement, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if !GomokuBoard::contains(square) {
            return Err(MoveError::InvalidSquare);
        }
        if !self.board.is_empty(square) {
            return Err(MoveError::CellOccupied);
        }

        let placement = Placement {
            square,
            stone: self.turn,
        };
        self.board.place(square, placement.stone);
        self.history.push(placement);

        if check_win(&self.board, square) {
            self.outcome = Some(Outcome::Won(placement.stone));
            tracing::info!(winner = ?placement.stone, moves = self.history.len(), "gomoku game won");
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
            tracing::info!(moves = self.history.len(), "gomoku game drawn");
        } else {
            self.turn = self.turn.opposite();
        }

        tracing::debug!(%square, stone = ?placement.stone, "stone placed");
        self.redraw();
        Ok(placement)
    }

    pub fn apply_player_move(&mut self, square: Square) -> Result<Placement, MoveError> {
        if self.outcome.is_none() && self.turn != PLAYER {
            return Err(MoveError::NotYourTurn);
        }
        self.place_stone(square)
    }

    /// Searches for White's reply and plays it.
    pub fn opponent_move(&mut self) -> Result<Placement, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.turn != COMPUTER {
            return Err(MoveError::NotYourTurn);
        }

        let (square, score) = self
            .engine
            .best_move(&mut self.board)
            .ok_or(MoveError::NoLegalMove)?;
        let stats = self.engine.stats();
        tracing::debug!(depth = stats.depth, nodes = stats.nodes, score, "gomoku reply selected");
        self.place_stone(square)
    }

    /// Removes the last stone, whoever placed it.
    pub fn undo(&mut self) -> Result<Placement, MoveError> {
        let placement = self.history.pop().ok_or(MoveError::NoHistoryToUndo)?;
        self.board.remove(placement.square);
        self.turn = placement.stone;
        self.outcome = None;

        tracing::debug!(square = %placement.square, remaining = self.history.len(), "stone removed");
        self.redraw();
        Ok(placement)
    }

    /// Rolls back to the player's previous turn: the computer's reply (if
    /// any) and the player's own stone.
    pub fn undo_turn(&mut self) -> Result<Vec<Placement>, MoveError> {
        let mut undone = vec![self.undo()?];
        while undone.last().is_some_and(|p| p.stone != PLAYER) {
            match self.undo() {
                Ok(p) => undone.push(p),
                Err(_) => break,
            }
        }
        Ok(undone)
    }

    fn status_message(&self) -> String {
        match self.outcome {
            Some(Outcome::Won(PLAYER)) => "Black wins".to_string(),
            Some(Outcome::Won(_)) => "White wins".to_string(),
            Some(Outcome::Draw) => "Draw".to_string(),
            None if self.turn == PLAYER => "Black to move (you)".to_string(),
            None => "White to move (computer)".to_string(),
        }
    }

    fn redraw(&mut self) {
        if self.renderer.is_none() {
            return;
        }
        let frame = Frame {
            snapshot: self.board.snapshot(),
            marked: self.history.last().map(|p| vec![p.square]).unwrap_or_default(),
            message: self.status_message(),
        };
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.draw(&frame);
        }
    }
}
