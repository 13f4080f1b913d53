//! Minimax with alpha-beta pruning for Gomoku.
//!
//! White is the maximizing side. The search works on the caller's board in
//! place: every hypothetical stone is removed again before the frame that
//! placed it returns, so the board is identical before and after a call and
//! no board is ever cloned.

use crate::engine::line_eval::LineEvaluator;
use crate::engine::move_list::SquareList;
use crate::engine::{Evaluator, SearchStats};
use crate::logic::gomoku::{GomokuBoard, Stone, CENTER};
use crate::logic::grid::Square;

const INF: i32 = 1_000_000_000;

/// Empty cells touching at least one stone; the center alone on an empty
/// board.
#[must_use]
pub fn candidate_moves(board: &GomokuBoard) -> SquareList {
    let mut moves = SquareList::new();
    for sq in GomokuBoard::squares() {
        if board.is_empty(sq) && board.has_neighbor(sq) {
            moves.push(sq);
        }
    }
    if moves.is_empty() && board.is_empty(CENTER) {
        moves.push(CENTER);
    }
    moves
}

const fn stone_for(maximizing: bool) -> Stone {
    if maximizing {
        Stone::White
    } else {
        Stone::Black
    }
}

pub struct GomokuSearch {
    evaluator: LineEvaluator,
    depth: u8,
    nodes_searched: u32,
}

impl GomokuSearch {
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self {
            evaluator: LineEvaluator,
            depth,
            nodes_searched: 0,
        }
    }

    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        SearchStats {
            depth: self.depth,
            nodes: self.nodes_searched,
        }
    }

    /// Best White reply and its score. Each candidate is scored by one
    /// full-window search from Black's side one ply shallower; the first
    /// candidate wins ties.
    pub fn best_move(&mut self, board: &mut GomokuBoard) -> Option<(Square, i32)> {
        self.nodes_searched = 0;
        let child_depth = self.depth.saturating_sub(1);

        let mut best: Option<(Square, i32)> = None;
        for &sq in &candidate_moves(board) {
            board.place(sq, Stone::White);
            let score = self.alpha_beta(board, child_depth, -INF, INF, false);
            board.remove(sq);

            if best.is_none_or(|(_, s)| score > s) {
                best = Some((sq, score));
            }
        }

        if let Some((sq, score)) = best {
            tracing::debug!(depth = self.depth, nodes = self.nodes_searched, score, %sq, "gomoku search finished");
        }
        best
    }

    pub fn alpha_beta(
        &mut self,
        board: &mut GomokuBoard,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = candidate_moves(board);
        if moves.is_empty() {
            return self.evaluator.evaluate(board);
        }

        let stone = stone_for(maximizing);
        if maximizing {
            let mut max_score = -INF;
            for &sq in &moves {
                board.place(sq, stone);
                let score = self.alpha_beta(board, depth - 1, alpha, beta, false);
                board.remove(sq);
                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = INF;
            for &sq in &moves {
                board.place(sq, stone);
                let score = self.alpha_beta(board, depth - 1, alpha, beta, true);
                board.remove(sq);
                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}

/// Plain minimax without pruning, same move generator and leaf heuristic.
/// Reference for checking that pruning never changes a value.
pub fn minimax(board: &mut GomokuBoard, evaluator: &impl Evaluator<GomokuBoard>, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 {
        return evaluator.evaluate(board);
    }

    let moves = candidate_moves(board);
    if moves.is_empty() {
        return evaluator.evaluate(board);
    }

    let stone = stone_for(maximizing);
    let mut best = if maximizing { -INF } else { INF };
    for &sq in &moves {
        board.place(sq, stone);
        let score = minimax(board, evaluator, depth - 1, !maximizing);
        board.remove(sq);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}
