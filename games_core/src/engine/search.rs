use crate::engine::eval::{base_value, SimpleEvaluator};
use crate::engine::{Evaluator, SearchResult, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::grid::Square;
use crate::logic::rules::all_moves;

const INF: i32 = 1_000_000;

/// Fixed-depth negamax with alpha-beta over the Xiangqi move generator.
///
/// There is no check rule, so generals are simply very expensive material:
/// the engine will take one when it can and the game carries on.
pub struct AlphaBetaEngine {
    evaluator: SimpleEvaluator,
    depth: u8,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(depth: u8) -> Self {
        Self {
            evaluator: SimpleEvaluator,
            depth: depth.max(1),
            nodes_searched: 0,
        }
    }

    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    fn evaluate_for(&self, board: &Board, turn: Color) -> i32 {
        let score = self.evaluator.evaluate(board);
        match turn {
            Color::Red => score,
            Color::Black => -score,
        }
    }

    /// Captures first, most valuable victim first. Quiet moves keep
    /// generator order so the search stays deterministic.
    fn generate_moves(board: &Board, turn: Color) -> Vec<(Square, Square)> {
        let mut moves = all_moves(board, turn);
        moves.sort_by_key(|&(_, to)| {
            std::cmp::Reverse(board.get_piece(to).map_or(0, |p| base_value(p.piece_type)))
        });
        moves
    }

    fn alpha_beta(&mut self, board: &mut Board, mut alpha: i32, beta: i32, depth: u8, turn: Color) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return self.evaluate_for(board, turn);
        }

        let moves = Self::generate_moves(board, turn);
        if moves.is_empty() {
            return self.evaluate_for(board, turn);
        }

        let mut best_score = -INF;
        for (from, to) in moves {
            let captured = board.make_move(from, to);
            let score = -self.alpha_beta(board, -beta, -alpha, depth - 1, turn.opposite());
            board.unmake_move(from, to, captured);

            if score > best_score {
                best_score = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best_score
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, board: &Board, turn: Color) -> Option<SearchResult> {
        self.nodes_searched = 0;
        let mut board = board.clone();
        let board = &mut board;

        let mut best: Option<(Square, Square, i32)> = None;
        let mut alpha = -INF;

        for (from, to) in Self::generate_moves(board, turn) {
            let captured = board.make_move(from, to);
            let score = -self.alpha_beta(board, -INF, -alpha, self.depth - 1, turn.opposite());
            board.unmake_move(from, to, captured);

            if best.is_none_or(|(_, _, s)| score > s) {
                best = Some((from, to, score));
                alpha = alpha.max(score);
            }
        }

        let (from, to, score) = best?;
        let stats = SearchStats {
            depth: self.depth,
            nodes: self.nodes_searched,
        };
        tracing::debug!(depth = stats.depth, nodes = stats.nodes, score, %from, %to, "xiangqi search finished");

        Some(SearchResult {
            from,
            to,
            score,
            stats,
        })
    }
}
