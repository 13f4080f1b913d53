use crate::logic::board::{Board, Color};
use crate::logic::grid::Square;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod eval_constants;
pub mod gomoku_search;
pub mod line_eval;
pub mod move_list;
pub mod random;
pub mod search;

#[cfg(test)]
mod search_test;

/// A move picked by a [`Searcher`], with its score from the mover's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub from: Square,
    pub to: Square,
    pub score: i32,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
}

pub trait Evaluator<B> {
    fn evaluate(&self, board: &B) -> i32;
}

/// Chooses the computer's Xiangqi move. `None` when `turn` cannot move.
pub trait Searcher {
    fn search(&mut self, board: &Board, turn: Color) -> Option<SearchResult>;
}
