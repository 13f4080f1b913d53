pub mod board;
pub mod error;
pub mod game;
pub mod gomoku;
pub mod gomoku_game;
pub mod grid;
pub mod history;
pub mod rules;
