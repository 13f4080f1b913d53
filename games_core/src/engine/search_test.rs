use crate::engine::search::AlphaBetaEngine;
use crate::engine::Searcher;
use crate::logic::board::{Board, Color, PieceType};
use crate::logic::grid::Square;
use crate::logic::rules::validate_move;

fn sq(x: usize, y: usize) -> Square {
    Square::new(x, y)
}

/// Red rook eyeing a black soldier that the black rook defends.
fn defended_soldier_position() -> Board {
    let mut board = Board::empty();
    board.add_piece(sq(4, 9), PieceType::General, Color::Red);
    board.add_piece(sq(0, 9), PieceType::Rook, Color::Red);
    board.add_piece(sq(4, 0), PieceType::General, Color::Black);
    board.add_piece(sq(0, 0), PieceType::Rook, Color::Black);
    board.add_piece(sq(0, 5), PieceType::Soldier, Color::Black);
    board
}

#[test]
fn test_depth_one_grabs_material() {
    let board = defended_soldier_position();
    let mut engine = AlphaBetaEngine::new(1);
    let result = engine.search(&board, Color::Red).unwrap();
    assert_eq!((result.from, result.to), (sq(0, 9), sq(0, 5)));
    // Material is level once the soldier is gone.
    assert_eq!(result.score, 0);
}

#[test]
fn test_depth_two_sees_recapture() {
    let board = defended_soldier_position();
    let mut engine = AlphaBetaEngine::new(2);
    let result = engine.search(&board, Color::Red).unwrap();
    assert_ne!(result.to, sq(0, 5));
    // Keeping the rook costs nothing beyond the soldier already down.
    assert!(result.score > -500);
    assert_eq!(result.stats.depth, 2);
    assert!(result.stats.nodes > 0);
}

#[test]
fn test_takes_exposed_general() {
    let mut board = Board::empty();
    board.add_piece(sq(3, 9), PieceType::General, Color::Red);
    board.add_piece(sq(4, 6), PieceType::Rook, Color::Red);
    board.add_piece(sq(4, 0), PieceType::General, Color::Black);
    board.add_piece(sq(8, 0), PieceType::Rook, Color::Black);

    let mut engine = AlphaBetaEngine::new(3);
    let result = engine.search(&board, Color::Red).unwrap();
    assert_eq!(result.to, sq(4, 0));
}

#[test]
fn test_opening_search_is_legal_and_pure() {
    let board = Board::new();
    let before = board.clone();
    let mut engine = AlphaBetaEngine::new(2);

    let result = engine.search(&board, Color::Black).unwrap();
    assert!(validate_move(&board, result.from, result.to, Color::Black).is_ok());
    assert_eq!(board, before);

    // Deterministic for the same position.
    assert_eq!(engine.search(&board, Color::Black).map(|r| (r.from, r.to)), Some((result.from, result.to)));
}

#[test]
fn test_no_pieces_no_result() {
    let mut engine = AlphaBetaEngine::new(2);
    assert!(engine.search(&Board::empty(), Color::Red).is_none());
}
