use crate::engine::eval_constants::{
    SOLDIER_ADVANCE, VAL_ADVISOR, VAL_CANNON, VAL_ELEPHANT, VAL_HORSE, VAL_KING, VAL_PAWN, VAL_ROOK,
};
use crate::engine::Evaluator;
use crate::logic::board::{Board, Color, Piece, PieceType, RANKS};
use crate::logic::grid::Square;

/// Material plus soldier advancement. Positive favours Red.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEvaluator;

impl Evaluator<Board> for SimpleEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0;

        for (sq, piece) in board.all_pieces() {
            let value = get_piece_value(piece, sq);
            if piece.color == Color::Red {
                score += value;
            } else {
                score -= value;
            }
        }

        score
    }
}

#[must_use]
pub const fn base_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::General => VAL_KING,
        PieceType::Advisor => VAL_ADVISOR,
        PieceType::Elephant => VAL_ELEPHANT,
        PieceType::Horse => VAL_HORSE,
        PieceType::Rook => VAL_ROOK,
        PieceType::Cannon => VAL_CANNON,
        PieceType::Soldier => VAL_PAWN,
    }
}

fn get_piece_value(piece: Piece, sq: Square) -> i32 {
    let mut value = base_value(piece.piece_type);
    if piece.piece_type == PieceType::Soldier {
        let advanced = match piece.color {
            Color::Red => RANKS - 1 - sq.y,
            Color::Black => sq.y,
        };
        value += SOLDIER_ADVANCE.get(advanced).copied().unwrap_or(0);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(SimpleEvaluator.evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_capture_shifts_score() {
        let mut board = Board::new();
        board.remove_piece(Square::new(0, 0));
        assert_eq!(SimpleEvaluator.evaluate(&board), VAL_ROOK);
    }

    #[test]
    fn test_crossed_soldier_is_worth_more() {
        let mut board = Board::empty();
        board.add_piece(Square::new(4, 6), PieceType::Soldier, Color::Red);
        let home = SimpleEvaluator.evaluate(&board);
        board.make_move(Square::new(4, 6), Square::new(4, 4));
        assert!(SimpleEvaluator.evaluate(&board) > home);
    }
}
