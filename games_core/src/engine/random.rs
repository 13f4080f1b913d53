use crate::engine::{SearchResult, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::grid::Square;
use crate::logic::rules::legal_destinations;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniform over movable pieces first, then uniform over that piece's
/// destinations. Not weighted by how many moves a piece has.
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng }
    }
}

impl Searcher for RandomMover {
    fn search(&mut self, board: &Board, turn: Color) -> Option<SearchResult> {
        let movable: Vec<(Square, Vec<Square>)> = board
            .pieces(turn)
            .filter_map(|(from, _)| {
                let targets = legal_destinations(board, from);
                (!targets.is_empty()).then_some((from, targets))
            })
            .collect();

        let (from, targets) = movable.choose(&mut self.rng)?;
        let to = *targets.choose(&mut self.rng)?;

        Some(SearchResult {
            from: *from,
            to,
            score: 0,
            stats: SearchStats {
                depth: 0,
                nodes: u32::try_from(movable.len()).unwrap_or(u32::MAX),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::PieceType;
    use crate::logic::rules::validate_move;

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::new();
        let mut mover = RandomMover::new(Some(3));
        for _ in 0..50 {
            let result = mover.search(&board, Color::Black).unwrap();
            assert!(validate_move(&board, result.from, result.to, Color::Black).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomMover::new(Some(11));
        let mut b = RandomMover::new(Some(11));
        for _ in 0..10 {
            assert_eq!(a.search(&board, Color::Red), b.search(&board, Color::Red));
        }
    }

    #[test]
    fn test_skips_pieces_without_moves() {
        let mut board = Board::empty();
        // Boxed-in general, free rook.
        board.add_piece(Square::new(4, 9), PieceType::General, Color::Red);
        board.add_piece(Square::new(3, 9), PieceType::Advisor, Color::Red);
        board.add_piece(Square::new(5, 9), PieceType::Advisor, Color::Red);
        board.add_piece(Square::new(4, 8), PieceType::Soldier, Color::Red);
        board.add_piece(Square::new(0, 0), PieceType::Rook, Color::Red);

        let mut mover = RandomMover::new(Some(5));
        for _ in 0..20 {
            let result = mover.search(&board, Color::Red).unwrap();
            assert_ne!(result.from, Square::new(4, 9));
        }
    }

    #[test]
    fn test_no_pieces_no_move() {
        let mut mover = RandomMover::new(Some(1));
        assert!(mover.search(&Board::empty(), Color::Black).is_none());
    }
}
