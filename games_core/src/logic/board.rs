use crate::logic::grid::{Grid, Square};
use crate::render::Snapshot;
use serde::{Deserialize, Serialize};

pub const FILES: usize = 9;
pub const RANKS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Rank step of a soldier moving forward.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// Black owns ranks 0-4, Red owns 5-9.
    #[must_use]
    pub const fn owns_rank(self, rank: usize) -> bool {
        match self {
            Self::Red => rank >= 5,
            Self::Black => rank <= 4,
        }
    }

    #[must_use]
    pub const fn in_palace(self, sq: Square) -> bool {
        if !matches!(sq.x, 3..=5) {
            return false;
        }
        match self {
            Self::Red => matches!(sq.y, 7..=9),
            Self::Black => sq.y <= 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceType {
    General,  // King
    Advisor,  // Guard
    Elephant, // Minister
    Horse,
    Rook, // Chariot
    Cannon,
    Soldier, // Pawn
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Board label. The two sides write the same role with different glyphs.
    #[must_use]
    pub const fn label(self) -> char {
        match (self.color, self.piece_type) {
            (_, PieceType::Rook) => '车',
            (_, PieceType::Horse) => '马',
            (_, PieceType::Cannon) => '炮',
            (Color::Red, PieceType::Elephant) => '相',
            (Color::Black, PieceType::Elephant) => '象',
            (Color::Red, PieceType::Advisor) => '士',
            (Color::Black, PieceType::Advisor) => '仕',
            (Color::Red, PieceType::General) => '帅',
            (Color::Black, PieceType::General) => '将',
            (Color::Red, PieceType::Soldier) => '兵',
            (Color::Black, PieceType::Soldier) => '卒',
        }
    }
}

const BACK_RANK: [PieceType; FILES] = [
    PieceType::Rook,
    PieceType::Horse,
    PieceType::Elephant,
    PieceType::Advisor,
    PieceType::General,
    PieceType::Advisor,
    PieceType::Elephant,
    PieceType::Horse,
    PieceType::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    // x = file 0..8, y = rank 0..9; Black sits on rank 0, Red on rank 9.
    grid: Grid<Piece, FILES, RANKS>,
}

impl Board {
    /// Board in the starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { grid: Grid::new() }
    }

    fn setup_initial_position(&mut self) {
        self.setup_pieces(Color::Black, 0, 2, 3);
        self.setup_pieces(Color::Red, 9, 7, 6);
    }

    fn setup_pieces(&mut self, color: Color, back_rank: usize, cannon_rank: usize, soldier_rank: usize) {
        for (file, &pt) in BACK_RANK.iter().enumerate() {
            self.add_piece(Square::new(file, back_rank), pt, color);
        }

        self.add_piece(Square::new(1, cannon_rank), PieceType::Cannon, color);
        self.add_piece(Square::new(7, cannon_rank), PieceType::Cannon, color);

        for file in (0..FILES).step_by(2) {
            self.add_piece(Square::new(file, soldier_rank), PieceType::Soldier, color);
        }
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    #[must_use]
    pub const fn contains(sq: Square) -> bool {
        Grid::<Piece, FILES, RANKS>::contains(sq)
    }

    #[must_use]
    pub fn step(sq: Square, dx: isize, dy: isize) -> Option<Square> {
        Grid::<Piece, FILES, RANKS>::step(sq, dx, dy)
    }

    #[must_use]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.grid.get(sq)
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid.is_empty(sq)
    }

    pub fn add_piece(&mut self, sq: Square, piece_type: PieceType, color: Color) {
        self.grid.set(sq, Some(Piece::new(piece_type, color)));
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.grid.take(sq)
    }

    /// Moves whatever stands on `from` to `to` and returns the captured piece.
    /// No legality check; callers validate first.
    pub fn make_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.grid.take(from);
        self.grid.set(to, mover)
    }

    /// Exact inverse of [`Board::make_move`].
    pub fn unmake_move(&mut self, from: Square, to: Square, captured: Option<Piece>) {
        let mover = self.grid.set(to, captured);
        self.grid.set(from, mover);
    }

    /// Pieces of one side, rank by rank.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.occupied().filter(move |(_, p)| p.color == color)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.occupied()
    }

    #[must_use]
    pub fn find_general(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.piece_type == PieceType::General)
            .map(|(sq, _)| sq)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Piece> {
        self.grid.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let board = Board::new();
        assert_eq!(board.all_pieces().count(), 32);
        assert_eq!(board.pieces(Color::Red).count(), 16);

        assert_eq!(board.find_general(Color::Black), Some(Square::new(4, 0)));
        assert_eq!(board.find_general(Color::Red), Some(Square::new(4, 9)));
        assert_eq!(
            board.get_piece(Square::new(7, 7)),
            Some(Piece::new(PieceType::Cannon, Color::Red))
        );
        assert_eq!(
            board.get_piece(Square::new(8, 3)),
            Some(Piece::new(PieceType::Soldier, Color::Black))
        );
    }

    #[test]
    fn test_make_unmake_restores() {
        let mut board = Board::new();
        let before = board.clone();
        let from = Square::new(1, 7);
        let to = Square::new(1, 0);
        let captured = board.make_move(from, to);
        assert_eq!(captured, Some(Piece::new(PieceType::Horse, Color::Black)));
        assert!(board.is_empty(from));
        board.unmake_move(from, to, captured);
        assert_eq!(board, before);
    }

    #[test]
    fn test_palace_and_river() {
        assert!(Color::Red.in_palace(Square::new(4, 8)));
        assert!(!Color::Red.in_palace(Square::new(4, 6)));
        assert!(Color::Black.in_palace(Square::new(3, 2)));
        assert!(!Color::Black.in_palace(Square::new(6, 1)));

        assert!(Color::Red.owns_rank(5));
        assert!(!Color::Red.owns_rank(4));
        assert!(Color::Black.owns_rank(4));
    }

    #[test]
    fn test_labels_differ_by_side() {
        let red = Piece::new(PieceType::Soldier, Color::Red);
        let black = Piece::new(PieceType::Soldier, Color::Black);
        assert_ne!(red.label(), black.label());
        assert_eq!(
            Piece::new(PieceType::Rook, Color::Red).label(),
            Piece::new(PieceType::Rook, Color::Black).label()
        );
    }
}
