use crate::logic::grid::Square;
use crate::logic::gomoku::CELLS;

/// Stack-allocated candidate list for the Gomoku search; one per node, so
/// the recursion never touches the heap.
pub struct SquareList {
    squares: [Square; CELLS],
    count: usize,
}

impl Default for SquareList {
    fn default() -> Self {
        Self {
            squares: [Square::default(); CELLS],
            count: 0,
        }
    }
}

impl SquareList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sq: Square) {
        if let Some(slot) = self.squares.get_mut(self.count) {
            *slot = sq;
            self.count += 1;
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.get(0..self.count).unwrap_or(&[]).iter()
    }

    #[must_use]
    pub fn contains(&self, sq: &Square) -> bool {
        self.iter().any(|s| s == sq)
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
