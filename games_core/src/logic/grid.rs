use crate::render::Snapshot;
use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` is the file (column), `y` the rank (row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    pub x: usize,
    pub y: usize,
}

impl Square {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shifts by `(dx, dy)`. Only the lower bound is checked here, the grid
    /// checks the upper one.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Fixed-size `W x H` grid of optional occupants, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T, const W: usize, const H: usize> {
    cells: [[Option<T>; W]; H],
}

impl<T: Copy, const W: usize, const H: usize> Default for Grid<T, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const W: usize, const H: usize> Grid<T, W, H> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;

    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; W]; H],
        }
    }

    #[must_use]
    pub const fn contains(sq: Square) -> bool {
        sq.x < W && sq.y < H
    }

    /// Neighbour of `sq` at `(dx, dy)`, if it is on the grid.
    #[must_use]
    pub fn step(sq: Square, dx: isize, dy: isize) -> Option<Square> {
        sq.offset(dx, dy).filter(|&to| Self::contains(to))
    }

    /// All squares, rank by rank.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..H).flat_map(|y| (0..W).map(move |x| Square::new(x, y)))
    }

    #[must_use]
    pub fn get(&self, sq: Square) -> Option<T> {
        self.cells.get(sq.y).and_then(|row| row.get(sq.x)).copied().flatten()
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Writes `value` into `sq` and returns the previous occupant.
    /// Off-grid squares are ignored.
    pub fn set(&mut self, sq: Square, value: Option<T>) -> Option<T> {
        self.cells
            .get_mut(sq.y)
            .and_then(|row| row.get_mut(sq.x))
            .and_then(|cell| std::mem::replace(cell, value))
    }

    pub fn take(&mut self, sq: Square) -> Option<T> {
        self.set(sq, None)
    }

    pub fn clear(&mut self) {
        self.cells = [[None; W]; H];
    }

    /// Occupied squares with their occupants, rank by rank.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|v| (Square::new(x, y), v)))
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            width: W,
            height: H,
            cells: self.cells.iter().flatten().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small = Grid<u8, 3, 2>;

    #[test]
    fn test_bounds_and_step() {
        assert!(Small::contains(Square::new(2, 1)));
        assert!(!Small::contains(Square::new(3, 0)));
        assert!(!Small::contains(Square::new(0, 2)));

        assert_eq!(Small::step(Square::new(0, 0), 1, 1), Some(Square::new(1, 1)));
        assert_eq!(Small::step(Square::new(0, 0), -1, 0), None);
        assert_eq!(Small::step(Square::new(2, 1), 1, 0), None);
    }

    #[test]
    fn test_set_take_and_snapshot() {
        let mut grid = Small::new();
        assert_eq!(grid.set(Square::new(1, 0), Some(7)), None);
        assert_eq!(grid.set(Square::new(1, 0), Some(8)), Some(7));
        assert_eq!(grid.set(Square::new(9, 9), Some(1)), None);
        assert_eq!(grid.count(), 1);

        let snap = grid.snapshot();
        assert_eq!(snap.cells.len(), 6);
        assert_eq!(snap.get(Square::new(1, 0)), Some(8));

        assert_eq!(grid.take(Square::new(1, 0)), Some(8));
        assert!(grid.is_empty(Square::new(1, 0)));
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Small::new();
        for sq in Small::squares() {
            grid.set(sq, Some(1));
        }
        assert!(grid.is_full());
        assert_eq!(grid.occupied().count(), 6);
        grid.clear();
        assert_eq!(grid.count(), 0);
    }
}
