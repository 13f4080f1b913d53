use crate::logic::grid::{Grid, Square};
use crate::render::Snapshot;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 15;
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;
pub const CENTER: Square = Square::new(BOARD_SIZE / 2, BOARD_SIZE / 2);
pub const WIN_LENGTH: usize = 5;

/// Horizontal, vertical, diagonal, anti-diagonal.
pub const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GomokuBoard {
    grid: Grid<Stone, BOARD_SIZE, BOARD_SIZE>,
}

impl GomokuBoard {
    #[must_use]
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    #[must_use]
    pub const fn contains(sq: Square) -> bool {
        Grid::<Stone, BOARD_SIZE, BOARD_SIZE>::contains(sq)
    }

    #[must_use]
    pub fn step(sq: Square, dx: isize, dy: isize) -> Option<Square> {
        Grid::<Stone, BOARD_SIZE, BOARD_SIZE>::step(sq, dx, dy)
    }

    pub fn squares() -> impl Iterator<Item = Square> {
        Grid::<Stone, BOARD_SIZE, BOARD_SIZE>::squares()
    }

    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Stone> {
        self.grid.get(sq)
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid.is_empty(sq)
    }

    /// Puts `stone` on `sq` without any rule check.
    pub fn place(&mut self, sq: Square, stone: Stone) {
        self.grid.set(sq, Some(stone));
    }

    pub fn remove(&mut self, sq: Square) -> Option<Stone> {
        self.grid.take(sq)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn stones(&self) -> impl Iterator<Item = (Square, Stone)> + '_ {
        self.grid.occupied()
    }

    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.grid.count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// True when some 8-neighbour of `sq` holds a stone.
    #[must_use]
    pub fn has_neighbor(&self, sq: Square) -> bool {
        (-1..=1).any(|dx| {
            (-1..=1).any(|dy| {
                (dx, dy) != (0, 0) && Self::step(sq, dx, dy).is_some_and(|n| !self.is_empty(n))
            })
        })
    }

    /// Same-colored stones in a row starting next to `from` along
    /// `(dx, dy)`, capped at `WIN_LENGTH - 1`.
    #[must_use]
    pub fn count_direction(&self, from: Square, dx: isize, dy: isize, stone: Stone) -> usize {
        let mut count = 0;
        let mut current = from;
        while count < WIN_LENGTH - 1 {
            match Self::step(current, dx, dy) {
                Some(next) if self.get(next) == Some(stone) => {
                    count += 1;
                    current = next;
                }
                _ => break,
            }
        }
        count
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Stone> {
        self.grid.snapshot()
    }
}

/// Whether the stone on `last` completes five (or more) in a row.
#[must_use]
pub fn check_win(board: &GomokuBoard, last: Square) -> bool {
    let Some(stone) = board.get(last) else {
        return false;
    };

    AXES.iter().any(|&(dx, dy)| {
        let count = 1
            + board.count_direction(last, dx, dy, stone)
            + board.count_direction(last, -dx, -dy, stone);
        count >= WIN_LENGTH
    })
}
