use crate::engine::eval_constants::{LINE_FIVE, LINE_FOUR, LINE_THREE, LINE_TWO};
use crate::engine::Evaluator;
use crate::logic::gomoku::{GomokuBoard, Stone, AXES, WIN_LENGTH};
use crate::logic::grid::Square;

/// Gomoku heuristic: every stone scores the run it sits in along each axis.
///
/// Runs shared by several stones are counted once per stone. White is
/// positive, Black negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEvaluator;

impl Evaluator<GomokuBoard> for LineEvaluator {
    fn evaluate(&self, board: &GomokuBoard) -> i32 {
        board
            .stones()
            .map(|(sq, stone)| {
                AXES.iter()
                    .map(|&(dx, dy)| evaluate_direction(board, sq, dx, dy, stone))
                    .sum::<i32>()
            })
            .sum()
    }
}

/// Unsigned score of a run of `count` stones with `open_ends` empty ends.
#[must_use]
pub fn score_run(count: usize, open_ends: usize) -> i32 {
    if count >= WIN_LENGTH {
        return LINE_FIVE;
    }
    let table = match count {
        4 => &LINE_FOUR,
        3 => &LINE_THREE,
        2 => &LINE_TWO,
        _ => return 0,
    };
    table.get(open_ends).copied().unwrap_or(0)
}

fn evaluate_direction(board: &GomokuBoard, sq: Square, dx: isize, dy: isize, stone: Stone) -> i32 {
    let (forward, forward_open) = scan(board, sq, dx, dy, stone);
    let (backward, backward_open) = scan(board, sq, -dx, -dy, stone);
    let count = 1 + forward + backward;
    let open_ends = usize::from(forward_open) + usize::from(backward_open);

    let score = score_run(count, open_ends);
    match stone {
        Stone::White => score,
        Stone::Black => -score,
    }
}

/// Walks at most `WIN_LENGTH - 1` steps. Returns the run length and whether
/// the walk stopped on an empty cell.
fn scan(board: &GomokuBoard, from: Square, dx: isize, dy: isize, stone: Stone) -> (usize, bool) {
    let mut count = 0;
    let mut current = from;
    for _ in 1..WIN_LENGTH {
        let Some(next) = GomokuBoard::step(current, dx, dy) else {
            return (count, false);
        };
        match board.get(next) {
            Some(s) if s == stone => count += 1,
            Some(_) => return (count, false),
            None => return (count, true),
        }
        current = next;
    }
    (count, false)
}
