use crate::logic::board::{Board, Color, Piece, PieceType};
use crate::logic::error::MoveError;
use crate::logic::grid::Square;

const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// (dx, dy, leg_dx, leg_dy): the leg is the orthogonal neighbour of the
// origin along the longer axis of the jump.
const HORSE_JUMPS: [(isize, isize, isize, isize); 8] = [
    (1, 2, 0, 1),
    (-1, 2, 0, 1),
    (1, -2, 0, -1),
    (-1, -2, 0, -1),
    (2, 1, 1, 0),
    (2, -1, 1, 0),
    (-2, 1, -1, 0),
    (-2, -1, -1, 0),
];

/// Every square the piece on `from` may move to. Empty when `from` is empty
/// or off the board.
#[must_use]
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::with_capacity(17);
    let Some(piece) = board.get_piece(from) else {
        return moves;
    };
    generate_piece_moves(board, from, piece, &mut moves);
    moves
}

/// All `(from, to)` pairs available to `color`.
#[must_use]
pub fn all_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut moves = Vec::with_capacity(64);
    let mut targets = Vec::with_capacity(17);
    for (from, piece) in board.pieces(color) {
        targets.clear();
        generate_piece_moves(board, from, piece, &mut targets);
        moves.extend(targets.iter().map(|&to| (from, to)));
    }
    moves
}

/// Checks a move for the side to move and returns the moving piece.
pub fn validate_move(board: &Board, from: Square, to: Square, turn: Color) -> Result<Piece, MoveError> {
    if !Board::contains(from) || !Board::contains(to) {
        return Err(MoveError::InvalidSquare);
    }

    let piece = board
        .get_piece(from)
        .ok_or(MoveError::EmptySquareSelected)?;

    if piece.color != turn {
        return Err(MoveError::NotYourTurn);
    }

    if !legal_destinations(board, from).contains(&to) {
        return Err(MoveError::IllegalDestination);
    }

    Ok(piece)
}

fn generate_piece_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Square>) {
    let color = piece.color;
    match piece.piece_type {
        PieceType::General => generate_palace_steps(board, from, color, &ORTHOGONAL, moves),
        PieceType::Advisor => generate_palace_steps(board, from, color, &DIAGONAL, moves),
        PieceType::Elephant => generate_elephant_moves(board, from, color, moves),
        PieceType::Horse => generate_horse_moves(board, from, color, moves),
        PieceType::Rook => generate_rook_moves(board, from, color, moves),
        PieceType::Cannon => generate_cannon_moves(board, from, color, moves),
        PieceType::Soldier => generate_soldier_moves(board, from, color, moves),
    }
}

/// Empty or enemy-occupied.
fn can_land(board: &Board, to: Square, color: Color) -> bool {
    board.get_piece(to).is_none_or(|p| p.color != color)
}

fn generate_palace_steps(
    board: &Board,
    from: Square,
    color: Color,
    steps: &[(isize, isize)],
    moves: &mut Vec<Square>,
) {
    for &(dx, dy) in steps {
        if let Some(to) = Board::step(from, dx, dy) {
            if color.in_palace(to) && can_land(board, to, color) {
                moves.push(to);
            }
        }
    }
}

fn generate_elephant_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &(dx, dy) in &DIAGONAL {
        let Some(to) = Board::step(from, dx * 2, dy * 2) else {
            continue;
        };
        let Some(eye) = Board::step(from, dx, dy) else {
            continue;
        };
        if board.is_empty(eye) && color.owns_rank(to.y) && can_land(board, to, color) {
            moves.push(to);
        }
    }
}

fn generate_horse_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &(dx, dy, leg_dx, leg_dy) in &HORSE_JUMPS {
        let Some(to) = Board::step(from, dx, dy) else {
            continue;
        };
        let Some(leg) = Board::step(from, leg_dx, leg_dy) else {
            continue;
        };
        if board.is_empty(leg) && can_land(board, to, color) {
            moves.push(to);
        }
    }
}

fn generate_rook_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &(dx, dy) in &ORTHOGONAL {
        let mut current = from;
        while let Some(to) = Board::step(current, dx, dy) {
            match board.get_piece(to) {
                None => moves.push(to),
                Some(p) => {
                    if p.color != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn generate_cannon_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &(dx, dy) in &ORTHOGONAL {
        let mut current = from;
        let mut screen_found = false;
        while let Some(to) = Board::step(current, dx, dy) {
            current = to;
            let Some(p) = board.get_piece(to) else {
                if !screen_found {
                    moves.push(to);
                }
                continue;
            };
            if !screen_found {
                screen_found = true;
                continue;
            }
            if p.color != color {
                moves.push(to);
            }
            break;
        }
    }
}

fn generate_soldier_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    if let Some(to) = Board::step(from, 0, color.forward()) {
        if can_land(board, to, color) {
            moves.push(to);
        }
    }

    // Sideways steps open up once the soldier stands on the enemy half.
    if !color.owns_rank(from.y) {
        for dx in [-1, 1] {
            if let Some(to) = Board::step(from, dx, 0) {
                if can_land(board, to, color) {
                    moves.push(to);
                }
            }
        }
    }
}
