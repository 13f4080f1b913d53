use std::fmt;

/// Reasons a controller declines an operation. State is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidSquare,
    EmptySquareSelected,
    IllegalDestination,
    NoHistoryToUndo,
    NotYourTurn,
    CellOccupied,
    GameOver,
    NoLegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidSquare => "square is outside the board",
            Self::EmptySquareSelected => "no piece on the selected square",
            Self::IllegalDestination => "piece cannot move there",
            Self::NoHistoryToUndo => "nothing to undo",
            Self::NotYourTurn => "not your turn",
            Self::CellOccupied => "cell is already occupied",
            Self::GameOver => "game is over",
            Self::NoLegalMove => "no legal move available",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}
