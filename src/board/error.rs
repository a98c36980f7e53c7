use thiserror::Error;

use super::coord::Coord;
use super::variant::Variant;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Coordinate ({col}, {row}) is outside the 3x3 board")]
    OutOfBounds { col: usize, row: usize },
    #[error("Cannot place a piece of size {incoming} on {coord}, it holds {occupant}")]
    CellOccupiedIllegally {
        coord: Coord,
        occupant: i8,
        incoming: i8,
    },
    #[error("Piece {index} is not available")]
    PieceUnavailable { index: usize },
    #[error("A piece size must be given in the stacking variant")]
    MissingPiece,
    #[error("Cell value {value} is not valid in the {variant} variant")]
    InvalidCellValue { value: i8, variant: Variant },
    #[error("Cannot undo on {coord}, no placement was recorded")]
    NothingToUndo { coord: Coord },
    #[error("Cannot undo on {found}, the most recent placement was on {expected}")]
    UndoOutOfOrder { expected: Coord, found: Coord },
    #[error("Invalid position notation `{notation}`: {reason}")]
    InvalidNotation {
        notation: String,
        reason: &'static str,
    },
}
