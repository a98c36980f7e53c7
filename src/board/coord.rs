use std::fmt;

use super::error::BoardError;

pub const BOARD_SIZE: u8 = 3;

/// A cell coordinate. Constructed only through `Coord::new`, so every `Coord`
/// in circulation is within the 3x3 grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// All nine cells in row-major order: rows outer, columns inner. This is
    /// the enumeration order the move generator and search rely on.
    pub const ALL: [Coord; 9] = [
        Coord { col: 0, row: 0 },
        Coord { col: 1, row: 0 },
        Coord { col: 2, row: 0 },
        Coord { col: 0, row: 1 },
        Coord { col: 1, row: 1 },
        Coord { col: 2, row: 1 },
        Coord { col: 0, row: 2 },
        Coord { col: 1, row: 2 },
        Coord { col: 2, row: 2 },
    ];

    pub fn new(col: usize, row: usize) -> Result<Self, BoardError> {
        if col >= BOARD_SIZE as usize || row >= BOARD_SIZE as usize {
            return Err(BoardError::OutOfBounds { col, row });
        }
        Ok(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE as usize + self.col()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
