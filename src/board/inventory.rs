use super::error::BoardError;

/// Piece sizes in the inventory's declared order. A piece's index into this
/// array is how moves refer to it.
pub const PIECE_SIZES: [i8; 5] = [1, 2, 3, 4, 5];

/// One player's reserve of stacking pieces. Exactly one piece of each size
/// exists; it is consumed on placement and only comes back through `restore`,
/// which the search uses to undo a placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Inventory {
    available: [bool; PIECE_SIZES.len()],
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            available: [true; PIECE_SIZES.len()],
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_flags(available: [bool; PIECE_SIZES.len()]) -> Self {
        Self { available }
    }

    pub fn flags(&self) -> [bool; PIECE_SIZES.len()] {
        self.available
    }

    pub fn size_of(index: usize) -> Result<i8, BoardError> {
        PIECE_SIZES
            .get(index)
            .copied()
            .ok_or(BoardError::PieceUnavailable { index })
    }

    pub fn index_of(size: i8) -> Option<usize> {
        PIECE_SIZES.iter().position(|&s| s == size)
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.available.get(index).copied().unwrap_or(false)
    }

    pub fn is_exhausted(&self) -> bool {
        !self.available.iter().any(|&flag| flag)
    }

    /// Indices of the pieces still available, in declared order.
    pub fn available_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.available
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag)
            .map(|(index, _)| index)
    }

    pub fn available_sizes(&self) -> Vec<i8> {
        self.available_indices().map(|i| PIECE_SIZES[i]).collect()
    }

    pub fn remaining(&self) -> usize {
        self.available.iter().filter(|&&flag| flag).count()
    }

    /// Consumes the piece at `index` and returns its size.
    pub fn take(&mut self, index: usize) -> Result<i8, BoardError> {
        if !self.is_available(index) {
            return Err(BoardError::PieceUnavailable { index });
        }
        self.available[index] = false;
        Ok(PIECE_SIZES[index])
    }

    pub fn restore(&mut self, index: usize) -> Result<(), BoardError> {
        match self.available.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                Ok(())
            }
            _ => Err(BoardError::PieceUnavailable { index }),
        }
    }
}
