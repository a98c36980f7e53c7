//! A single placement: a target cell, plus the inventory slot being played in
//! the stacking variant.

use std::fmt;

use crate::board::{Board, BoardError, Coord, Inventory, Player, Variant};
use crate::move_generator;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    coord: Coord,
    piece: Option<usize>,
}

impl Move {
    /// A classic-variant move: put a mark on `coord`.
    pub fn place(coord: Coord) -> Self {
        Self { coord, piece: None }
    }

    /// A stacking-variant move: play inventory slot `piece_index` on `coord`.
    pub fn with_piece(coord: Coord, piece_index: usize) -> Self {
        Self {
            coord,
            piece: Some(piece_index),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn piece_index(&self) -> Option<usize> {
        self.piece
    }

    pub fn piece_size(&self) -> Option<i8> {
        self.piece.and_then(|index| Inventory::size_of(index).ok())
    }

    /// The signed value this move writes for `player`.
    pub fn cell_value(&self, variant: Variant, player: Player) -> Result<i8, BoardError> {
        let magnitude = match (variant, self.piece) {
            (Variant::Classic, None) => 1,
            (Variant::Classic, Some(index)) => {
                return Err(BoardError::PieceUnavailable { index });
            }
            (Variant::Stacking, None) => return Err(BoardError::MissingPiece),
            (Variant::Stacking, Some(index)) => Inventory::size_of(index)?,
        };
        Ok(magnitude * player.sign())
    }

    /// Validates the move for `player` and applies it: writes the cell and, in
    /// the stacking variant, consumes the inventory piece. The turn is left
    /// alone.
    pub fn apply_for(&self, board: &mut Board, player: Player) -> Result<(), BoardError> {
        let value = move_generator::check_legal(board, player, self)?;

        if let Some(index) = self.piece {
            board.inventory_mut(player).take(index)?;
        }
        board.put(self.coord, value)?;
        Ok(())
    }

    /// Applies the move for the side to move.
    pub fn apply(&self, board: &mut Board) -> Result<(), BoardError> {
        let player = board.turn();
        self.apply_for(board, player)
    }

    /// Reverts `apply`. The owner of the removed piece tells us whose
    /// inventory gets the piece back, so this does not depend on the turn.
    pub fn undo(&self, board: &mut Board) -> Result<(), BoardError> {
        let removed = board.remove(self.coord)?;

        if let Some(index) = self.piece {
            let owner = Player::owner_of(removed).ok_or(BoardError::NothingToUndo {
                coord: self.coord,
            })?;
            board.inventory_mut(owner).restore(index)?;
        }
        Ok(())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece_size() {
            Some(size) => write!(f, "{}, size {}", self.coord, size),
            None => write!(f, "{}", self.coord),
        }
    }
}
