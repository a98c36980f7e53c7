pub mod coord;
pub mod error;
pub mod inventory;
pub mod player;
pub mod variant;

mod display;
mod notation;
mod state_stack;


pub use coord::Coord;
pub use error::BoardError;
pub use inventory::{Inventory, PIECE_SIZES};
pub use player::Player;
pub use variant::Variant;

use state_stack::StateStack;

/// Represents the state of a 3x3 board: the cell grid, both players' piece
/// inventories (only consulted in the stacking variant), and the side to move.
///
/// Cells hold signed values. The sign is the owner (positive for player one,
/// negative for player two) and the magnitude is the piece size; classic
/// boards only ever hold magnitude 1. Every placement pushes the displaced
/// value onto an undo stack, so `remove` restores exactly what was there.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    variant: Variant,
    cells: [[i8; 3]; 3],
    inventories: [Inventory; 2],
    turn: Player,
    displaced: StateStack<(Coord, i8)>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl Board {
    /// An empty board with full inventories for both players, player one to move.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            cells: [[0; 3]; 3],
            inventories: [Inventory::new(), Inventory::new()],
            turn: Player::One,
            displaced: StateStack::new(),
        }
    }

    /// Builds a board from raw rows (`cells[row][col]`). Cell values must be in
    /// range for the variant, and in the stacking variant no piece may be on the
    /// board while its owner's inventory still flags it as available.
    pub fn from_cells(
        variant: Variant,
        cells: [[i8; 3]; 3],
        inventories: [Inventory; 2],
        turn: Player,
    ) -> Result<Self, BoardError> {
        for &value in cells.iter().flatten() {
            if !variant.is_valid_cell_value(value) {
                return Err(BoardError::InvalidCellValue { value, variant });
            }

            if variant == Variant::Stacking {
                if let Some(owner) = Player::owner_of(value) {
                    let index = Inventory::index_of(value.abs())
                        .ok_or(BoardError::InvalidCellValue { value, variant })?;
                    if inventories[owner as usize].is_available(index) {
                        return Err(BoardError::PieceUnavailable { index });
                    }
                }
            }
        }

        Ok(Self {
            variant,
            cells,
            inventories,
            turn,
            displaced: StateStack::new(),
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn cells(&self) -> &[[i8; 3]; 3] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> i8 {
        self.cells[coord.row()][coord.col()]
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == 0
    }

    pub fn cell_value(&self, col: usize, row: usize) -> Result<i8, BoardError> {
        Ok(self.get(Coord::new(col, row)?))
    }

    pub fn is_cell_empty(&self, col: usize, row: usize) -> Result<bool, BoardError> {
        Ok(self.is_empty(Coord::new(col, row)?))
    }

    /// Writes `value` to the cell and records the value it displaced. No rule
    /// checks beyond the variant's value range happen here; legality is the
    /// move generator's concern.
    pub fn put(&mut self, coord: Coord, value: i8) -> Result<i8, BoardError> {
        if value == 0 || !self.variant.is_valid_cell_value(value) {
            return Err(BoardError::InvalidCellValue {
                value,
                variant: self.variant,
            });
        }

        let prior = self.get(coord);
        self.displaced.push((coord, prior));
        self.cells[coord.row()][coord.col()] = value;
        Ok(prior)
    }

    /// Undoes the most recent `put`, which must have targeted `coord`. Returns
    /// the value that was removed.
    pub fn remove(&mut self, coord: Coord) -> Result<i8, BoardError> {
        let &(expected, prior) = self
            .displaced
            .peek()
            .ok_or(BoardError::NothingToUndo { coord })?;

        if expected != coord {
            return Err(BoardError::UndoOutOfOrder {
                expected,
                found: coord,
            });
        }

        self.displaced.pop();
        let removed = self.get(coord);
        self.cells[coord.row()][coord.col()] = prior;
        Ok(removed)
    }

    pub fn place_piece(&mut self, col: usize, row: usize, value: i8) -> Result<i8, BoardError> {
        self.put(Coord::new(col, row)?, value)
    }

    pub fn remove_piece(&mut self, col: usize, row: usize) -> Result<i8, BoardError> {
        self.remove(Coord::new(col, row)?)
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player as usize]
    }

    pub fn inventory_mut(&mut self, player: Player) -> &mut Inventory {
        &mut self.inventories[player as usize]
    }

    pub fn available_pieces(&self, player: Player) -> Vec<i8> {
        self.inventory(player).available_sizes()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL
            .iter()
            .copied()
            .filter(move |&coord| self.is_empty(coord))
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Number of placements that can currently be undone.
    pub fn placement_depth(&self) -> usize {
        self.displaced.len()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Player {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Player) -> Player {
        self.turn = turn;
        turn
    }
}
