//! Legal move enumeration and validation for both variants.
//!
//! `check_legal` is the single source of truth for move legality: the engine
//! calls it (through `Move::apply_for`) to validate player input, and
//! `generate_moves` enumerates exactly the moves it accepts. Keeping both on
//! the same rule keeps the search from ever proposing a move the engine would
//! reject.

use smallvec::SmallVec;

use crate::board::{Board, BoardError, Coord, Inventory, Player, Variant, PIECE_SIZES};
use crate::moves::Move;

/// Upper bound on the number of legal moves: every cell with every piece.
pub const MAX_MOVES: usize = 9 * PIECE_SIZES.len();

pub type MoveList = SmallVec<[Move; MAX_MOVES]>;

/// Checks whether `player` may play `candidate` on `board`, returning the
/// signed cell value the move would write.
///
/// - classic: the target cell must be empty;
/// - stacking: the piece must still be in the player's inventory, and the
///   target cell must be empty or hold a strictly smaller opponent piece.
pub fn check_legal(board: &Board, player: Player, candidate: &Move) -> Result<i8, BoardError> {
    let variant = board.variant();
    let incoming = candidate.cell_value(variant, player)?;
    let coord = candidate.coord();
    let occupant = board.get(coord);

    if let Some(index) = candidate.piece_index() {
        if !board.inventory(player).is_available(index) {
            return Err(BoardError::PieceUnavailable { index });
        }
    }

    let can_cover = match variant {
        Variant::Classic => occupant == 0,
        Variant::Stacking => can_cover(occupant, player, incoming.abs()),
    };

    if !can_cover {
        return Err(BoardError::CellOccupiedIllegally {
            coord,
            occupant,
            incoming,
        });
    }

    Ok(incoming)
}

#[inline(always)]
fn can_cover(occupant: i8, player: Player, size: i8) -> bool {
    occupant == 0 || (!player.owns(occupant) && occupant.abs() < size)
}

/// Enumerates every legal move for `player`, cells in row-major order and,
/// within a cell, pieces in inventory order.
pub fn generate_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::new();

    match board.variant() {
        Variant::Classic => {
            moves.extend(board.empty_cells().map(Move::place));
        }
        Variant::Stacking => {
            let inventory = board.inventory(player);
            for &coord in Coord::ALL.iter() {
                let occupant = board.get(coord);
                for index in inventory.available_indices() {
                    if can_cover(occupant, player, PIECE_SIZES[index]) {
                        moves.push(Move::with_piece(coord, index));
                    }
                }
            }
        }
    }

    moves
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    match board.variant() {
        Variant::Classic => !board.is_full(),
        Variant::Stacking => {
            let inventory: &Inventory = board.inventory(player);
            Coord::ALL.iter().any(|&coord| {
                let occupant = board.get(coord);
                inventory
                    .available_indices()
                    .any(|index| can_cover(occupant, player, PIECE_SIZES[index]))
            })
        }
    }
}
