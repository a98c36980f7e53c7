use crate::board::{Board, Coord, Player};

/// The eight winning lines as indices into `Coord::ALL`.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A line belongs to `player` when all three cells hold one of their pieces.
/// Sizes don't matter, only the sign.
#[inline(always)]
pub fn owns_line(board: &Board, player: Player, line: &[usize; 3]) -> bool {
    line.iter()
        .all(|&index| player.owns(board.get(Coord::ALL[index])))
}

pub fn has_won(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| owns_line(board, player, line))
}

/// Returns the player holding a complete line, player one checked first.
pub fn line_winner(board: &Board) -> Option<Player> {
    Player::ALL
        .iter()
        .copied()
        .find(|&player| has_won(board, player))
}
