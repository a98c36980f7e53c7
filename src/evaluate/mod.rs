use std::fmt;

use crate::board::{Board, Player, Variant};
use crate::move_generator::has_legal_move;

pub mod lines;

pub use lines::{has_won, line_winner, WINNING_LINES};

/// Absolute outcome values: positive favors player one.
pub const PLAYER_ONE_WINS: i16 = 1;
pub const PLAYER_TWO_WINS: i16 = -1;
pub const DRAW: i16 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// The outcome on the absolute scale, or `None` while the game is running.
    pub fn absolute_score(&self) -> Option<i16> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Win(Player::One) => Some(PLAYER_ONE_WINS),
            GameStatus::Win(Player::Two) => Some(PLAYER_TWO_WINS),
            GameStatus::Draw => Some(DRAW),
        }
    }

    /// The outcome from `perspective`'s point of view: +1 when that side won.
    pub fn score_for(&self, perspective: Player) -> Option<i16> {
        self.absolute_score().map(|score| {
            if perspective.maximize_score() {
                score
            } else {
                -score
            }
        })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Win(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Reports whether the game on `board` is over.
///
/// A completed line wins regardless of variant. Otherwise a classic game is
/// drawn once the grid is full, and a stacking game once both inventories are
/// used up or neither side can place anything they still hold.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = line_winner(board) {
        return GameStatus::Win(winner);
    }

    let drawn = match board.variant() {
        Variant::Classic => board.is_full(),
        Variant::Stacking => {
            let exhausted = Player::ALL
                .iter()
                .all(|&player| board.inventory(player).is_exhausted());
            exhausted
                || Player::ALL
                    .iter()
                    .all(|&player| !has_legal_move(board, player))
        }
    };

    if drawn {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
