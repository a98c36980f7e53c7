use std::fmt;
use std::str::FromStr;

use super::player::Player;

/// Rule variant, selected when the game starts. The move generator and the
/// evaluator dispatch on it; the search is written once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Variant {
    /// One mark per cell, cells never change once filled.
    Classic,
    /// Sized pieces 1-5, each usable once; a larger piece may cover a smaller
    /// opponent piece.
    Stacking,
}

impl Variant {
    /// Largest cell magnitude allowed in this variant.
    pub fn max_piece_size(&self) -> i8 {
        match self {
            Variant::Classic => 1,
            Variant::Stacking => 5,
        }
    }

    pub fn is_valid_cell_value(&self, value: i8) -> bool {
        value
            .checked_abs()
            .map_or(false, |magnitude| magnitude <= self.max_piece_size())
    }

    /// Character drawn for an empty cell.
    pub fn empty_symbol(&self) -> char {
        match self {
            Variant::Classic => '-',
            Variant::Stacking => '*',
        }
    }

    pub fn player_symbol(&self, player: Player) -> char {
        match (self, player) {
            (Variant::Classic, Player::One) => 'x',
            (Variant::Classic, Player::Two) => 'o',
            (Variant::Stacking, Player::One) => '+',
            (Variant::Stacking, Player::Two) => '-',
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Classic
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant_str = match self {
            Variant::Classic => "classic",
            Variant::Stacking => "stacking",
        };
        write!(f, "{}", variant_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Variant {
    type Err = ParseError;
    fn from_str(variant: &str) -> Result<Self, Self::Err> {
        match variant {
            "classic" => Ok(Variant::Classic),
            "stacking" => Ok(Variant::Stacking),
            _ => Err("invalid variant; options are: classic, stacking"),
        }
    }
}
