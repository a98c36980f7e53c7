use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two sides. `One` owns positive cell values and moves first;
/// `Two` owns negative cell values.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player one is the maximizing side of the absolute outcome value.
    pub fn maximize_score(&self) -> bool {
        match self {
            Player::One => true,
            Player::Two => false,
        }
    }

    /// Sign carried by this player's cell values.
    pub fn sign(&self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    pub fn owns(&self, cell_value: i8) -> bool {
        cell_value != 0 && cell_value.signum() == self.sign()
    }

    pub fn owner_of(cell_value: i8) -> Option<Self> {
        match cell_value.signum() {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl From<u8> for Player {
    fn from(value: u8) -> Self {
        match value {
            0 => Player::One,
            1 => Player::Two,
            _ => panic!("Invalid player value: {} (must be 0 or 1)", value),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player as u8
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player one",
            Player::Two => "player two",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "one" | "1" => Ok(Player::One),
            "two" | "2" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: one, two, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Player::ALL.contains(&Player::random()));
    }

    #[test]
    fn test_parse_one() {
        assert_eq!(Player::One, Player::from_str("one").unwrap());
        assert_eq!(Player::One, Player::from_str("1").unwrap());
    }

    #[test]
    fn test_parse_two() {
        assert_eq!(Player::Two, Player::from_str("two").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_player = Player::from_str("random").unwrap();
        assert!(Player::ALL.contains(&rand_player));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Player::from_str("three").is_err());
    }

    #[test]
    fn test_ownership_follows_sign() {
        assert!(Player::One.owns(3));
        assert!(!Player::One.owns(-3));
        assert!(Player::Two.owns(-1));
        assert!(!Player::Two.owns(0));
        assert_eq!(Player::owner_of(5), Some(Player::One));
        assert_eq!(Player::owner_of(-2), Some(Player::Two));
        assert_eq!(Player::owner_of(0), None);
    }

    #[test]
    fn test_player_from_u8() {
        assert_eq!(Player::from(0u8), Player::One);
        assert_eq!(Player::from(1u8), Player::Two);
        assert_eq!(u8::from(Player::Two), 1);
    }
}
