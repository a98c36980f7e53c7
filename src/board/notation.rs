//! Compact text notation for positions, in the spirit of FEN:
//!
//! ```text
//! <row 0>/<row 1>/<row 2> [<player one flags> <player two flags>] <turn>
//! ```
//!
//! Rows are three comma-separated signed cell values, listed top to bottom.
//! The inventory flags (five `0`/`1` characters, sizes 1-5) are present only
//! in the stacking variant, and that is how the variant is recognized. The turn
//! is `1` or `2`.
//!
//! `-1,1,0/0,2,0/0,0,0 00111 01111 2` is a stacking position with player two
//! to move; `1,-1,1/1,1,-1/-1,1,-1 2` is a full classic board.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Board, BoardError, Inventory, Player, Variant, PIECE_SIZES};

static CLASSIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        ([-0-9,]+/[-0-9,]+/[-0-9,]+)   # rows
        \x20+
        ([12])                          # turn
        $
        ",
    )
    .expect("CLASSIC_RE regex should be valid")
});

static STACKING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        ([-0-9,]+/[-0-9,]+/[-0-9,]+)   # rows
        \x20+
        ([01]{5})                       # player one inventory
        \x20+
        ([01]{5})                       # player two inventory
        \x20+
        ([12])                          # turn
        $
        ",
    )
    .expect("STACKING_RE regex should be valid")
});

fn invalid(notation: &str, reason: &'static str) -> BoardError {
    BoardError::InvalidNotation {
        notation: notation.to_string(),
        reason,
    }
}

fn parse_rows(notation: &str, raw: &str) -> Result<[[i8; 3]; 3], BoardError> {
    let mut cells = [[0i8; 3]; 3];
    let rows: Vec<&str> = raw.split('/').collect();
    if rows.len() != 3 {
        return Err(invalid(notation, "expected three rows"));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let values: Vec<&str> = row.split(',').collect();
        if values.len() != 3 {
            return Err(invalid(notation, "expected three cells per row"));
        }
        for (col_index, value) in values.iter().enumerate() {
            cells[row_index][col_index] = value
                .parse::<i8>()
                .map_err(|_| invalid(notation, "cell values must be small integers"))?;
        }
    }

    Ok(cells)
}

fn parse_inventory(raw: &str) -> Inventory {
    let mut flags = [false; PIECE_SIZES.len()];
    for (flag, ch) in flags.iter_mut().zip(raw.chars()) {
        *flag = ch == '1';
    }
    Inventory::from_flags(flags)
}

fn parse_turn(raw: &str) -> Player {
    if raw == "1" {
        Player::One
    } else {
        Player::Two
    }
}

fn inventory_flags(inventory: &Inventory) -> String {
    inventory
        .flags()
        .iter()
        .map(|&flag| if flag { '1' } else { '0' })
        .collect()
}

impl Board {
    pub fn from_notation(notation: &str) -> Result<Self, BoardError> {
        let trimmed = notation.trim();

        if let Some(caps) = STACKING_RE.captures(trimmed) {
            let cells = parse_rows(notation, &caps[1])?;
            let inventories = [parse_inventory(&caps[2]), parse_inventory(&caps[3])];
            return Board::from_cells(
                Variant::Stacking,
                cells,
                inventories,
                parse_turn(&caps[4]),
            );
        }

        if let Some(caps) = CLASSIC_RE.captures(trimmed) {
            let cells = parse_rows(notation, &caps[1])?;
            return Board::from_cells(
                Variant::Classic,
                cells,
                [Inventory::new(), Inventory::new()],
                parse_turn(&caps[2]),
            );
        }

        Err(invalid(
            notation,
            "expected `<rows> [<flags> <flags>] <turn>`",
        ))
    }

    pub fn to_notation(&self) -> String {
        let rows = self
            .cells()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("/");

        let turn = match self.turn() {
            Player::One => "1",
            Player::Two => "2",
        };

        match self.variant() {
            Variant::Classic => format!("{} {}", rows, turn),
            Variant::Stacking => format!(
                "{} {} {} {}",
                rows,
                inventory_flags(self.inventory(Player::One)),
                inventory_flags(self.inventory(Player::Two)),
                turn
            ),
        }
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Board::from_notation(notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stacking_position() {
        let board = Board::from_notation("-1,1,0/0,2,0/0,0,0 00111 01111 2").unwrap();
        assert_eq!(board.variant(), Variant::Stacking);
        assert_eq!(board.cells(), &[[-1, 1, 0], [0, 2, 0], [0, 0, 0]]);
        assert_eq!(board.available_pieces(Player::One), vec![3, 4, 5]);
        assert_eq!(board.available_pieces(Player::Two), vec![2, 3, 4, 5]);
        assert_eq!(board.turn(), Player::Two);
    }

    #[test]
    fn test_parse_classic_position() {
        let board = Board::from_notation("1,-1,1/1,1,-1/-1,1,-1 1").unwrap();
        assert_eq!(board.variant(), Variant::Classic);
        assert_eq!(board.cell_value(2, 2).unwrap(), -1);
        assert!(board.is_full());
    }

    #[test]
    fn test_notation_round_trip() {
        for notation in [
            "-1,1,0/0,2,0/0,0,0 00111 01111 2",
            "3,1,-5/4,5,0/-2,0,-4 00000 00000 1",
            "0,0,0/0,0,0/0,0,0 1",
        ]
        .iter()
        {
            let board = Board::from_notation(notation).unwrap();
            assert_eq!(board.to_notation(), *notation);
        }
    }

    #[test]
    fn test_rejects_out_of_range_cells() {
        assert!(matches!(
            Board::from_notation("2,0,0/0,0,0/0,0,0 1"),
            Err(BoardError::InvalidCellValue { value: 2, .. })
        ));
        assert!(matches!(
            Board::from_notation("6,0,0/0,0,0/0,0,0 01111 11111 1"),
            Err(BoardError::InvalidCellValue { value: 6, .. })
        ));
    }

    #[test]
    fn test_rejects_piece_still_in_inventory() {
        // player one's size 3 is on the board but still flagged available
        assert!(matches!(
            Board::from_notation("3,0,0/0,0,0/0,0,0 11111 11111 2"),
            Err(BoardError::PieceUnavailable { index: 2 })
        ));
    }

    #[test]
    fn test_rejects_malformed_notation() {
        assert!(matches!(
            Board::from_notation("1,0/0,0,0/0,0,0 1"),
            Err(BoardError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Board::from_notation("0,0,0/0,0,0/0,0,0"),
            Err(BoardError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Board::from_notation("0,0,0/0,0,0/0,0,0 0111 11111 1"),
            Err(BoardError::InvalidNotation { .. })
        ));
    }
}
