use std::fmt;

use super::{Board, Player, Variant, PIECE_SIZES};

impl Board {
    fn cell_symbol(&self, value: i8) -> String {
        let variant = self.variant();
        match (Player::owner_of(value), variant) {
            (None, Variant::Classic) => variant.empty_symbol().to_string(),
            (None, Variant::Stacking) => format!("{} ", variant.empty_symbol()),
            (Some(owner), Variant::Classic) => variant.player_symbol(owner).to_string(),
            (Some(owner), Variant::Stacking) => {
                format!("{}{}", variant.player_symbol(owner), value.abs())
            }
        }
    }

    /// Renders the grid with column indices on top and row indices on the
    /// right, matching how moves are entered (`<col> <row>`).
    pub fn to_ascii(&self) -> String {
        let width = match self.variant() {
            Variant::Classic => 1,
            Variant::Stacking => 2,
        };

        let mut result = String::with_capacity(128);
        result.push_str("  ");
        for col in 0..3 {
            result.push_str(&format!("{:<width$}   ", col, width = width));
        }
        result.push_str("\n");

        for (row_index, row) in self.cells().iter().enumerate() {
            for &value in row.iter() {
                result.push_str(&format!("| {} ", self.cell_symbol(value)));
            }
            result.push_str(&format!("| {}\n", row_index));
        }

        result
    }

    /// Lists the pieces a player still holds, e.g. `[+3, +4, +5]`.
    pub fn inventory_to_ascii(&self, player: Player) -> String {
        let symbol = self.variant().player_symbol(player);
        let pieces = self
            .inventory(player)
            .available_indices()
            .map(|index| format!("{}{}", symbol, PIECE_SIZES[index]))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", pieces)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())?;
        if self.variant() == Variant::Stacking {
            for player in Player::ALL.iter() {
                writeln!(f, "{}'s pieces: {}", player, self.inventory_to_ascii(*player))?;
            }
        }
        Ok(())
    }
}
