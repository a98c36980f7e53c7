use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{Board, Player};
use crate::moves::Move;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
        }
    }

    /// Builds one frame: the grid, each side's remaining pieces in the
    /// stacking variant, whose turn it is and the last move played.
    pub fn compose_game_state(
        &mut self,
        board: &Board,
        current_turn: Player,
        last_move: Option<(Player, Move)>,
        stats: Option<&str>,
    ) -> &str {
        self.buffer.clear();

        // `write!` into a String cannot fail
        let _ = write!(self.buffer, "{}", board);
        let _ = writeln!(self.buffer);
        let _ = writeln!(self.buffer, "Turn: {}", current_turn);

        if let Some((side, game_move)) = last_move {
            let _ = writeln!(self.buffer, "Last move: {} played {}", side, game_move);
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }

        &self.buffer
    }

    /// Clears the terminal and prints the frame.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Player,
        last_move: Option<(Player, Move)>,
        stats: Option<&str>,
    ) {
        let frame = self
            .compose_game_state(board, current_turn, last_move, stats)
            .to_string();
        print!("{}{}{}", cursor::Goto(1, 1), clear::All, frame);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
