use std::time::Duration;

use crate::board::Player;
use crate::evaluate::GameStatus;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

pub trait GameMode {
    fn get_move(&self, current_turn: Player) -> Result<MoveInput, InputError>;
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player);
    fn frame_delay(&self) -> Option<Duration>;
    fn announce_result(&self, status: GameStatus) -> String;
}

pub struct HumanVsComputer {
    pub human_player: Player,
}

pub struct ComputerVsComputer {
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

pub struct HumanVsHuman;

fn stats_display(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (cutoffs: {}, depth cap: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.cutoffs,
        stats.max_depth.map_or("none".to_string(), |d| d.to_string()),
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

fn generic_result(status: GameStatus) -> String {
    match status {
        GameStatus::Win(player) => format!("The winner is {}!", player),
        _ => "It is a tie!".to_string(),
    }
}

impl GameMode for HumanVsComputer {
    fn get_move(&self, current_turn: Player) -> Result<MoveInput, InputError> {
        if current_turn == self.human_player {
            parse_move_input()
        } else {
            Ok(MoveInput::UseEngine)
        }
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        let stats = stats_display(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats),
        );
        if current_turn == self.human_player {
            println!("Enter your move (col row [size]) or `quit`:");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn announce_result(&self, status: GameStatus) -> String {
        match status.winner() {
            Some(winner) if winner == self.human_player => "You are the winner!".to_string(),
            Some(_) => "The computer is the winner!".to_string(),
            None => "It is a tie!".to_string(),
        }
    }
}

impl GameMode for ComputerVsComputer {
    fn get_move(&self, _current_turn: Player) -> Result<MoveInput, InputError> {
        Ok(MoveInput::UseEngine)
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        let stats = stats_display(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }

    fn announce_result(&self, status: GameStatus) -> String {
        generic_result(status)
    }
}

impl GameMode for HumanVsHuman {
    fn get_move(&self, _current_turn: Player) -> Result<MoveInput, InputError> {
        parse_move_input()
    }

    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        ui.render_game_state(engine.board(), current_turn, engine.last_move(), None);
        println!("Enter your move (col row [size]) or `quit`:");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }

    fn announce_result(&self, status: GameStatus) -> String {
        generic_result(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_vs_computer_result_messages() {
        let mode = HumanVsComputer {
            human_player: Player::Two,
        };
        assert_eq!(
            mode.announce_result(GameStatus::Win(Player::Two)),
            "You are the winner!"
        );
        assert_eq!(
            mode.announce_result(GameStatus::Win(Player::One)),
            "The computer is the winner!"
        );
        assert_eq!(mode.announce_result(GameStatus::Draw), "It is a tie!");
    }

    #[test]
    fn test_computer_always_uses_engine() {
        let mode = ComputerVsComputer {
            delay_between_moves: None,
        };
        assert_eq!(mode.get_move(Player::One).unwrap(), MoveInput::UseEngine);
        assert_eq!(
            mode.announce_result(GameStatus::Win(Player::One)),
            "The winner is player one!"
        );

        let human_vs_computer = HumanVsComputer {
            human_player: Player::One,
        };
        assert_eq!(
            human_vs_computer.get_move(Player::Two).unwrap(),
            MoveInput::UseEngine
        );
    }
}
