use std::fs::File;
use std::io::BufWriter;

use crate::board::Board;
use crate::evaluate::GameStatus;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::transcript::Transcript;
use crate::input_handler::MoveInput;

use super::mode::GameMode;

pub struct GameLoop<T: GameMode> {
    engine: Engine,
    ui: GameDisplay,
    mode: T,
    transcript: Option<Transcript<BufWriter<File>>>,
}

impl<T: GameMode> GameLoop<T> {
    pub fn new(mode: T, config: EngineConfig) -> Self {
        Self::from_engine(mode, Engine::with_config(config))
    }

    pub fn from_position(mode: T, config: EngineConfig, board: Board) -> Self {
        Self::from_engine(mode, Engine::with_board(config, board))
    }

    fn from_engine(mode: T, engine: Engine) -> Self {
        Self {
            engine,
            ui: GameDisplay::new(),
            mode,
            transcript: None,
        }
    }

    pub fn with_transcript(mut self, transcript: Transcript<BufWriter<File>>) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Plays until the game ends or a player quits. Returns the final status,
    /// or `None` if the game was abandoned.
    pub fn run(&mut self) -> Option<GameStatus> {
        loop {
            if let Some(status) = self.engine.check_game_over() {
                self.ui.render_game_state(
                    self.engine.board(),
                    self.engine.turn(),
                    self.engine.last_move(),
                    None,
                );
                println!("{}", self.mode.announce_result(status));
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.finish(status);
                }
                return Some(status);
            }

            let current_turn = self.engine.turn();

            if !self.engine.has_legal_move(current_turn) {
                println!("{} is out of moves", current_turn);
                self.engine.pass(current_turn);
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.record_pass(current_turn);
                }
                continue;
            }

            self.mode.render(&mut self.ui, &self.engine, current_turn);

            let input = match self.mode.get_move(current_turn) {
                Ok(MoveInput::Quit) => return None,
                Ok(input) => input,
                Err(error) => {
                    println!("{}", error);
                    continue;
                }
            };

            match self.engine.make_move_from_input(input) {
                Ok(Some(game_move)) => {
                    if let Some(transcript) = self.transcript.as_mut() {
                        transcript.record_move(current_turn, game_move, self.engine.board());
                    }
                    if let Some(delay) = self.mode.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Ok(None) => return None,
                Err(error) => println!("error: {}", error),
            }
        }
    }
}
