//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use tictactoe::board::Board;
use tictactoe::game::engine::{Engine, EngineConfig};

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            max_depth: self.depth,
            ..EngineConfig::default()
        };
        let mut engine = Engine::with_board(config, self.starting_position);
        let side = engine.turn();

        if !engine.has_legal_move(side) {
            eprintln!("{} has no legal moves in the given position.", side);
            return;
        }

        match engine.choose_best_move(side) {
            Ok((best_move, score)) => println!("{} (score: {})", best_move, score),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
