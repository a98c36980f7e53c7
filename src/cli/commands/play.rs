//! Play command - play a game against the computer.

use std::path::PathBuf;

use structopt::StructOpt;
use tictactoe::board::{Player, Variant};
use tictactoe::game::mode::HumanVsComputer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "classic")]
    pub variant: Variant,
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short, long, default_value = "one")]
    pub player: Player,
    #[structopt(long = "no-pruning", help = "Search with plain minimax")]
    pub no_pruning: bool,
    #[structopt(long, parse(from_os_str), help = "Write a move-by-move record to this file")]
    pub transcript: Option<PathBuf>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.variant, self.depth, self.no_pruning);
        run_game_loop(
            HumanVsComputer {
                human_player: self.player,
            },
            config,
            self.transcript,
        );
    }
}
