//! PvP command - play a game against another human.

use structopt::StructOpt;
use tictactoe::board::Variant;
use tictactoe::game::mode::HumanVsHuman;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "classic")]
    pub variant: Variant,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(self.variant, 0, false);
        run_game_loop(HumanVsHuman, config, None);
    }
}
