//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use tictactoe::board::Variant;
use tictactoe::game::mode::ComputerVsComputer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "classic")]
    pub variant: Variant,
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(
        long = "delay-ms",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.variant, self.depth, false);
        run_game_loop(
            ComputerVsComputer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
            None,
        );
    }
}
