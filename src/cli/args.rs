//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "Classic and stacking tic-tac-toe with a minimax engine"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for the best move using alpha-beta pruning. The stacking variant searches at most `--depth` plies (default: 5); the classic variant always searches to the end of the game. You move first unless you pick a side with `--player`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 5)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the engine to determine the best move for the side to move in a position given with `--position` (required), e.g. \"-1,1,0/0,2,0/0,0,0 00111 01111 2\"."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
        }
    }
}
