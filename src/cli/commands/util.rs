//! Shared utilities for CLI commands.

use std::path::PathBuf;

use log::warn;
use tictactoe::board::Variant;
use tictactoe::game::engine::EngineConfig;
use tictactoe::game::mode::GameMode;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::game::transcript::Transcript;

pub(crate) fn run_game_loop<T: GameMode>(mode: T, config: EngineConfig, transcript: Option<PathBuf>) {
    let mut game = GameLoop::new(mode, config);

    if let Some(path) = transcript {
        match Transcript::create(&path, config.variant) {
            Ok(transcript) => game = game.with_transcript(transcript),
            Err(error) => warn!(
                "could not create transcript at {}: {}",
                path.display(),
                error
            ),
        }
    }

    if game.run().is_none() {
        println!("Game abandoned.");
    }
}

pub(crate) fn create_config(variant: Variant, depth: u8, no_pruning: bool) -> EngineConfig {
    EngineConfig {
        variant,
        max_depth: depth,
        pruning: !no_pruning,
    }
}
