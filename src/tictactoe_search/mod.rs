//! Tic-tac-toe implementation of the alpha-beta search traits.

pub mod implementation;

#[cfg(test)]
mod tests;

pub use implementation::{
    choose_best_move, search_best_move, search_config, TicTacToeEvaluator,
    TicTacToeMoveGenerator, DEFAULT_MAX_DEPTH,
};
