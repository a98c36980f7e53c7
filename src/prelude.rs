//! Common types re-exported for convenience.

pub use crate::board::{Board, BoardError, Coord, Player, Variant};
pub use crate::evaluate::GameStatus;
pub use crate::game::engine::{Engine, EngineConfig, EngineError};
pub use crate::moves::Move;
pub use crate::tictactoe_search::choose_best_move;
