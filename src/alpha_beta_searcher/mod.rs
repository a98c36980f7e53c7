//! Generic alpha-beta minimax search over any two-player zero-sum game that
//! implements the traits in `traits`.

mod search;
mod traits;


pub use search::{alpha_beta_search, SearchConfig, SearchContext, SearchError};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};
