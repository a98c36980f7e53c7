//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// Represents the state of a two-player zero-sum game.
pub trait GameState {
    /// Identifies one of the two sides.
    type Side: Copy + PartialEq + Debug;

    /// Returns the side to move.
    fn turn(&self) -> Self::Side;

    /// Switches to the next player's turn.
    fn toggle_turn(&mut self);
}

/// Represents an action that can be applied to and undone from a game state.
/// Neither call touches the turn; the search toggles it around them.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state for the side to move.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the current player, in the order the
    /// search should try them.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Scores finished games.
pub trait Evaluator<S: GameState>: Clone {
    /// Returns the outcome from `perspective`'s point of view (higher is
    /// better for that side), or `None` while the game is still in progress.
    fn evaluate(&self, state: &S, perspective: S::Side) -> Option<i16>;
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}
