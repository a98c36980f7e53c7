//! Tic-tac-toe trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveCollection, MoveGenerator,
    SearchConfig, SearchContext, SearchError,
};
use crate::board::{Board, BoardError, Player, Variant};
use crate::evaluate;
use crate::move_generator::{self, MoveList};
use crate::moves::Move;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

/// Depth cap used for the stacking variant unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u8 = 5;

impl GameState for Board {
    type Side = Player;

    #[inline]
    fn turn(&self) -> Player {
        Board::turn(self)
    }

    #[inline]
    fn toggle_turn(&mut self) {
        Board::toggle_turn(self);
    }
}

impl GameMove for Move {
    type State = Board;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut Board) -> Result<(), BoardError> {
        Move::apply(self, state)
    }

    #[inline]
    fn undo(&self, state: &mut Board) -> Result<(), BoardError> {
        Move::undo(self, state)
    }
}

impl MoveCollection<Move> for MoveList {
    fn is_empty(&self) -> bool {
        MoveList::is_empty(self)
    }

    fn len(&self) -> usize {
        MoveList::len(self)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeMoveGenerator;

impl MoveGenerator<Board> for TicTacToeMoveGenerator {
    type Move = Move;
    type MoveList = MoveList;

    #[inline]
    fn generate_moves(&self, state: &Board) -> MoveList {
        move_generator::generate_moves(state, state.turn())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeEvaluator;

impl Evaluator<Board> for TicTacToeEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board, perspective: Player) -> Option<i16> {
        evaluate::evaluate(state).score_for(perspective)
    }
}

/// The search configuration for a variant. The classic tree is small enough
/// to search to the end, so the depth cap only applies to stacking.
pub fn search_config(variant: Variant, max_depth: u8, pruning: bool) -> SearchConfig {
    let max_depth = match variant {
        Variant::Classic => None,
        Variant::Stacking => Some(max_depth),
    };
    SearchConfig::new(max_depth, pruning)
}

/// Searches for `side`'s best move on `board` using `context`'s
/// configuration. The board, including whose turn it is, is left as it was.
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_best_move(
    context: &mut SearchContext<Move>,
    board: &mut Board,
    side: Player,
) -> Result<(Move, i16), SearchError> {
    let previous_turn = board.turn();
    board.set_turn(side);

    let result = alpha_beta_search(
        context,
        board,
        &TicTacToeMoveGenerator,
        &TicTacToeEvaluator,
    );

    board.set_turn(previous_turn);
    result
}

/// Picks the best move for `side` and its score from `side`'s perspective
/// (+1 win, 0 draw, -1 loss). `max_depth` is ignored in the classic variant.
pub fn choose_best_move(
    board: &mut Board,
    side: Player,
    max_depth: u8,
) -> Result<(Move, i16), SearchError> {
    let mut context = SearchContext::new(search_config(board.variant(), max_depth, true));
    search_best_move(&mut context, board, side)
}
