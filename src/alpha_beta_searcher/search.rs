//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Two mutually recursive procedures, `maximize` and `minimize`, walk the game
//! tree depth first. Scores are always from the perspective of the side the
//! search was started for: `maximize` runs when that side is to move and
//! `minimize` when the opponent is. Alpha-beta pruning keeps a window
//! [alpha, beta] of scores that can still change the result and stops
//! exploring a node as soon as its best score leaves that window. It finds the
//! same move as plain minimax but visits fewer positions.
//!
//! # Tie-break
//!
//! A node keeps the first move, in generation order, that reaches its best
//! score. Later moves replace it only on strict improvement.
//!
//! # Depth Cap
//!
//! With `SearchConfig::max_depth` set, a node at or beyond the cap returns
//! right after its first child, carrying whatever that child reported. There
//! is no static evaluation at the horizon. Without a cap the search runs to
//! the end of the game.
//!
//! # Passing
//!
//! A side with no legal move in a running game passes: the turn flips and the
//! opposite procedure runs one level deeper with no placement.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator};

/// Stand-ins for -inf and +inf in the initial window.
const MIN_SCORE: i16 = i16::MIN;
const MAX_SCORE: i16 = i16::MAX;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("the game is already over")]
    GameOver,
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Depth past which nodes stop after their first child. `None` searches to
    /// the end of the game.
    pub max_depth: Option<u8>,
    /// Alpha-beta cutoffs. Turning this off gives plain minimax; the depth cap
    /// still applies.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            pruning: true,
        }
    }
}

impl SearchConfig {
    pub fn new(max_depth: Option<u8>, pruning: bool) -> Self {
        Self { max_depth, pruning }
    }

    #[inline(always)]
    fn depth_capped(&self, depth: u8) -> bool {
        self.max_depth.map_or(false, |cap| depth >= cap)
    }
}

/// Statistics collected during search.
#[derive(Clone, Debug, Default)]
struct SearchStats {
    position_count: usize,
    cutoff_count: usize,
    pass_count: usize,
    last_score: Option<i16>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: i16, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct SearchContext<M: Clone> {
    config: SearchConfig,
    stats: SearchStats,
    last_best_move: Option<M>,
}

impl<M: Clone> SearchContext<M> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            last_best_move: None,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_max_depth(&mut self, max_depth: Option<u8>) {
        self.config.max_depth = max_depth;
    }

    pub fn set_pruning(&mut self, pruning: bool) {
        self.config.pruning = pruning;
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.last_best_move = None;
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    pub fn pass_count(&self) -> usize {
        self.stats.pass_count
    }

    pub fn last_score(&self) -> Option<i16> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn last_best_move(&self) -> Option<&M> {
        self.last_best_move.as_ref()
    }
}

/// Applies a move, executes a closure with the new state, then undoes the move.
/// Handles turn toggling automatically.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> R
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> R,
{
    game_move
        .apply(state)
        .expect("move application should succeed in search");
    state.toggle_turn();

    let result = f(state);

    game_move
        .undo(state)
        .expect("move undo should succeed in search");
    state.toggle_turn();

    result
}

/// Flips the turn for a pass, executes a closure, then flips it back.
fn with_turn_passed<S, F, R>(state: &mut S, f: F) -> R
where
    S: GameState,
    F: FnOnce(&mut S) -> R,
{
    state.toggle_turn();
    let result = f(state);
    state.toggle_turn();
    result
}

/// Updates best score and move if new score is better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: i16,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i16,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

/// Searches for the best move for the side to move.
///
/// # Returns
///
/// - `Ok((best_move, score))` - The first move reaching the best score, and
///   that score from the mover's perspective
/// - `Err(SearchError::GameOver)` - If the position is already decided
/// - `Err(SearchError::NoAvailableMoves)` - If the side to move has to pass
///
/// The state is mutated during the search and restored before returning.
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(SearchConfig::default());
/// let (best_move, score) = alpha_beta_search(
///     &mut context,
///     &mut board,
///     &move_gen,
///     &evaluator,
/// )?;
/// ```
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext<G::Move>,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
) -> Result<(G::Move, i16), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let perspective = state.turn();
    debug!(
        "alpha-beta search for {:?}, depth cap: {:?}, pruning: {}",
        perspective, context.config.max_depth, context.config.pruning
    );

    context.reset_stats();

    if evaluator.evaluate(state, perspective).is_some() {
        return Err(SearchError::GameOver);
    }

    if move_generator.generate_moves(state).is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let start = Instant::now();
    let (best_score, best_move) = maximize(
        context,
        state,
        move_generator,
        evaluator,
        perspective,
        MIN_SCORE,
        MAX_SCORE,
        0,
    );
    let best_move = best_move.expect("a root with legal moves should produce a best move");

    context.stats.record_result(best_score, start.elapsed());
    context.last_best_move = Some(best_move.clone());

    debug!(
        "alpha-beta search done: {:?} scores {} ({} positions, {} cutoffs, {:?})",
        best_move,
        best_score,
        context.stats.position_count,
        context.stats.cutoff_count,
        context.stats.last_duration.unwrap_or_default()
    );

    Ok((best_move, best_score))
}

/// Explores a node where the searching side is to move.
#[allow(clippy::too_many_arguments)]
fn maximize<S, G, E>(
    context: &mut SearchContext<G::Move>,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    perspective: S::Side,
    mut alpha: i16,
    beta: i16,
    depth: u8,
) -> (i16, Option<G::Move>)
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.stats.position_count += 1;

    if let Some(score) = evaluator.evaluate(state, perspective) {
        return (score, None);
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        context.stats.pass_count += 1;
        let (score, _) = with_turn_passed(state, |state| {
            minimize(
                context,
                state,
                move_generator,
                evaluator,
                perspective,
                alpha,
                beta,
                depth.saturating_add(1),
            )
        });
        return (score, None);
    }

    let mut best_score = MIN_SCORE;
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let (score, _) = with_move_applied(game_move, state, |state| {
            minimize(
                context,
                state,
                move_generator,
                evaluator,
                perspective,
                alpha,
                beta,
                depth.saturating_add(1),
            )
        });

        update_best(score, game_move, true, &mut best_score, &mut best_move);

        if context.config.pruning && best_score >= beta {
            context.stats.cutoff_count += 1;
            return (best_score, best_move);
        }
        if context.config.depth_capped(depth) {
            return (best_score, best_move);
        }

        alpha = max(alpha, best_score);
    }

    (best_score, best_move)
}

/// Explores a node where the opponent of the searching side is to move.
#[allow(clippy::too_many_arguments)]
fn minimize<S, G, E>(
    context: &mut SearchContext<G::Move>,
    state: &mut S,
    move_generator: &G,
    evaluator: &E,
    perspective: S::Side,
    alpha: i16,
    mut beta: i16,
    depth: u8,
) -> (i16, Option<G::Move>)
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.stats.position_count += 1;

    if let Some(score) = evaluator.evaluate(state, perspective) {
        return (score, None);
    }

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        context.stats.pass_count += 1;
        let (score, _) = with_turn_passed(state, |state| {
            maximize(
                context,
                state,
                move_generator,
                evaluator,
                perspective,
                alpha,
                beta,
                depth.saturating_add(1),
            )
        });
        return (score, None);
    }

    let mut best_score = MAX_SCORE;
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        let (score, _) = with_move_applied(game_move, state, |state| {
            maximize(
                context,
                state,
                move_generator,
                evaluator,
                perspective,
                alpha,
                beta,
                depth.saturating_add(1),
            )
        });

        update_best(score, game_move, false, &mut best_score, &mut best_move);

        if context.config.pruning && best_score <= alpha {
            context.stats.cutoff_count += 1;
            return (best_score, best_move);
        }
        if context.config.depth_capped(depth) {
            return (best_score, best_move);
        }

        beta = min(beta, best_score);
    }

    (best_score, best_move)
}
