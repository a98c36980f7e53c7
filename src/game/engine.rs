use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::{Board, BoardError, Coord, Inventory, Player, Variant};
use crate::evaluate::{self, GameStatus};
use crate::input_handler::MoveInput;
use crate::move_generator::{self, MoveList};
use crate::moves::Move;
use crate::tictactoe_search::{search_best_move, search_config, DEFAULT_MAX_DEPTH};

/// Engine configuration: which rules to play and how hard to search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub variant: Variant,
    /// Depth cap for the stacking variant. The classic variant always searches
    /// to the end of the game.
    pub max_depth: u8,
    pub pruning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            max_depth: DEFAULT_MAX_DEPTH,
            pruning: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid move: {source}")]
    InvalidMove { source: BoardError },
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}

impl EngineError {
    fn invalid_move(source: BoardError) -> Self {
        EngineError::InvalidMove { source }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub max_depth: Option<u8>,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}

/// Owns the board for one game and is the only way the front-end changes it.
pub struct Engine {
    config: EngineConfig,
    board: Board,
    move_history: Vec<(Player, Move)>,
    search_context: SearchContext<Move>,
    last_score: Option<i16>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a game of `variant` with the default search settings: an empty
    /// board, full inventories, player one to move.
    pub fn new_game(variant: Variant) -> Self {
        Self::with_config(EngineConfig {
            variant,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_board(config, Board::new(config.variant))
    }

    /// Continues from an existing position. The position's variant wins over
    /// the one in `config`.
    pub fn with_board(config: EngineConfig, board: Board) -> Self {
        let config = EngineConfig {
            variant: board.variant(),
            ..config
        };
        Self {
            config,
            board,
            move_history: Vec::new(),
            search_context: SearchContext::new(search_config(
                config.variant,
                config.max_depth,
                config.pruning,
            )),
            last_score: None,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.board.turn()
    }

    pub fn legal_moves(&self, side: Player) -> MoveList {
        move_generator::generate_moves(&self.board, side)
    }

    pub fn has_legal_move(&self, side: Player) -> bool {
        move_generator::has_legal_move(&self.board, side)
    }

    pub fn evaluate(&self) -> GameStatus {
        evaluate::evaluate(&self.board)
    }

    pub fn check_game_over(&self) -> Option<GameStatus> {
        let status = self.evaluate();
        if status.is_over() {
            info!("game over after {} moves: {}", self.move_history.len(), status);
            Some(status)
        } else {
            None
        }
    }

    /// Validates and plays `game_move` for `side`, then hands the turn to the
    /// other side. Nothing changes when the move is rejected.
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn apply_move(&mut self, side: Player, game_move: Move) -> Result<(), EngineError> {
        if let Err(error) = game_move.apply_for(&mut self.board, side) {
            warn!("rejected move {} for {}: {}", game_move, side, error);
            return Err(EngineError::invalid_move(error));
        }

        debug!("{} played {}", side, game_move);
        self.move_history.push((side, game_move));
        self.board.set_turn(side.opposite());
        Ok(())
    }

    /// Hands the turn over without a placement. Used when `side` has nothing
    /// it can legally play.
    pub fn pass(&mut self, side: Player) {
        debug!("{} passes", side);
        self.board.set_turn(side.opposite());
    }

    /// Turns a parsed input line into a move for the current variant. Range
    /// problems surface as `InvalidMove`.
    pub fn move_from_input(
        &self,
        col: usize,
        row: usize,
        size: Option<u8>,
    ) -> Result<Move, EngineError> {
        let coord = Coord::new(col, row).map_err(EngineError::invalid_move)?;

        match (self.variant(), size) {
            (Variant::Classic, None) | (Variant::Classic, Some(1)) => Ok(Move::place(coord)),
            (Variant::Stacking, None) => Err(EngineError::invalid_move(BoardError::MissingPiece)),
            (variant, Some(size)) => {
                let value = size as i8;
                let index = Inventory::index_of(value)
                    .filter(|_| variant == Variant::Stacking)
                    .ok_or(EngineError::invalid_move(BoardError::InvalidCellValue {
                        value,
                        variant,
                    }))?;
                Ok(Move::with_piece(coord, index))
            }
        }
    }

    /// Searches for `side`'s best move without playing it. Returns the move
    /// and its score from `side`'s perspective.
    pub fn choose_best_move(&mut self, side: Player) -> Result<(Move, i16), EngineError> {
        let (best_move, score) = search_best_move(&mut self.search_context, &mut self.board, side)?;
        self.last_score = Some(score);
        Ok((best_move, score))
    }

    /// Searches for and plays the side to move's best move.
    pub fn make_best_move(&mut self) -> Result<Move, EngineError> {
        let side = self.turn();
        let (best_move, _) = self.choose_best_move(side)?;
        self.apply_move(side, best_move)?;
        Ok(best_move)
    }

    /// Plays a parsed input line for the side to move. Returns `None` when the
    /// input asks to quit.
    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Option<Move>, EngineError> {
        match input {
            MoveInput::Place { col, row, size } => {
                let side = self.turn();
                let game_move = self.move_from_input(col, row, size)?;
                self.apply_move(side, game_move)?;
                Ok(Some(game_move))
            }
            MoveInput::UseEngine => self.make_best_move().map(Some),
            MoveInput::Quit => Ok(None),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            max_depth: self.search_context.config().max_depth,
            last_score: self.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    pub fn last_move(&self) -> Option<(Player, Move)> {
        self.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[(Player, Move)] {
        &self.move_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(col: usize, row: usize) -> Coord {
        Coord::new(col, row).unwrap()
    }

    #[test]
    fn test_new_game() {
        let engine = Engine::new_game(Variant::Stacking);
        assert_eq!(engine.turn(), Player::One);
        assert_eq!(engine.board(), &Board::new(Variant::Stacking));
        assert_eq!(engine.evaluate(), GameStatus::InProgress);
        assert_eq!(engine.legal_moves(Player::One).len(), 45);
    }

    #[test]
    fn test_apply_move_hands_over_turn() {
        let mut engine = Engine::new_game(Variant::Classic);
        engine.apply_move(Player::One, Move::place(coord(1, 1))).unwrap();

        assert_eq!(engine.turn(), Player::Two);
        assert_eq!(engine.board().cell_value(1, 1).unwrap(), 1);
        assert_eq!(engine.last_move(), Some((Player::One, Move::place(coord(1, 1)))));
    }

    #[test]
    fn test_apply_move_rejects_illegal_moves() {
        let mut engine = Engine::new_game(Variant::Classic);
        engine.apply_move(Player::One, Move::place(coord(1, 1))).unwrap();
        let before = engine.board().clone();

        let result = engine.apply_move(Player::Two, Move::place(coord(1, 1)));

        assert!(matches!(
            result,
            Err(EngineError::InvalidMove {
                source: BoardError::CellOccupiedIllegally { .. }
            })
        ));
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.move_history().len(), 1);
    }

    #[test]
    fn test_stacking_own_piece_and_used_piece_rejected() {
        let mut engine = Engine::new_game(Variant::Stacking);
        engine
            .apply_move(Player::One, Move::with_piece(coord(0, 0), 0))
            .unwrap();
        engine
            .apply_move(Player::Two, Move::with_piece(coord(2, 2), 4))
            .unwrap();

        // own piece
        assert!(matches!(
            engine.apply_move(Player::One, Move::with_piece(coord(0, 0), 3)),
            Err(EngineError::InvalidMove {
                source: BoardError::CellOccupiedIllegally { .. }
            })
        ));
        // already played
        assert!(matches!(
            engine.apply_move(Player::One, Move::with_piece(coord(1, 1), 0)),
            Err(EngineError::InvalidMove {
                source: BoardError::PieceUnavailable { index: 0 }
            })
        ));
        // covering the size 5 is impossible
        assert!(matches!(
            engine.apply_move(Player::One, Move::with_piece(coord(2, 2), 4)),
            Err(EngineError::InvalidMove {
                source: BoardError::CellOccupiedIllegally { .. }
            })
        ));
    }

    #[test]
    fn test_move_from_input() {
        let classic = Engine::new_game(Variant::Classic);
        assert_eq!(
            classic.move_from_input(2, 1, None),
            Ok(Move::place(coord(2, 1)))
        );
        assert!(matches!(
            classic.move_from_input(3, 1, None),
            Err(EngineError::InvalidMove {
                source: BoardError::OutOfBounds { col: 3, row: 1 }
            })
        ));
        assert!(matches!(
            classic.move_from_input(0, 0, Some(3)),
            Err(EngineError::InvalidMove {
                source: BoardError::InvalidCellValue { value: 3, .. }
            })
        ));

        let stacking = Engine::new_game(Variant::Stacking);
        assert_eq!(
            stacking.move_from_input(0, 2, Some(4)),
            Ok(Move::with_piece(coord(0, 2), 3))
        );
        assert_eq!(
            stacking.move_from_input(0, 2, None),
            Err(EngineError::InvalidMove {
                source: BoardError::MissingPiece
            })
        );
        assert!(matches!(
            stacking.move_from_input(0, 2, Some(6)),
            Err(EngineError::InvalidMove {
                source: BoardError::InvalidCellValue { value: 6, .. }
            })
        ));
    }

    #[test]
    fn test_make_move_from_input() {
        let mut engine = Engine::new_game(Variant::Classic);

        let played = engine
            .make_move_from_input(MoveInput::Place {
                col: 0,
                row: 0,
                size: None,
            })
            .unwrap();
        assert_eq!(played, Some(Move::place(coord(0, 0))));

        let reply = engine.make_move_from_input(MoveInput::UseEngine).unwrap();
        assert!(reply.is_some());
        assert_eq!(engine.turn(), Player::One);
        assert!(engine.get_search_stats().last_score.is_some());

        assert_eq!(engine.make_move_from_input(MoveInput::Quit), Ok(None));
    }

    #[test]
    fn test_pass() {
        let mut engine = Engine::new_game(Variant::Stacking);
        engine.pass(Player::One);
        assert_eq!(engine.turn(), Player::Two);
        assert!(engine.move_history().is_empty());
    }

    #[test]
    fn test_stacking_concrete_position() {
        let board = Board::from_notation("-1,1,0/0,2,0/0,0,0 00111 01111 2").unwrap();
        let mut engine = Engine::with_board(EngineConfig::default(), board);
        assert_eq!(engine.variant(), Variant::Stacking);

        let best_move = engine.make_best_move().unwrap();

        assert_eq!(best_move.coord().col(), 1);
        assert_eq!(engine.turn(), Player::One);
        let stats = engine.get_search_stats();
        assert_eq!(stats.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert!(stats.positions_searched > 0);
    }

    #[test]
    fn test_computer_vs_computer_classic_is_draw() {
        let mut engine = Engine::new_game(Variant::Classic);
        while engine.check_game_over().is_none() {
            engine.make_best_move().unwrap();
        }
        assert_eq!(engine.evaluate(), GameStatus::Draw);
        assert_eq!(engine.move_history().len(), 9);
    }
}
