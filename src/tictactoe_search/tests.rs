//! Tic-tac-toe tests for the alpha-beta search.
//!
//! Test coverage:
//! - Immediate wins and forced blocks in both variants
//! - Classic search ignoring the depth cap
//! - Pruning on/off equivalence
//! - Board restoration after a search
//! - Searched moves passing the engine's own legality check
//! - Full self-play games

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::{Board, Coord, Player, Variant};
use crate::evaluate::{evaluate, GameStatus};
use crate::move_generator::check_legal;
use crate::moves::Move;

use super::*;

fn coord(col: usize, row: usize) -> Coord {
    Coord::new(col, row).unwrap()
}

fn search_with(board: &mut Board, side: Player, max_depth: u8, pruning: bool) -> (Move, i16) {
    let mut context = SearchContext::new(search_config(board.variant(), max_depth, pruning));
    search_best_move(&mut context, board, side).unwrap()
}

/// Plays a game to the end with the engine choosing every move.
fn self_play(board: &mut Board, max_depth: u8) -> GameStatus {
    loop {
        let status = evaluate(board);
        if status.is_over() {
            return status;
        }

        let side = board.turn();
        match choose_best_move(board, side, max_depth) {
            Ok((best_move, _)) => {
                assert!(
                    check_legal(board, side, &best_move).is_ok(),
                    "{} chose illegal move {} on\n{}",
                    side,
                    best_move,
                    board
                );
                best_move.apply_for(board, side).unwrap();
            }
            Err(SearchError::NoAvailableMoves) => {}
            Err(e) => panic!("unexpected search error: {}", e),
        }
        board.set_turn(side.opposite());
    }
}

#[test]
fn test_stacking_ai_blocks_column() {
    // player one holds (1, 0) and (1, 1) and threatens to finish column 1
    let mut board = Board::from_notation("-1,1,0/0,2,0/0,0,0 00111 01111 2").unwrap();

    let (best_move, _) = choose_best_move(&mut board, Player::Two, DEFAULT_MAX_DEPTH).unwrap();

    assert_eq!(
        best_move.coord().col(),
        1,
        "{} does not stop player one's column",
        best_move
    );
}

#[test]
fn test_classic_takes_immediate_win() {
    let mut board = Board::from_notation("1,1,0/-1,-1,0/0,0,0 1").unwrap();

    let (best_move, score) = choose_best_move(&mut board, Player::One, DEFAULT_MAX_DEPTH).unwrap();

    assert_eq!(best_move, Move::place(coord(2, 0)));
    assert_eq!(score, 1);
}

#[test]
fn test_classic_ignores_depth_cap() {
    // only (2, 2) stops player two's diagonal; a cap of 0 would stop at (2, 0)
    let mut board = Board::from_notation("-1,1,0/1,-1,0/0,0,0 1").unwrap();

    let (best_move, score) = choose_best_move(&mut board, Player::One, 0).unwrap();

    assert_eq!(best_move, Move::place(coord(2, 2)));
    assert!(score >= 0);
}

#[test]
fn test_stacking_takes_immediate_win() {
    // player two can cover player one's size 1 on (2, 0) to finish row 0
    let mut board = Board::from_notation("-3,-4,1/2,0,0/0,0,0 00111 11001 2").unwrap();

    let (best_move, score) = choose_best_move(&mut board, Player::Two, DEFAULT_MAX_DEPTH).unwrap();

    assert_eq!(score, 1);
    best_move.apply_for(&mut board, Player::Two).unwrap();
    assert_eq!(evaluate(&board), GameStatus::Win(Player::Two));
}

#[test]
fn test_search_for_side_not_to_move() {
    let mut board = Board::from_notation("1,1,0/-1,-1,0/0,0,0 1").unwrap();
    let original = board.clone();

    let (best_move, score) = choose_best_move(&mut board, Player::Two, DEFAULT_MAX_DEPTH).unwrap();

    assert_eq!(score, 1, "player two wins when given the move");
    assert_eq!(board, original, "the turn must be restored");
    assert!(check_legal(&board, Player::Two, &best_move).is_ok());
}

#[test]
fn test_search_errors() {
    let mut full = Board::from_notation("1,1,-1/-1,1,1/1,-1,-1 1").unwrap();
    assert_eq!(
        choose_best_move(&mut full, Player::One, DEFAULT_MAX_DEPTH),
        Err(SearchError::GameOver)
    );

    // player one has nothing left to play, player two still holds a size 5
    let mut stuck = Board::from_notation("2,-1,3/4,-2,-3/-4,5,0 00000 00001 1").unwrap();
    assert_eq!(
        choose_best_move(&mut stuck, Player::One, DEFAULT_MAX_DEPTH),
        Err(SearchError::NoAvailableMoves)
    );
    assert!(choose_best_move(&mut stuck, Player::Two, DEFAULT_MAX_DEPTH).is_ok());
}

#[test]
fn test_classic_pruning_matches_minimax() {
    for notation in [
        "0,0,0/0,0,0/0,0,0 1",
        "1,0,0/0,0,0/0,0,0 2",
        "-1,1,0/1,-1,0/0,0,0 1",
        "1,0,-1/0,0,0/0,0,0 1",
    ]
    .iter()
    {
        let mut board = Board::from_notation(notation).unwrap();
        let side = board.turn();

        let pruned = search_with(&mut board, side, DEFAULT_MAX_DEPTH, true);
        let plain = search_with(&mut board, side, DEFAULT_MAX_DEPTH, false);

        assert_eq!(pruned, plain, "pruning changed the result for {}", notation);
    }
}

#[test]
fn test_stacking_pruning_matches_minimax_within_cap() {
    for notation in [
        "-1,1,0/0,2,0/0,0,0 00111 01111 2",
        "0,0,0/0,0,0/0,0,0 11111 11111 1",
        "3,-2,0/0,-4,0/0,0,1 01011 10101 1",
    ]
    .iter()
    {
        for max_depth in 1..=2 {
            let mut board = Board::from_notation(notation).unwrap();
            let side = board.turn();

            let pruned = search_with(&mut board, side, max_depth, true);
            let plain = search_with(&mut board, side, max_depth, false);

            assert_eq!(
                pruned, plain,
                "pruning changed the result for {} at depth {}",
                notation, max_depth
            );
        }
    }
}

#[test]
fn test_search_restores_board() {
    for notation in [
        "0,0,0/0,0,0/0,0,0 1",
        "-1,1,0/0,2,0/0,0,0 00111 01111 2",
        "3,-2,0/0,-4,0/0,0,1 01011 10101 1",
    ]
    .iter()
    {
        let mut board = Board::from_notation(notation).unwrap();
        let original = board.clone();
        let side = board.turn();

        let _ = choose_best_move(&mut board, side, 3).unwrap();

        assert_eq!(board, original, "search left {} modified", notation);
        assert_eq!(board.placement_depth(), 0);
    }
}

#[test]
fn test_search_records_stats() {
    let mut board = Board::new(Variant::Classic);
    let mut context = SearchContext::new(search_config(Variant::Classic, DEFAULT_MAX_DEPTH, true));

    let (best_move, score) = search_best_move(&mut context, &mut board, Player::One).unwrap();

    assert_eq!(context.last_score(), Some(score));
    assert_eq!(context.last_best_move(), Some(&best_move));
    assert!(context.searched_position_count() > 0);
    assert!(context.cutoff_count() > 0);
}

#[test]
fn test_classic_self_play_is_draw() {
    let mut board = Board::new(Variant::Classic);
    assert_eq!(self_play(&mut board, DEFAULT_MAX_DEPTH), GameStatus::Draw);
}

#[test]
fn test_classic_empty_board_is_draw() {
    let mut board = Board::new(Variant::Classic);
    let (_, score) = choose_best_move(&mut board, Player::One, DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(score, 0);
}

#[test]
fn test_stacking_self_play_finishes() {
    let mut board = Board::new(Variant::Stacking);
    let status = self_play(&mut board, 2);
    assert!(status.is_over());
}
