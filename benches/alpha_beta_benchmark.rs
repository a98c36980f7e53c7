use tictactoe::alpha_beta_searcher::SearchContext;
use tictactoe::board::{Board, Player, Variant};
use tictactoe::tictactoe_search::{search_best_move, search_config, DEFAULT_MAX_DEPTH};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const STACKING_BLOCK_COLUMN: &str = "-1,1,0/0,2,0/0,0,0 00111 01111 2";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("classic full search from empty board", |b| {
        b.iter(|| search(Board::new(Variant::Classic), Player::One, DEFAULT_MAX_DEPTH, true))
    });

    c.bench_function("stacking block column at depth 5", |b| {
        b.iter(|| search(stacking_position(), Player::Two, DEFAULT_MAX_DEPTH, true))
    });

    let mut group = c.benchmark_group("stacking pruning");
    group.sample_size(10);
    for &pruning in [true, false].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(pruning), &pruning, |b, &pruning| {
            b.iter(|| search(stacking_position(), Player::Two, 3, pruning))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn stacking_position() -> Board {
    Board::from_notation(STACKING_BLOCK_COLUMN).unwrap()
}

fn search(mut board: Board, side: Player, max_depth: u8, pruning: bool) -> i16 {
    let mut context = SearchContext::new(search_config(board.variant(), max_depth, pruning));
    let (_, score) = search_best_move(&mut context, &mut board, side).unwrap();
    score
}
