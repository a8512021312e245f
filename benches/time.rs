//! Criterion benchmarks measure time of the full move search.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use noughts::board::{Board, Player};
use noughts::search::choose_move;

fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    let positions = [
        ("empty board", Board::new(), Player::One),
        ("reply to center", Board::try_from(".../.1./...").unwrap(), Player::Two),
        ("midgame", Board::try_from("1.2/.1./...").unwrap(), Player::Two),
    ];
    for (name, board, player) in &positions {
        group.bench_with_input(BenchmarkId::new("choose_move", name), board, |b, board| {
            b.iter(|| choose_move(std::hint::black_box(board), *player));
        });
    }
    group.finish();
}

criterion_group! {
    name = minimax;
    config = Criterion::default().sample_size(10);
    targets = search
}

criterion_main!(minimax);
