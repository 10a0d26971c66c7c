use gobang::board::Board;
use gobang::evaluate::Evaluator;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDGAME: &str = "\
...............\
/...............\
/...............\
/...............\
/.....O.........\
/......XO.......\
/.....XXXO......\
/......OXX......\
/.....O..XO.....\
/...............\
/...............\
/...............\
/...............\
/...............\
/...............";

fn criterion_benchmark(c: &mut Criterion) {
    let evaluator = Evaluator::new();
    let empty = Board::default();
    let midgame: Board = MIDGAME.parse().expect("valid position");

    c.bench_function("evaluate empty 15x15", |b| {
        b.iter(|| evaluator.score(black_box(&empty)))
    });
    c.bench_function("evaluate midgame 15x15", |b| {
        b.iter(|| evaluator.score(black_box(&midgame)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
