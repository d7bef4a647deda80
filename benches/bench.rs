use backtracking::problems::magic_square::MagicSquare;
use backtracking::problems::n_queens::NQueens;
use backtracking::problems::sudoku::{Board, EXAMPLE_NINE, solve_board};
use backtracking::problems::{
    knights_tour, permutations, string_pattern_matching, subset_sum,
};
use backtracking::search::Backtracker;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-queens");
    for n in [6, 8] {
        group.bench_function(format!("all solutions n={n}"), |b| {
            b.iter(|| {
                let mut search = Backtracker::new(NQueens::new(black_box(n)).unwrap());
                black_box(search.solve_all())
            });
        });
        group.bench_function(format!("count n={n}"), |b| {
            b.iter(|| {
                let mut search = Backtracker::new(NQueens::new(black_box(n)).unwrap());
                black_box(search.count())
            });
        });
    }
    group.finish();
}

fn bench_sudoku(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku");
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("example 9x9", |b| {
        b.iter(|| {
            let mut board = Board::from(EXAMPLE_NINE);
            black_box(solve_board(&mut board).unwrap());
            board
        });
    });
    group.finish();
}

fn bench_permutations(c: &mut Criterion) {
    let items: Vec<u32> = (0..7).collect();
    c.bench_function("permutations of 7", |b| {
        b.iter(|| black_box(permutations(black_box(&items))));
    });
}

fn bench_subset_sum(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    let nums: Vec<i64> = (0..18).map(|_| rng.i64(1..=40)).collect();
    let target = nums.iter().sum::<i64>() / 3;

    c.bench_function("subset sum of 18 random numbers", |b| {
        b.iter(|| black_box(subset_sum(black_box(&nums), black_box(target))));
    });
}

fn bench_magic_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("magic square");
    group.bench_function("first n=3", |b| {
        b.iter(|| black_box(Backtracker::new(MagicSquare::new(3).unwrap()).solve()));
    });
    group.bench_function("all n=3", |b| {
        b.iter(|| black_box(Backtracker::new(MagicSquare::new(3).unwrap()).solve_all()));
    });
    group.finish();
}

fn bench_knights_tour(c: &mut Criterion) {
    c.bench_function("knight's tour n=5", |b| {
        b.iter(|| black_box(knights_tour(black_box(5)).unwrap()));
    });
}

fn bench_pattern(c: &mut Criterion) {
    let text = "a".repeat(18);
    let pattern = "a*".repeat(6) + "b";

    let mut group = c.benchmark_group("pattern matching");
    group.bench_function("mississippi", |b| {
        b.iter(|| black_box(string_pattern_matching("mississippi", "mis*is*ip*.")));
    });
    group.bench_function("pathological star run", |b| {
        b.iter(|| black_box(string_pattern_matching(black_box(&text), black_box(&pattern))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_queens,
    bench_sudoku,
    bench_permutations,
    bench_subset_sum,
    bench_magic_square,
    bench_knights_tour,
    bench_pattern
);
criterion_main!(benches);
