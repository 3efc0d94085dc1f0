use criterion::{criterion_group, criterion_main, Criterion};
use dlx_matrix::{ColumnChoice, Matrix, SearchConfig, Solution};
use std::hint::black_box;
use std::ops::ControlFlow;

/// Builds the matrix of domino placements on an `m` by `n` board.
fn dominoes(m: usize, n: usize) -> Matrix {
    let mut matrix = Matrix::new(m * n);
    for x in 0..m {
        for y in 0..n {
            if y + 1 < n {
                matrix.add_row([x * n + y, x * n + y + 1]).unwrap();
            }
            if x + 1 < m {
                matrix.add_row([x * n + y, (x + 1) * n + y]).unwrap();
            }
        }
    }
    matrix
}

/// Builds the matrix of the $n$-queens problem, with one column per rank and
/// file. The diagonals may stay empty, so they get a slack row each.
fn queens(n: usize) -> Matrix {
    let diagonals = 2 * n - 1;
    let mut matrix = Matrix::new(2 * n + 2 * diagonals);
    for rank in 0..n {
        for file in 0..n {
            matrix
                .add_row([
                    rank,
                    n + file,
                    2 * n + rank + file,
                    2 * n + diagonals + rank + n - 1 - file,
                ])
                .unwrap();
        }
    }
    for diagonal in 2 * n..2 * n + 2 * diagonals {
        matrix.add_row([diagonal]).unwrap();
    }
    matrix
}

fn bench_dominoes(c: &mut Criterion) {
    let mut matrix = dominoes(6, 6);
    c.bench_function("dominoes 6x6 - count", |b| {
        b.iter(|| black_box(matrix.search(usize::MAX)))
    });
    c.bench_function("dominoes 6x6 - first solution", |b| {
        b.iter(|| black_box(matrix.search(1)))
    });
}

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("8 queens - column choice");
    let mut matrix = queens(8);
    for (name, choice) in [
        ("minimum size", ColumnChoice::MinimumSize),
        ("leftmost", ColumnChoice::Leftmost),
    ] {
        let config = SearchConfig::new().with_column_choice(choice);
        group.bench_function(name, |b| {
            b.iter(|| {
                let report = matrix.search_with_config(&config, &mut |solution: &Solution<'_>| {
                    black_box(solution.len());
                    ControlFlow::Continue(())
                });
                black_box(report)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dominoes, bench_queens);

criterion_main!(benches);
