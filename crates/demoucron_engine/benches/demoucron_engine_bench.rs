use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use demoucron_engine::{
    matrix::Matrix,
    objective::{Mode, NoEdgePolicy, Objective},
    solver::{demoucron::DemoucronSolver, relaxation::relax},
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn random_matrix(n: usize, density: f64) -> Matrix {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut matrix = Matrix::filled(n, f64::INFINITY).unwrap();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                matrix.set_weight(i, j, 0.0);
            } else if rng.random_bool(density) {
                matrix.set_weight(i, j, rng.random_range(1..100) as f64);
            }
        }
    }
    matrix
}

fn relaxation_benchmark(c: &mut Criterion) {
    let objective = Objective::new(Mode::Minimize, NoEdgePolicy::default());
    let mut group = c.benchmark_group("relax");

    for n in [16, 64, 128] {
        let matrix = random_matrix(n, 0.3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, matrix| {
            b.iter(|| relax(black_box(matrix.clone()), &objective))
        });
    }

    group.finish();
}

fn solve_benchmark(c: &mut Criterion) {
    let solver = DemoucronSolver::default();
    let matrix = random_matrix(64, 0.1);

    c.bench_function("solve n=64 sparse", |b| {
        b.iter(|| solver.solve_matrix(black_box(matrix.clone()), Mode::Minimize))
    });
}

criterion_group!(benches, relaxation_benchmark, solve_benchmark);
criterion_main!(benches);
