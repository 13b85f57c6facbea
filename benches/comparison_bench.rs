use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::maze::random_solvable_maze;
use grid_search::solver::astar::AstarSolver;
use grid_search::{Algorithm, GridSolver, NoopObserver, PathingGrid};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const GRID_SIZES: [usize; 3] = [10, 40, 100];
const WALL_PROBABILITY: f64 = 0.3;

fn bench_mazes() -> Vec<(usize, PathingGrid)> {
    let mut rng = StdRng::seed_from_u64(0);
    GRID_SIZES
        .iter()
        .filter_map(|&n| random_solvable_maze(n, n, WALL_PROBABILITY, &mut rng).map(|g| (n, g)))
        .collect()
}

fn random_maze_bench(c: &mut Criterion) {
    for (n, grid) in bench_mazes() {
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{n}x{n} random maze, {algorithm}").as_str(), |b| {
                b.iter(|| {
                    black_box(algorithm.search(&grid, grid.start(), grid.end(), &mut NoopObserver))
                })
            });
        }
    }
}

fn weighted_astar_bench(c: &mut Criterion) {
    for (n, grid) in bench_mazes() {
        for factor in [1.0, 1.5] {
            let solver = AstarSolver::with_heuristic_factor(factor);
            c.bench_function(format!("{n}x{n} random maze, A* x{factor}").as_str(), |b| {
                b.iter(|| {
                    black_box(solver.search(&grid, grid.start(), grid.end(), &mut NoopObserver))
                })
            });
        }
    }
}

criterion_group!(benches, random_maze_bench, weighted_astar_bench);
criterion_main!(benches);
