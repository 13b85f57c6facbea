//! # grid_search
//!
//! The search engine behind a grid pathfinding visualizer. A [PathingGrid] holds walls, a start
//! and an end; four classic searches run over it with 4-directional unit-cost moves:
//!
//! - [breadth-first search](solver::bfs::BfsSolver), shortest in steps
//! - [depth-first search](solver::dfs::DfsSolver), some path, not necessarily short
//! - [Dijkstra's algorithm](solver::dijkstra::DijkstraSolver), shortest, driven by a priority queue
//! - [A*](solver::astar::AstarSolver) with the
//!   [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic
//!
//! Every search allocates its own [SearchState], so a grid can be searched any number of times
//! without resetting anything. A [StepObserver] is called after each unit of work, which is how a
//! visualizer animates the search; pass [NoopObserver] to run at full speed.
//!
//! The [codec] module reads and writes the plain-text maze format, and [comparison] times all four
//! algorithms on one maze.
pub mod cell;
pub mod codec;
pub mod comparison;
pub mod error;
pub mod maze;
pub mod pathing_grid;
pub mod solver;
pub mod state;

use grid_util::point::Point;

pub use cell::{Cell, CellRole};
pub use error::{MazeError, SearchError};
pub use pathing_grid::PathingGrid;
pub use solver::{astar, bfs, dfs, dijkstra, Algorithm, GridSolver, SearchOutcome};
pub use state::{NoopObserver, SearchState, Step, StepObserver};

/// Number of orthogonal steps between two points.
pub fn manhattan(p1: &Point, p2: &Point) -> u32 {
    p1.x.abs_diff(p2.x) + p1.y.abs_diff(p2.y)
}
