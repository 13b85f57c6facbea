use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::bfs::{frontier_search, FrontierOrder};
use crate::solver::{Algorithm, GridSolver};
use crate::state::{SearchState, StepObserver};

/// Depth-first search. Finds some path when one exists, with no guarantee that it is short.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn solve<O: StepObserver>(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
        state: &mut SearchState,
        observer: &mut O,
    ) -> Option<Vec<Point>> {
        frontier_search(grid, start, end, state, observer, FrontierOrder::Lifo)
    }
}
