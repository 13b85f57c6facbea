use std::collections::VecDeque;

use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::{Algorithm, GridSolver};
use crate::state::{SearchState, Step, StepObserver};

/// Which end of the frontier the next cell is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrontierOrder {
    /// Queue, giving breadth-first order.
    Fifo,
    /// Stack, giving depth-first order.
    Lifo,
}

/// Uniform-cost frontier search shared by BFS and DFS. Cells are marked checked when they are
/// pushed, so every cell enters the frontier once and gets exactly one parent.
pub(crate) fn frontier_search<O: StepObserver>(
    grid: &PathingGrid,
    start: Point,
    end: Point,
    state: &mut SearchState,
    observer: &mut O,
    order: FrontierOrder,
) -> Option<Vec<Point>> {
    let start_ix = grid.get_ix_point(&start);
    let end_ix = grid.get_ix_point(&end);
    state.get_mut(start_ix).checked = true;
    let mut frontier = VecDeque::from([start_ix]);
    loop {
        let ix = match order {
            FrontierOrder::Fifo => frontier.pop_front(),
            FrontierOrder::Lifo => frontier.pop_back(),
        }?;
        let point = grid.point(ix);
        observer.on_step(grid, state, Step::Expand(point));
        if ix == end_ix {
            return Some(state.trace_path(grid, start_ix, end_ix, observer));
        }
        for n in grid.open_neighbours(&point) {
            let n_ix = grid.get_ix_point(&n);
            let node = state.get_mut(n_ix);
            if !node.checked {
                node.checked = true;
                node.parent = Some(ix);
                frontier.push_back(n_ix);
            }
        }
    }
}

/// Breadth-first search. On a uniform-cost grid the first time the end leaves the queue its path
/// has the fewest possible steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn solve<O: StepObserver>(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
        state: &mut SearchState,
        observer: &mut O,
    ) -> Option<Vec<Point>> {
        frontier_search(grid, start, end, state, observer, FrontierOrder::Fifo)
    }
}
