use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::best_first::{open_queue, SmallestCostHolder};
use crate::solver::{Algorithm, GridSolver};
use crate::state::{SearchState, Step, StepObserver};

/// Dijkstra's algorithm with unit step costs. The unvisited set is a binary heap of tentative
/// distances; a cell counts as checked once it is selected from the heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn solve<O: StepObserver>(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
        state: &mut SearchState,
        observer: &mut O,
    ) -> Option<Vec<Point>> {
        let start_ix = grid.get_ix_point(&start);
        let end_ix = grid.get_ix_point(&end);
        {
            let node = state.get_mut(start_ix);
            node.distance = Some(0);
            node.g = Some(0);
        }
        let mut to_see = open_queue(start_ix, 0);
        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            let node = state.get_mut(index);
            // Skip entries superseded by a shorter distance or already selected.
            if node.checked || node.distance.is_some_and(|d| cost > d) {
                continue;
            }
            node.checked = true;
            let point = grid.point(index);
            observer.on_step(grid, state, Step::Expand(point));
            if index == end_ix {
                return Some(state.trace_path(grid, start_ix, end_ix, observer));
            }
            let candidate = cost + 1;
            for n in grid.open_neighbours(&point) {
                let n_ix = grid.get_ix_point(&n);
                let neighbour = state.get_mut(n_ix);
                if neighbour.distance.map_or(true, |d| candidate < d) {
                    neighbour.distance = Some(candidate);
                    neighbour.g = Some(candidate);
                    neighbour.parent = Some(index);
                    to_see.push(SmallestCostHolder {
                        estimated_cost: candidate,
                        cost: candidate,
                        index: n_ix,
                    });
                }
            }
        }
        None
    }
}
