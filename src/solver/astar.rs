use grid_util::point::Point;

use crate::manhattan;
use crate::pathing_grid::PathingGrid;
use crate::solver::best_first::{open_queue, SmallestCostHolder};
use crate::solver::{Algorithm, GridSolver};
use crate::state::{SearchState, Step, StepObserver};

/// A* with the Manhattan distance as heuristic, which is admissible and consistent on a
/// 4-connected unit-cost grid.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 give Weighted A*, which tends to expand fewer cells
    /// but may return paths longer than the shortest. Must be finite and at least 0.0; anything
    /// else truncates the heuristic to zero and the search degrades to Dijkstra's.
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        debug_assert!(
            heuristic_factor.is_finite() && heuristic_factor >= 0.0,
            "heuristic factor must be finite and non-negative, got {heuristic_factor}"
        );
        AstarSolver { heuristic_factor }
    }

    /// Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        (manhattan(p1, p2) as f32 * self.heuristic_factor) as u32
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
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
        let mut open = vec![false; grid.len()];
        let mut closed = vec![false; grid.len()];

        let h = self.heuristic(&start, &end);
        {
            let node = state.get_mut(start_ix);
            node.g = Some(0);
            node.h = Some(h);
            node.f = Some(h);
            node.checked = true;
        }
        open[start_ix] = true;
        let mut to_see = open_queue(start_ix, h);

        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            // Skip entries for closed cells and entries whose g has since improved.
            if closed[index] || state.get(index).g != Some(cost) {
                continue;
            }
            let point = grid.point(index);
            observer.on_step(grid, state, Step::Expand(point));
            if index == end_ix {
                return Some(state.trace_path(grid, start_ix, end_ix, observer));
            }
            open[index] = false;
            closed[index] = true;

            let new_g = cost + 1;
            for n in grid.open_neighbours(&point) {
                let n_ix = grid.get_ix_point(&n);
                if closed[n_ix] {
                    continue;
                }
                let node = state.get_mut(n_ix);
                if open[n_ix] && node.g.is_some_and(|g| new_g >= g) {
                    continue;
                }
                let h = self.heuristic(&n, &end);
                node.g = Some(new_g);
                node.h = Some(h);
                node.f = Some(new_g + h);
                node.parent = Some(index);
                if !open[n_ix] {
                    node.checked = true;
                    open[n_ix] = true;
                }
                to_see.push(SmallestCostHolder {
                    estimated_cost: new_g + h,
                    cost: new_g,
                    index: n_ix,
                });
            }
        }
        None
    }
}
