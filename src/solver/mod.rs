use crate::error::{ParseAlgorithmError, SearchError};
use crate::pathing_grid::PathingGrid;
use crate::state::{NoopObserver, SearchState, StepObserver};
use core::fmt;
use grid_util::point::Point;
use log::debug;
use std::str::FromStr;

pub mod astar;
mod best_first;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// The four searches the visualizer offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the algorithm always returns a shortest path.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Runs this algorithm with its default solver settings.
    pub fn search<O: StepObserver>(
        self,
        grid: &PathingGrid,
        start: Option<Point>,
        end: Option<Point>,
        observer: &mut O,
    ) -> SearchOutcome {
        match self {
            Algorithm::Bfs => BfsSolver.search(grid, start, end, observer),
            Algorithm::Dfs => DfsSolver.search(grid, start, end, observer),
            Algorithm::Dijkstra => DijkstraSolver.search(grid, start, end, observer),
            Algorithm::AStar => AstarSolver::new().search(grid, start, end, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Everything a search leaves behind: the path (or why there is none) and the final per-cell
/// state, which is what a visualizer draws.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub state: SearchState,
    pub result: Result<Vec<Point>, SearchError>,
}

impl SearchOutcome {
    /// The path from the cell after the start up to and including the end.
    pub fn path(&self) -> Option<&[Point]> {
        self.result.as_deref().ok()
    }
    pub fn into_path(self) -> Option<Vec<Point>> {
        self.result.ok()
    }
    /// Number of steps on the path.
    pub fn distance(&self) -> Option<usize> {
        self.path().map(<[Point]>::len)
    }
    pub fn is_found(&self) -> bool {
        self.result.is_ok()
    }
}

pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Searches from `start` to `end`, both known to be on the grid, recording progress in
    /// `state` and notifying `observer` once per unit of work. Returns [None] if the frontier
    /// runs dry before the end is reached.
    fn solve<O: StepObserver>(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
        state: &mut SearchState,
        observer: &mut O,
    ) -> Option<Vec<Point>>;

    /// Validates the endpoints, allocates fresh search state and runs [solve](Self::solve).
    fn search<O: StepObserver>(
        &self,
        grid: &PathingGrid,
        start: Option<Point>,
        end: Option<Point>,
        observer: &mut O,
    ) -> SearchOutcome {
        let algorithm = self.algorithm();
        let mut state = SearchState::new(grid);
        let result = match (start, end) {
            (Some(start), Some(end)) => {
                match [start, end].into_iter().find(|p| !grid.in_bounds(*p)) {
                    Some(outside) => Err(SearchError::OutOfBounds(outside)),
                    None => self
                        .solve(grid, start, end, &mut state, observer)
                        .ok_or(SearchError::Unreachable),
                }
            }
            _ => Err(SearchError::MissingEndpoints),
        };
        match &result {
            Ok(path) => debug!("{algorithm}: found path of length {}", path.len()),
            Err(e) => debug!("{algorithm}: {e}"),
        }
        SearchOutcome {
            algorithm,
            state,
            result,
        }
    }

    /// Convenience wrapper for headless callers that only want the path.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        self.search(grid, Some(start), Some(goal), &mut NoopObserver)
            .into_path()
    }
}

/// Breadth-first search; see [BfsSolver].
pub fn bfs<O: StepObserver>(
    grid: &PathingGrid,
    start: Option<Point>,
    end: Option<Point>,
    observer: &mut O,
) -> SearchOutcome {
    BfsSolver.search(grid, start, end, observer)
}

/// Depth-first search; see [DfsSolver].
pub fn dfs<O: StepObserver>(
    grid: &PathingGrid,
    start: Option<Point>,
    end: Option<Point>,
    observer: &mut O,
) -> SearchOutcome {
    DfsSolver.search(grid, start, end, observer)
}

/// Dijkstra's algorithm; see [DijkstraSolver].
pub fn dijkstra<O: StepObserver>(
    grid: &PathingGrid,
    start: Option<Point>,
    end: Option<Point>,
    observer: &mut O,
) -> SearchOutcome {
    DijkstraSolver.search(grid, start, end, observer)
}

/// A* with the Manhattan heuristic; see [AstarSolver].
pub fn astar<O: StepObserver>(
    grid: &PathingGrid,
    start: Option<Point>,
    end: Option<Point>,
    observer: &mut O,
) -> SearchOutcome {
    AstarSolver::new().search(grid, start, end, observer)
}
