use grid_util::point::Point;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a search produced no path. Every variant means "no path"; the split lets a caller tell an
/// unconfigured board from a blocked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start or end is not set")]
    MissingEndpoints,
    #[error("endpoint {0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("end cannot be reached from start")]
    Unreachable,
}

/// Failures at the maze file boundary.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze file {} not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("maze contains no rows")]
    EmptyMaze,
    #[error("failed to access maze file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to scan maze directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?}, expected one of BFS, DFS, Dijkstra, A*")]
pub struct ParseAlgorithmError(pub String);
