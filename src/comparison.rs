//! Batch comparison: run every algorithm on one maze and time it.
use crate::codec;
use crate::error::MazeError;
use crate::pathing_grid::PathingGrid;
use crate::solver::Algorithm;
use crate::state::NoopObserver;
use core::fmt;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::{info, warn};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Order in which the batch runner executes the algorithms.
pub const COMPARISON_ORDER: [Algorithm; 4] = [
    Algorithm::Dfs,
    Algorithm::Bfs,
    Algorithm::AStar,
    Algorithm::Dijkstra,
];

/// Extension of maze files picked up by [compare_directory].
pub const MAZE_EXTENSION: &str = "txt";

/// Result of one timed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRecord {
    /// Path length in steps, or [None] if no path was found.
    pub distance: Option<usize>,
    pub elapsed: Duration,
    /// Cells left checked when the search finished.
    pub checked: usize,
}

impl RunRecord {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    algorithm: &'a str,
    distance: Option<usize>,
    elapsed_ms: f64,
    checked: usize,
}

/// Per-algorithm results, kept in the order the algorithms ran.
#[derive(Clone, Debug, Default)]
pub struct ComparisonReport {
    records: FxIndexMap<Algorithm, RunRecord>,
}

impl ComparisonReport {
    pub fn get(&self, algorithm: Algorithm) -> Option<&RunRecord> {
        self.records.get(&algorithm)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Algorithm, &RunRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The algorithm that finished fastest among those that found a path.
    pub fn fastest(&self) -> Option<Algorithm> {
        self.records
            .iter()
            .filter(|(_, r)| r.distance.is_some())
            .min_by_key(|(_, r)| r.elapsed)
            .map(|(a, _)| *a)
    }

    /// Writes one CSV row per algorithm, for plotting elsewhere.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (algorithm, record) in &self.records {
            csv_writer.serialize(CsvRow {
                algorithm: algorithm.name(),
                distance: record.distance,
                elapsed_ms: record.elapsed_ms(),
                checked: record.checked,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (algorithm, record) in &self.records {
            match record.distance {
                Some(d) => write!(f, "{algorithm}: {d}")?,
                None => write!(f, "{algorithm}: None")?,
            }
            writeln!(f, " in {:.3}ms", record.elapsed_ms())?;
        }
        Ok(())
    }
}

/// Runs every algorithm in [COMPARISON_ORDER] between the grid's start and end.
pub fn compare(grid: &PathingGrid) -> ComparisonReport {
    let mut report = ComparisonReport::default();
    for algorithm in COMPARISON_ORDER {
        let before = Instant::now();
        let outcome = algorithm.search(grid, grid.start(), grid.end(), &mut NoopObserver);
        let elapsed = before.elapsed();
        report.records.insert(
            algorithm,
            RunRecord {
                distance: outcome.distance(),
                elapsed,
                checked: outcome.state.checked_count(),
            },
        );
    }
    report
}

/// Loads a maze file and compares the algorithms on it.
pub fn compare_file<P: AsRef<Path>>(path: P) -> Result<ComparisonReport, MazeError> {
    let grid = codec::load(path)?;
    Ok(compare(&grid))
}

/// Compares the algorithms on every maze file below `root`, sorted by path. Files that cannot be
/// read or hold no maze are logged and skipped; a failure to walk the directory itself is returned.
pub fn compare_directory<P: AsRef<Path>>(
    root: P,
) -> Result<Vec<(PathBuf, ComparisonReport)>, MazeError> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(MazeError::NotFound {
            path: root.to_path_buf(),
        });
    }
    let mut reports = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == MAZE_EXTENSION)
        {
            match compare_file(path) {
                Ok(report) => reports.push((path.to_path_buf(), report)),
                Err(e) => warn!("Skipping {}: {e}", path.display()),
            }
        }
    }
    info!("Compared {} maze(s) under {}", reports.len(), root.display());
    Ok(reports)
}
