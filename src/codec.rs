//! The plain-text maze format: one line per row, one character per cell.
//!
//! | char | cell  |
//! |------|-------|
//! | `w`  | wall  |
//! | `s`  | start |
//! | `e`  | end   |
//! | `.`  | open  |
//!
//! Any other character reads as an open cell, and rows shorter than the widest one are padded with
//! open cells.
use crate::cell::CellRole;
use crate::error::MazeError;
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Parses a maze. If several start or end markers are present the last one wins.
pub fn decode(text: &str) -> Result<PathingGrid, MazeError> {
    let rows: Vec<&str> = text.lines().collect();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    if rows.is_empty() || width == 0 {
        return Err(MazeError::EmptyMaze);
    }
    let mut grid = PathingGrid::new(width, rows.len());
    let (mut starts, mut ends) = (0, 0);
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let role = CellRole::from_symbol(c);
            match role {
                CellRole::Open => continue,
                CellRole::Start => starts += 1,
                CellRole::End => ends += 1,
                CellRole::Wall => {}
            }
            grid.set_role(Point::new(x as i32, y as i32), role);
        }
    }
    if starts != 1 || ends != 1 {
        warn!("Maze has {starts} start and {ends} end markers, expected one of each");
    }
    grid.update();
    Ok(grid)
}

/// Renders a grid in the maze format, every row terminated by a newline.
pub fn encode(grid: &PathingGrid) -> String {
    let mut text = grid
        .rows()
        .map(|row| row.iter().map(|c| c.role.symbol()).collect::<String>())
        .join("\n");
    text.push('\n');
    text
}

/// Reads and parses a maze file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PathingGrid, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MazeError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MazeError::Io(e),
    })?;
    let grid = decode(&text)?;
    info!(
        "Loaded {}x{} maze from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Writes a grid to a maze file.
pub fn save<P: AsRef<Path>>(grid: &PathingGrid, path: P) -> Result<(), MazeError> {
    fs::write(path, encode(grid))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_roles() {
        let grid = decode("s.w\n.we\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.end(), Some(Point::new(2, 1)));
        assert!(grid.is_wall(Point::new(2, 0)));
        assert!(grid.is_wall(Point::new(1, 1)));
        assert_eq!(grid.role(Point::new(1, 0)), Some(CellRole::Open));
    }

    #[test]
    fn short_and_blank_lines_are_open() {
        let grid = decode("sww\n\nw\n..e").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 4));
        assert!(grid.cells().skip(3).take(3).all(|c| c.role == CellRole::Open));
        assert!(grid.is_wall(Point::new(0, 2)));
        assert!(!grid.is_wall(Point::new(2, 2)));
        assert_eq!(grid.end(), Some(Point::new(2, 3)));
    }

    #[test]
    fn unknown_characters_are_open() {
        let grid = decode("s#x\r\n? e\r\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cells().filter(|c| c.is_wall()).count(), 0);
        assert_eq!(grid.end(), Some(Point::new(2, 1)));
    }

    #[test]
    fn last_start_wins() {
        let grid = decode("s.s\n..e\n").unwrap();
        assert_eq!(grid.start(), Some(Point::new(2, 0)));
        assert_eq!(grid.cells().filter(|c| c.is_start()).count(), 1);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(decode(""), Err(MazeError::EmptyMaze)));
        assert!(matches!(decode("\n\n"), Err(MazeError::EmptyMaze)));
    }

    #[test]
    fn encode_round_trip() {
        let text = "s..w\n.w.w\n...e\n";
        let grid = decode(text).unwrap();
        assert_eq!(encode(&grid), text);
        let again = decode(&encode(&grid)).unwrap();
        assert_eq!(again.start(), grid.start());
        assert_eq!(again.end(), grid.end());
        assert!(again.cells().zip(grid.cells()).all(|(a, b)| a == b));
    }

    #[test]
    fn decoded_components_are_current() {
        let grid = decode("sw.\n.w.\n.we\n").unwrap();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 2)));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = std::env::temp_dir().join("grid_search_missing_maze_file.txt");
        match load(&path) {
            Err(MazeError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn save_then_load() {
        let mut grid = PathingGrid::new(4, 2);
        grid.set_start(Point::new(0, 1));
        grid.set_end(Point::new(3, 0));
        grid.set_wall(Point::new(1, 1), true);
        let path = std::env::temp_dir().join(format!("grid_search_save_{}.txt", std::process::id()));
        save(&grid, &path).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(encode(&loaded), encode(&grid));
    }
}
