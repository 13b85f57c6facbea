//! Random mazes for benchmarking and for the batch runner's random mode.
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use log::{debug, info};
use rand::Rng;

/// Share of cells turned into walls when no probability is given.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;
/// How many boards [random_solvable_maze] draws before giving up.
pub const MAX_ATTEMPTS: usize = 1000;

/// Builds a board with the start in the top-left corner, the end in the bottom-right corner and
/// every other cell a wall with probability `wall_probability`.
///
/// # Panics
/// Panics if the board has fewer than two cells or the probability is outside `[0, 1]`.
pub fn random_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    wall_probability: f64,
    rng: &mut R,
) -> PathingGrid {
    assert!(
        width * height >= 2,
        "a maze needs room for distinct start and end cells"
    );
    let mut grid = PathingGrid::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.gen_bool(wall_probability) {
                grid.set_wall(Point::new(x, y), true);
            }
        }
    }
    grid.set_start(Point::new(0, 0));
    grid.set_end(Point::new(width as i32 - 1, height as i32 - 1));
    grid.update();
    grid
}

/// Draws random boards until the end can be reached from the start. Returns [None] after
/// [MAX_ATTEMPTS] failed draws, which only happens for dense wall probabilities.
pub fn random_solvable_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    wall_probability: f64,
    rng: &mut R,
) -> Option<PathingGrid> {
    for attempt in 1..=MAX_ATTEMPTS {
        let grid = random_maze(width, height, wall_probability, rng);
        let (start, end) = (grid.start()?, grid.end()?);
        if grid.reachable(&start, &end) {
            info!("Generated solvable {width}x{height} maze after {attempt} attempt(s)");
            return Some(grid);
        }
        debug!("Attempt {attempt}: end not reachable, redrawing");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn corners_are_start_and_end() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = random_maze(6, 4, 0.5, &mut rng);
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.end(), Some(Point::new(5, 3)));
        assert!(!grid.components_dirty);
    }

    #[test]
    fn probability_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let open = random_maze(5, 5, 0.0, &mut rng);
        assert_eq!(open.cells().filter(|c| c.is_wall()).count(), 0);
        let full = random_maze(5, 5, 1.0, &mut rng);
        // Everything but the two endpoints is a wall.
        assert_eq!(full.cells().filter(|c| c.is_wall()).count(), 23);
        assert!(random_solvable_maze(5, 5, 1.0, &mut rng).is_none());
    }

    #[test]
    fn solvable_maze_is_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_solvable_maze(12, 12, 0.4, &mut rng).unwrap();
        assert!(grid.reachable(&grid.start().unwrap(), &grid.end().unwrap()));
    }
}
