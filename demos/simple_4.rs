use grid_search::{bfs, NoopObserver, PathingGrid};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S# |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood

fn main() {
    let mut grid = PathingGrid::new(3, 3);
    grid.set_start(Point::new(0, 0));
    grid.set_end(Point::new(2, 2));
    grid.set_wall(Point::new(1, 0), true);
    grid.set_wall(Point::new(1, 1), true);
    println!("{}", grid);
    let outcome = bfs(&grid, grid.start(), grid.end(), &mut NoopObserver);
    match outcome.path() {
        Some(path) => {
            println!("Path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("No path: {:?}", outcome.result),
    }
}
