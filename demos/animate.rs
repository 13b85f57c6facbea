use grid_search::{Algorithm, PathingGrid, SearchState, Step};
use grid_util::point::Point;
use std::thread;
use std::time::Duration;

// Animates a search in the terminal by redrawing the board after every step, the way the
// interactive visualizer repaints its window. Pass an algorithm name (BFS, DFS, Dijkstra, A*)
// as the first argument; the default is A*.

const FRAME_DELAY: Duration = Duration::from_millis(40);

fn main() {
    let algorithm = std::env::args()
        .nth(1)
        .map(|name| name.parse::<Algorithm>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2)
        })
        .unwrap_or(Algorithm::AStar);

    let mut grid = PathingGrid::square(12);
    grid.set_start(Point::new(1, 1));
    grid.set_end(Point::new(10, 9));
    for y in 0..9 {
        grid.set_wall(Point::new(5, y), true);
    }
    for x in 6..11 {
        grid.set_wall(Point::new(x, 6), true);
    }

    let mut frames = 0;
    let mut redraw = |grid: &PathingGrid, state: &SearchState, step: Step| {
        frames += 1;
        // Clear the terminal and move the cursor home before drawing the frame.
        print!("\x1b[2J\x1b[H");
        println!("{algorithm} step {frames}: {step:?}");
        print!("{}", state.render(grid));
        thread::sleep(FRAME_DELAY);
    };
    let outcome = algorithm.search(&grid, grid.start(), grid.end(), &mut redraw);
    match outcome.distance() {
        Some(d) => println!("Path of {d} steps, {} cells checked", outcome.state.checked_count()),
        None => println!("No path found"),
    }
}
