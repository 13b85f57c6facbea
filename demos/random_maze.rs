use grid_search::codec::encode;
use grid_search::comparison::compare;
use grid_search::maze::{random_solvable_maze, DEFAULT_WALL_PROBABILITY};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Generates a random NxN maze whose end is reachable from its start, prints it in the maze file
// format and compares the four algorithms on it. Usage: random_maze [N] [seed]

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(20);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    match random_solvable_maze(n, n, DEFAULT_WALL_PROBABILITY, &mut rng) {
        Some(grid) => {
            print!("{}", encode(&grid));
            println!();
            print!("{}", compare(&grid));
        }
        None => println!("Could not generate a solvable {n}x{n} maze"),
    }
}
