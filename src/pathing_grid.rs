use crate::cell::{Cell, CellRole};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Board sizes offered by the interactive driver, as square side lengths.
pub const GRID_SIZES: [usize; 4] = [10, 20, 30, 40];

/// A fixed-size rectangular board of [Cell]s stored in row-major order. The grid tracks where the
/// start and end cells are, and keeps connected components of the open cells in a [UnionFind]
/// structure so reachability can be answered without searching.
///
/// Changing the size of a board means building a new [PathingGrid].
#[derive(Clone, Debug)]
pub struct PathingGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Option<Point>,
    end: Option<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates an open board of the given size.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> PathingGrid {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let cells = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Cell::new(x, y)))
            .collect();
        let mut grid = PathingGrid {
            width,
            height,
            cells,
            start: None,
            end: None,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Creates a square board; see [GRID_SIZES] for the sizes the visualizer offers.
    pub fn square(size: usize) -> PathingGrid {
        PathingGrid::new(size, size)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Row-major index of an in-bounds point.
    pub fn get_ix_point(&self, point: &Point) -> usize {
        debug_assert!(self.in_bounds(*point));
        point.y as usize * self.width + point.x as usize
    }

    /// Inverse of [get_ix_point](Self::get_ix_point).
    pub fn point(&self, ix: usize) -> Point {
        self.cells[ix].pos()
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        if self.in_bounds(point) {
            Some(&self.cells[self.get_ix_point(&point)])
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterates over the rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn role(&self, point: Point) -> Option<CellRole> {
        self.cell(point).map(|c| c.role)
    }

    /// Out-of-bounds points count as walls.
    pub fn is_wall(&self, point: Point) -> bool {
        self.cell(point).map_or(true, Cell::is_wall)
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Assigns a role to a cell. Placing a start or end demotes the previous one to
    /// [CellRole::Open], so a board never holds two of either. Returns false if the point is outside
    /// the board.
    pub fn set_role(&mut self, point: Point, role: CellRole) -> bool {
        if !self.in_bounds(point) {
            return false;
        }
        let ix = self.get_ix_point(&point);
        let previous = self.cells[ix].role;
        if previous == role {
            return true;
        }
        match previous {
            CellRole::Start => self.start = None,
            CellRole::End => self.end = None,
            _ => {}
        }
        match role {
            CellRole::Start => {
                if let Some(old) = self.start.replace(point) {
                    let old_ix = self.get_ix_point(&old);
                    self.cells[old_ix].role = CellRole::Open;
                }
            }
            CellRole::End => {
                if let Some(old) = self.end.replace(point) {
                    let old_ix = self.get_ix_point(&old);
                    self.cells[old_ix].role = CellRole::Open;
                }
            }
            _ => {}
        }
        self.cells[ix].role = role;
        self.update_components(point, previous == CellRole::Wall, role == CellRole::Wall);
        true
    }

    pub fn set_wall(&mut self, point: Point, wall: bool) -> bool {
        self.set_role(point, if wall { CellRole::Wall } else { CellRole::Open })
    }
    pub fn set_start(&mut self, point: Point) -> bool {
        self.set_role(point, CellRole::Start)
    }
    pub fn set_end(&mut self, point: Point) -> bool {
        self.set_role(point, CellRole::End)
    }
    pub fn clear_cell(&mut self, point: Point) -> bool {
        self.set_role(point, CellRole::Open)
    }

    /// Applies a click the way the visualizer does: the first click places the start, the second
    /// the end, and every later click on another cell raises a wall. Returns the role that was
    /// painted, or [None] if nothing changed.
    pub fn paint(&mut self, point: Point) -> Option<CellRole> {
        if !self.in_bounds(point) {
            return None;
        }
        let role = if self.start.is_none() {
            CellRole::Start
        } else if self.end.is_none() && self.start != Some(point) {
            CellRole::End
        } else if self.start != Some(point) && self.end != Some(point) {
            CellRole::Wall
        } else {
            return None;
        };
        self.set_role(point, role);
        Some(role)
    }

    /// Resets every cell to open and forgets start and end.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.role = CellRole::Open;
        }
        self.start = None;
        self.end = None;
        self.generate_components();
    }

    /// In-bounds orthogonal neighbours in the order left, right, top, bottom. Walls are not
    /// filtered out; each search applies its own admission rule.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
        ]
        .into_iter()
        .filter(|p| self.in_bounds(*p))
        .collect()
    }

    /// Neighbours that are not walls.
    pub fn open_neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        let mut neighbours = self.neighbours(point);
        neighbours.retain(|p| !self.is_wall(*p));
        neighbours
    }

    fn update_components(&mut self, point: Point, was_wall: bool, is_wall: bool) {
        if !was_wall && is_wall {
            // Removing an open cell can split a component.
            self.components_dirty = true;
        } else if was_wall && !is_wall {
            let p_ix = self.get_ix_point(&point);
            for n in self.open_neighbours(&point) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(p_ix, n_ix);
            }
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for ix in 0..self.len() {
            let cell = self.cells[ix];
            if cell.is_wall() {
                continue;
            }
            let point = cell.pos();
            // Right and bottom links cover every edge once.
            for n in [
                Point::new(point.x + 1, point.y),
                Point::new(point.x, point.y + 1),
            ] {
                if self.in_bounds(n) && !self.is_wall(n) {
                    let n_ix = self.get_ix_point(&n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            warn!("Reachability queried on dirty components; call update() first");
        }
        self.in_bounds(*start)
            && self.in_bounds(*goal)
            && !self.is_wall(*start)
            && !self.is_wall(*goal)
            && self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Checks that `path` walks from `start` through open, orthogonally adjacent cells. The path
    /// excludes `start` itself, as returned by the solvers.
    pub fn is_valid_path(&self, start: Point, path: &[Point]) -> bool {
        let adjacent = |a: &Point, b: &Point| (a.x - b.x).abs() + (a.y - b.y).abs() == 1;
        path.iter().all(|p| self.in_bounds(*p) && !self.is_wall(*p))
            && std::iter::once(&start)
                .chain(path.iter())
                .tuple_windows()
                .all(|(a, b)| adjacent(a, b))
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.role.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = PathingGrid::new(3, 2);
        grid.set_wall(Point::new(1, 0), true);
        grid.set_wall(Point::new(1, 1), true);
        grid.update();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 1);
        let p3 = Point::new(2, 0);
        assert!(grid.reachable(&p1, &p2));
        assert!(grid.unreachable(&p1, &p3));
        assert_ne!(grid.get_component(&p1), grid.get_component(&p3));
    }

    #[test]
    fn removing_a_wall_joins_components() {
        let mut grid = PathingGrid::new(3, 1);
        grid.set_wall(Point::new(1, 0), true);
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        grid.set_wall(Point::new(1, 0), false);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn neighbours_are_left_right_top_bottom() {
        let grid = PathingGrid::new(3, 3);
        let n = grid.neighbours(&Point::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
    }

    #[test]
    fn neighbours_are_clamped_to_the_board() {
        let grid = PathingGrid::new(3, 3);
        assert_eq!(
            grid.neighbours(&Point::new(0, 0)).as_slice(),
            &[Point::new(1, 0), Point::new(0, 1)]
        );
        assert_eq!(
            grid.neighbours(&Point::new(2, 2)).as_slice(),
            &[Point::new(1, 2), Point::new(2, 1)]
        );
        let single = PathingGrid::new(1, 1);
        assert!(single.neighbours(&Point::new(0, 0)).is_empty());
    }

    #[test]
    fn neighbours_include_walls() {
        let mut grid = PathingGrid::new(2, 1);
        grid.set_wall(Point::new(1, 0), true);
        assert_eq!(grid.neighbours(&Point::new(0, 0)).len(), 1);
        assert!(grid.open_neighbours(&Point::new(0, 0)).is_empty());
    }

    #[test]
    fn cells_know_their_position() {
        let grid = PathingGrid::new(4, 3);
        for (ix, cell) in grid.cells().enumerate() {
            assert_eq!(grid.get_ix_point(&cell.pos()), ix);
            assert_eq!(grid.point(ix), cell.pos());
        }
    }

    #[test]
    fn only_one_start_and_end() {
        let mut grid = PathingGrid::new(3, 3);
        grid.set_start(Point::new(0, 0));
        grid.set_start(Point::new(1, 0));
        grid.set_end(Point::new(2, 2));
        grid.set_end(Point::new(2, 1));
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
        assert_eq!(grid.end(), Some(Point::new(2, 1)));
        assert_eq!(grid.role(Point::new(0, 0)), Some(CellRole::Open));
        assert_eq!(grid.role(Point::new(2, 2)), Some(CellRole::Open));
        assert_eq!(grid.cells().filter(|c| c.is_start()).count(), 1);
    }

    #[test]
    fn overwriting_start_with_wall_unsets_start() {
        let mut grid = PathingGrid::new(2, 2);
        grid.set_start(Point::new(0, 0));
        grid.set_wall(Point::new(0, 0), true);
        assert_eq!(grid.start(), None);
        assert!(grid.is_wall(Point::new(0, 0)));
    }

    #[test]
    fn paint_places_start_then_end_then_walls() {
        let mut grid = PathingGrid::new(3, 3);
        assert_eq!(grid.paint(Point::new(0, 0)), Some(CellRole::Start));
        // Clicking the start again does not turn it into the end.
        assert_eq!(grid.paint(Point::new(0, 0)), None);
        assert_eq!(grid.paint(Point::new(2, 2)), Some(CellRole::End));
        assert_eq!(grid.paint(Point::new(1, 1)), Some(CellRole::Wall));
        assert_eq!(grid.paint(Point::new(2, 2)), None);
        assert_eq!(grid.paint(Point::new(5, 5)), None);
        grid.clear();
        assert_eq!(grid.start(), None);
        assert!(grid.cells().all(|c| c.role == CellRole::Open));
    }

    #[test]
    fn out_of_bounds_edits_are_rejected() {
        let mut grid = PathingGrid::new(2, 2);
        assert!(!grid.set_wall(Point::new(-1, 0), true));
        assert!(!grid.set_start(Point::new(2, 0)));
        assert!(grid.is_wall(Point::new(0, 2)));
    }

    #[test]
    fn valid_path_detection() {
        let mut grid = PathingGrid::new(3, 3);
        grid.set_wall(Point::new(1, 1), true);
        let start = Point::new(0, 0);
        let good = [Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)];
        let gap = [Point::new(1, 0), Point::new(2, 1)];
        let through_wall = [Point::new(0, 1), Point::new(1, 1)];
        assert!(grid.is_valid_path(start, &good));
        assert!(!grid.is_valid_path(start, &gap));
        assert!(!grid.is_valid_path(start, &through_wall));
        assert!(grid.is_valid_path(start, &[]));
    }

    #[test]
    fn display_uses_maze_symbols() {
        let mut grid = PathingGrid::new(3, 2);
        grid.set_start(Point::new(0, 0));
        grid.set_end(Point::new(2, 1));
        grid.set_wall(Point::new(1, 0), true);
        assert_eq!(grid.to_string(), "sw.\n..e\n");
    }
}
