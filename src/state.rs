use crate::cell::CellRole;
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use log::warn;

/// Scratch data a search keeps for one cell. Scores are [None] until computed, which plays the
/// role of an infinite distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeState {
    /// Set once the cell has been discovered or expanded, depending on the algorithm.
    pub checked: bool,
    /// Set if the cell is on the reconstructed path.
    pub on_path: bool,
    /// Index of the predecessor on the search tree.
    pub parent: Option<usize>,
    pub g: Option<u32>,
    pub h: Option<u32>,
    pub f: Option<u32>,
    pub distance: Option<u32>,
}

/// Per-search state for every cell of a [PathingGrid], indexed like the grid. Each search allocates
/// a fresh one, so a grid never carries stale scores from an earlier run.
#[derive(Clone, Debug)]
pub struct SearchState {
    width: usize,
    height: usize,
    nodes: Vec<NodeState>,
}

impl SearchState {
    pub fn new(grid: &PathingGrid) -> SearchState {
        SearchState {
            width: grid.width(),
            height: grid.height(),
            nodes: vec![NodeState::default(); grid.len()],
        }
    }

    fn ix(&self, point: Point) -> Option<usize> {
        if point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
        {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    fn point(&self, ix: usize) -> Point {
        Point::new((ix % self.width) as i32, (ix / self.width) as i32)
    }

    pub fn node(&self, point: Point) -> Option<&NodeState> {
        self.ix(point).map(|ix| &self.nodes[ix])
    }

    pub(crate) fn get(&self, ix: usize) -> &NodeState {
        &self.nodes[ix]
    }

    pub(crate) fn get_mut(&mut self, ix: usize) -> &mut NodeState {
        &mut self.nodes[ix]
    }

    pub fn is_checked(&self, point: Point) -> bool {
        self.node(point).is_some_and(|n| n.checked)
    }

    pub fn is_path(&self, point: Point) -> bool {
        self.node(point).is_some_and(|n| n.on_path)
    }

    pub fn parent(&self, point: Point) -> Option<Point> {
        self.node(point)
            .and_then(|n| n.parent)
            .map(|ix| self.point(ix))
    }

    pub fn checked_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.checked)
            .map(|(ix, _)| self.point(ix))
    }

    pub fn path_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.on_path)
            .map(|(ix, _)| self.point(ix))
    }

    pub fn checked_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.checked).count()
    }

    /// Walks parent links from `end_ix` back to `start_ix`, moving each cell from checked to
    /// on-path and notifying the observer once per cell. The returned path runs from the cell after
    /// the start up to and including the end.
    pub(crate) fn trace_path<O: StepObserver>(
        &mut self,
        grid: &PathingGrid,
        start_ix: usize,
        end_ix: usize,
        observer: &mut O,
    ) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ix = end_ix;
        while ix != start_ix {
            let node = &mut self.nodes[ix];
            node.checked = false;
            node.on_path = true;
            let parent = node.parent;
            let point = self.point(ix);
            path.push(point);
            observer.on_step(grid, self, Step::Trace(point));
            match parent {
                Some(p) => ix = p,
                None => {
                    warn!("Parent chain broken at {} before reaching the start", point);
                    break;
                }
            }
        }
        path.reverse();
        path
    }

    /// Renders the board with search progress: `o` for checked cells, `*` for path cells and the
    /// maze symbols for everything else.
    pub fn render(&self, grid: &PathingGrid) -> String {
        let mut out = String::with_capacity(grid.len() + grid.height());
        for row in grid.rows() {
            for cell in row {
                let node = &self.nodes[grid.get_ix_point(&cell.pos())];
                let c = match cell.role {
                    CellRole::Open if node.on_path => '*',
                    CellRole::Open if node.checked => 'o',
                    role => role.symbol(),
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

/// A unit of search work, reported to a [StepObserver].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A cell was taken off the frontier.
    Expand(Point),
    /// A cell was added to the reconstructed path.
    Trace(Point),
}

/// Hook called synchronously after every unit of search work, so a visualizer can redraw.
pub trait StepObserver {
    fn on_step(&mut self, grid: &PathingGrid, state: &SearchState, step: Step);
}

/// Observer that ignores every step, for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline(always)]
    fn on_step(&mut self, _: &PathingGrid, _: &SearchState, _: Step) {}
}

impl StepObserver for () {
    #[inline(always)]
    fn on_step(&mut self, _: &PathingGrid, _: &SearchState, _: Step) {}
}

impl<F> StepObserver for F
where
    F: FnMut(&PathingGrid, &SearchState, Step),
{
    fn on_step(&mut self, grid: &PathingGrid, state: &SearchState, step: Step) {
        self(grid, state, step)
    }
}
