use grid_util::point::Point;

/// The role a cell plays on the board. Roles are exclusive: a start cell is never a wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellRole {
    #[default]
    Open,
    Wall,
    Start,
    End,
}

impl CellRole {
    /// Character used by the maze text format.
    pub fn symbol(self) -> char {
        match self {
            CellRole::Open => '.',
            CellRole::Wall => 'w',
            CellRole::Start => 's',
            CellRole::End => 'e',
        }
    }

    /// Inverse of [symbol](Self::symbol). Unknown characters are open cells.
    pub fn from_symbol(c: char) -> CellRole {
        match c {
            'w' => CellRole::Wall,
            's' => CellRole::Start,
            'e' => CellRole::End,
            _ => CellRole::Open,
        }
    }
}

/// A single grid position. The position never changes after the grid is built;
/// search scratch data lives in [SearchState](crate::state::SearchState) instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    pub role: CellRole,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Cell {
        Cell {
            pos: Point::new(x, y),
            role: CellRole::Open,
        }
    }
    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn is_wall(&self) -> bool {
        self.role == CellRole::Wall
    }
    pub fn is_start(&self) -> bool {
        self.role == CellRole::Start
    }
    pub fn is_end(&self) -> bool {
        self.role == CellRole::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_map_back_to_roles() {
        for role in [CellRole::Open, CellRole::Wall, CellRole::Start, CellRole::End] {
            assert_eq!(CellRole::from_symbol(role.symbol()), role);
        }
        assert_eq!(CellRole::from_symbol('#'), CellRole::Open);
        assert_eq!(CellRole::from_symbol(' '), CellRole::Open);
    }

    #[test]
    fn new_cell_is_open() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.pos(), Point::new(3, 4));
        assert!(!cell.is_wall() && !cell.is_start() && !cell.is_end());
    }
}
