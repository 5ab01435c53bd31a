use core::fmt;

/// A grid position. `row` indexes the outer dimension of the grid and `col` the inner one, so a
/// [Cell] `(r, c)` refers to `grid[r][c]`. Equality, hashing and ordering are by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Offsets of the four-neighbourhood in expansion order. The order determines which of several
/// equally short paths is returned, so it is part of the observable behaviour.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Straight-line distance, used as the A* heuristic. Never exceeds the number of
    /// axis-aligned unit steps between the two cells.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four axis-aligned neighbours, ordered as in [NEUMANN_OFFSETS]. Neighbours are not
    /// bounds-checked.
    pub fn neumann_neighborhood(&self) -> [Cell; 4] {
        NEUMANN_OFFSETS.map(|(dr, dc)| Cell::new(self.row + dr, self.col + dc))
    }

    /// True if `other` is exactly one axis-aligned unit step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> (i32, i32) {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
