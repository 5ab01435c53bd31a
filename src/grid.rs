use crate::error::{Result, SearchError};
use crate::Cell;
use core::fmt;
use num_traits::Zero;

/// [GridView] is a validated, read-only view over caller-owned rows. A cell value of zero is
/// blocked, any other value is walkable. Construction checks that every row has the same length,
/// so all later lookups can rely on a rectangular `rows() x cols()` shape.
#[derive(Clone, Debug)]
pub struct GridView<'a, T> {
    rows: Vec<&'a [T]>,
    cols: usize,
}

impl<'a, T: Zero> GridView<'a, T> {
    pub fn new<R: AsRef<[T]>>(rows: &'a [R]) -> Result<GridView<'a, T>> {
        let rows: Vec<&'a [T]> = rows.iter().map(|r| r.as_ref()).collect();
        let cols = rows.first().map_or(0, |r| r.len());
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SearchError::RaggedGrid {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        Ok(GridView { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, walkable or not.
    pub fn len(&self) -> usize {
        self.rows() * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols
    }

    /// Out-of-bounds cells are never walkable.
    pub fn walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.rows[cell.row as usize][cell.col as usize].is_zero()
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn get_ix(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Walkable neighbours of `cell` in expansion order.
    pub fn walkable_neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        cell.neumann_neighborhood()
            .map(|n| self.walkable(n).then_some(n))
            .into_iter()
            .flatten()
    }

    pub(crate) fn check_endpoints(&self, start: Cell, end: Cell) -> Result<()> {
        if !self.in_bounds(start) {
            return Err(SearchError::StartOutOfBounds {
                cell: start,
                rows: self.rows(),
                cols: self.cols,
            });
        }
        if !self.in_bounds(end) {
            return Err(SearchError::EndOutOfBounds {
                cell: end,
                rows: self.rows(),
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl<T: Zero> fmt::Display for GridView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            let line: String = row
                .iter()
                .map(|v| if v.is_zero() { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
