use crate::{Cell, GridView};
use log::info;
use num_traits::Zero;
use petgraph::unionfind::UnionFind;

/// Connected components of the walkable cells under four-directional movement. Lets a caller
/// (or the engine, see [SearchConfig::precheck_components](crate::SearchConfig)) rule out a path
/// without flooding the grid.
#[derive(Clone, Debug)]
pub struct Components {
    components: UnionFind<usize>,
    rows: usize,
    cols: usize,
    walkable: Vec<bool>,
}

impl Components {
    /// Links every walkable cell to its walkable right and lower neighbour.
    pub fn generate<T: Zero>(grid: &GridView<'_, T>) -> Components {
        info!(
            "Generating connected components for {}x{} grid",
            grid.rows(),
            grid.cols()
        );
        let mut components = UnionFind::new(grid.len());
        let mut walkable = vec![false; grid.len()];
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                let cell = Cell::new(row, col);
                if !grid.walkable(cell) {
                    continue;
                }
                let ix = grid.get_ix(cell);
                walkable[ix] = true;
                for n in [Cell::new(row, col + 1), Cell::new(row + 1, col)] {
                    if grid.walkable(n) {
                        components.union(ix, grid.get_ix(n));
                    }
                }
            }
        }
        Components {
            components,
            rows: grid.rows(),
            cols: grid.cols(),
            walkable,
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let in_bounds = cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols;
        in_bounds.then(|| cell.row as usize * self.cols + cell.col as usize)
    }

    /// Component id of a walkable cell.
    pub fn get_component(&self, cell: Cell) -> Option<usize> {
        self.index(cell)
            .filter(|&ix| self.walkable[ix])
            .map(|ix| self.components.find(ix))
    }

    /// True if both cells are walkable and lie in the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        !self.reachable(start, goal)
    }
}
