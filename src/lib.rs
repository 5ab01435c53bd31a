//! # grid_astar
//!
//! Shortest walkable paths between two cells of a uniform grid, using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with four-directional unit-cost
//! movement and the [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) as
//! heuristic. The grid is any rectangular slice of rows whose cells are numbers: zero is blocked,
//! anything else is walkable. The grid is only read, and no state is kept between searches.
//!
//! When no path exists the search returns an empty sequence and sends a single warning to an
//! injected [Reporter]. Malformed input (ragged rows, endpoints outside the grid) is rejected with
//! a [SearchError] before searching.
//!
//! ```
//! use grid_astar::{search, Cell, Severity};
//!
//! let grid = vec![vec![1, 1], vec![0, 1]];
//! let path = search(&grid, Cell::new(0, 0), Cell::new(1, 1), &mut |_: &str, _: Severity| ()).unwrap();
//! assert_eq!(path, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
//! ```
pub mod astar;
pub mod cancel;
pub mod cell;
pub mod components;
pub mod error;
mod frontier;
pub mod grid;
pub mod path;
pub mod report;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use num_traits::Zero;

pub use crate::astar::{Pathfinder, SearchConfig, SearchOutcome};
pub use crate::cancel::CancelToken;
pub use crate::cell::Cell;
pub use crate::components::Components;
pub use crate::error::SearchError;
pub use crate::frontier::FrontierKind;
pub use crate::grid::GridView;
pub use crate::report::{LogReporter, Reporter, Severity, NO_PATH_MESSAGE};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Computes a shortest path from `start` to `end` with the default [SearchConfig]. Returns the
/// cells from `start` to `end` inclusive, or an empty sequence after reporting
/// [NO_PATH_MESSAGE] at [Severity::Warning] if `end` cannot be reached.
pub fn search<T, R, P>(
    grid: &[R],
    start: Cell,
    end: Cell,
    reporter: &mut P,
) -> Result<Vec<Cell>, SearchError>
where
    T: Zero,
    R: AsRef<[T]>,
    P: Reporter + ?Sized,
{
    Pathfinder::default()
        .find_path(grid, start, end, reporter)
        .map(SearchOutcome::into_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_returns_empty_and_warns_once() {
        let grid = [[1, 0], [0, 1]];
        let mut reports = Vec::new();
        let path = search(&grid, Cell::new(0, 0), Cell::new(1, 1), &mut |m: &str, s: Severity| {
            reports.push((m.to_owned(), s))
        })
        .unwrap();
        assert!(path.is_empty());
        assert_eq!(reports, vec![(NO_PATH_MESSAGE.to_owned(), Severity::Warning)]);
    }

    #[test]
    fn log_reporter_can_be_injected() {
        let grid = vec![vec![1u16; 4]; 4];
        let path = search(&grid, Cell::new(3, 0), Cell::new(0, 3), &mut LogReporter).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&Cell::new(3, 0)));
        assert_eq!(path.last(), Some(&Cell::new(0, 3)));
    }
}
