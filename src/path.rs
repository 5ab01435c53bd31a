//! Checks on paths returned by the engine.

use crate::{Cell, GridView};
use itertools::Itertools;
use num_traits::Zero;

/// Number of unit moves along a path. Zero for empty and single-cell paths.
pub fn step_count(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

/// True if `path` runs from `start` to `end` over walkable cells, each step being one of the four
/// axis-aligned unit moves.
pub fn is_valid_path<T: Zero>(
    grid: &GridView<'_, T>,
    path: &[Cell],
    start: Cell,
    end: Cell,
) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&end)
        && path.iter().all(|c| grid.walkable(*c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
