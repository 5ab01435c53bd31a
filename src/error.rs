//! Rejected-input errors. Failing to find a path is not an error, see
//! [SearchOutcome::NoPath](crate::SearchOutcome::NoPath).

use crate::Cell;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("grid is not rectangular: row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("start {cell} is outside the {rows}x{cols} grid")]
    StartOutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("end {cell} is outside the {rows}x{cols} grid")]
    EndOutOfBounds { cell: Cell, rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
