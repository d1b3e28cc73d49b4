use std::error::Error;
use std::fmt;

/// Errors reported by `Grid` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row index outside `0..rows`.
    RowOutOfRange { row: usize, rows: usize },
    /// Column index outside `0..cols`.
    ColumnOutOfRange { col: usize, cols: usize },
    /// Flat value buffer too short for the requested shape.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// Storage for `rows * cols` elements could not be obtained.
    Allocation { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::RowOutOfRange { row, rows } => {
                write!(f, "row index {} out of range for grid with {} rows", row, rows)
            }
            GridError::ColumnOutOfRange { col, cols } => write!(
                f,
                "column index {} out of range for grid with {} columns",
                col, cols
            ),
            GridError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            GridError::Allocation { rows, cols } => {
                write!(f, "failed to allocate storage for a {}x{} grid", rows, cols)
            }
        }
    }
}

impl Error for GridError {}
