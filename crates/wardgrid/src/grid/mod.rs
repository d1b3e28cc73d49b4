//! The `Grid` container and helpers that build or fill grids.
//!
//! `Grid<T>` is a small row-major container without external dependencies;
//! the builders add the boolean grids used by the `guard` exercise.
pub mod builders;
pub mod matrix;

pub use builders::{empty_bool_grid, fill_col, fill_diagonal, fill_row, random_bool_grid};
pub use matrix::Grid;
