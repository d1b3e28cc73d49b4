use rand::Rng;

use crate::error::GridError;
use crate::grid::Grid;

/// Builds a boolean grid where each cell is `true` with probability 1/2.
pub fn random_bool_grid<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Grid<bool> {
    let mut grid = Grid::new(rows, cols);
    for cell in grid.iter_mut() {
        *cell = rng.gen_bool(0.5);
    }
    log::trace!(
        "Built random {}x{} grid with {} true cells",
        rows,
        cols,
        grid.iter().filter(|&&v| v).count()
    );
    grid
}

/// Builds a boolean grid with every cell `false`.
pub fn empty_bool_grid(rows: usize, cols: usize) -> Grid<bool> {
    let mut grid = Grid::new(rows, cols);
    grid.fill(false);
    grid
}

/// Writes `value` into every cell of row `row`.
pub fn fill_row<T: Clone>(grid: &mut Grid<T>, row: usize, value: T) -> Result<(), GridError> {
    grid.row_mut(row)?.fill(value);
    Ok(())
}

/// Writes `value` into every cell of column `col`.
pub fn fill_col<T: Clone>(grid: &mut Grid<T>, col: usize, value: T) -> Result<(), GridError> {
    if col >= grid.ncols() {
        return Err(GridError::ColumnOutOfRange {
            col,
            cols: grid.ncols(),
        });
    }
    for row in 0..grid.nrows() {
        grid[(row, col)] = value.clone();
    }
    Ok(())
}

/// Writes `value` on the main diagonal, `(i, i)` for `i < min(rows, cols)`.
pub fn fill_diagonal<T: Clone>(grid: &mut Grid<T>, value: T) {
    let (rows, cols) = grid.dimensions();
    for i in 0..rows.min(cols) {
        grid[(i, i)] = value.clone();
    }
}
