//! Classification of boolean grids as *guarded*.
//!
//! Each `true` cell is a guard. A cell is watched when it holds a guard, or
//! when a guard stands in the same row, in the same column, or on one of its
//! eight neighbors. A grid is guarded when every cell is watched; a grid
//! without cells is guarded vacuously.
use crate::grid::Grid;

/// Per-row and per-column guard presence, computed in one pass.
struct GuardLines {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl GuardLines {
    fn scan(grid: &Grid<bool>) -> Self {
        let (rows, cols) = grid.dimensions();
        let mut lines = GuardLines {
            rows: vec![false; rows],
            cols: vec![false; cols],
        };
        for r in 0..rows {
            for c in 0..cols {
                if grid[(r, c)] {
                    lines.rows[r] = true;
                    lines.cols[c] = true;
                }
            }
        }
        lines
    }
}

fn has_guarded_neighbor(grid: &Grid<bool>, row: usize, col: usize) -> bool {
    let (rows, cols) = grid.dimensions();
    let mut row_range = row.saturating_sub(1)..=(row + 1).min(rows - 1);
    row_range.any(|r| {
        let mut col_range = col.saturating_sub(1)..=(col + 1).min(cols - 1);
        col_range.any(|c| (r, c) != (row, col) && grid[(r, c)])
    })
}

fn is_watched(grid: &Grid<bool>, lines: &GuardLines, row: usize, col: usize) -> bool {
    lines.rows[row] || lines.cols[col] || has_guarded_neighbor(grid, row, col)
}

/// Returns every cell that no guard watches, in row-major order.
pub fn unwatched_cells(grid: &Grid<bool>) -> Vec<(usize, usize)> {
    let lines = GuardLines::scan(grid);
    let (rows, cols) = grid.dimensions();
    let mut cells = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if !is_watched(grid, &lines, r, c) {
                cells.push((r, c));
            }
        }
    }
    cells
}

/// Returns `true` when every cell of `grid` is watched by a guard.
pub fn is_guarded(grid: &Grid<bool>) -> bool {
    let lines = GuardLines::scan(grid);
    let (rows, cols) = grid.dimensions();
    let guarded = (0..rows).all(|r| (0..cols).all(|c| is_watched(grid, &lines, r, c)));
    log::debug!("{}x{} grid guarded={}", rows, cols, guarded);
    guarded
}
