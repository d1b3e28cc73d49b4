//! Classification of the reference family of boolean grids.
use std::io::Write;

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wardgrid::config::DriverConfig;
use wardgrid::grid::{empty_bool_grid, fill_col, fill_diagonal, fill_row, random_bool_grid};
use wardgrid::guard::is_guarded;
use wardgrid::Grid;

/// A named grid and its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardCase {
    pub name: &'static str,
    pub guarded: bool,
}

fn cases(dim: usize, seed: u64) -> Result<Vec<(&'static str, Grid<bool>)>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let last = dim - 1;

    let mut first_row = empty_bool_grid(dim, dim);
    fill_row(&mut first_row, 0, true)?;
    let mut last_row = empty_bool_grid(dim, dim);
    fill_row(&mut last_row, last, true)?;
    let mut first_col = empty_bool_grid(dim, dim);
    fill_col(&mut first_col, 0, true)?;
    let mut last_col = empty_bool_grid(dim, dim);
    fill_col(&mut last_col, last, true)?;

    let mut diagonal = empty_bool_grid(dim, dim);
    fill_diagonal(&mut diagonal, true);
    let mut flipped = diagonal.clone();
    *flipped.at_mut(dim / 2, dim / 2)? = false;

    Ok(vec![
        ("random", random_bool_grid(dim, dim, &mut rng)),
        ("empty", empty_bool_grid(dim, dim)),
        ("first_row", first_row),
        ("last_row", last_row),
        ("first_col", first_col),
        ("last_col", last_col),
        ("diagonal", diagonal),
        ("diagonal_flipped", flipped),
    ])
}

/// Build and classify every reference grid, writing `name guarded=<bool>`
/// lines to `out`.
pub fn run_guard_suite<W: Write>(config: &DriverConfig, out: &mut W) -> Result<Vec<GuardCase>> {
    let dim = config.guard_dim;
    ensure!(dim > 0, "guard_dim must be at least 1");

    let seed = config
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    log::info!(
        "[wardgrid::guard] Classifying {}x{} grids with seed {}",
        dim,
        dim,
        seed
    );

    let mut results = Vec::new();
    for (name, grid) in cases(dim, seed)? {
        let guarded = is_guarded(&grid);
        writeln!(out, "{} guarded={}", name, guarded)?;
        results.push(GuardCase { name, guarded });
    }
    Ok(results)
}
