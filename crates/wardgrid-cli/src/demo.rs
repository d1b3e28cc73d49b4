//! Walkthrough of the `Grid` API: construction, writes, swaps, resize, and
//! copies of a large grid living in a nested scope.
use std::io::Write;

use anyhow::{Context, Result};

use wardgrid::config::DriverConfig;
use wardgrid::Grid;

/// Run the demonstration, writing the narrative and grid dumps to `out`.
pub fn run_demo<W: Write>(config: &DriverConfig, out: &mut W) -> Result<()> {
    let mut grid = Grid::from_values(config.rows, config.cols, config.values.iter().copied())
        .context("Failed to build the demonstration grid")?;

    writeln!(out, "Initial grid")?;
    grid.dump_to(out)?;

    writeln!(out, "grid(1, 1) = 13")?;
    *grid.at_mut(1, 1)? = 13;
    grid.dump_to(out)?;

    writeln!(out, "Swap rows 1-2")?;
    grid.swap_rows(1, 2)?;
    grid.dump_to(out)?;

    writeln!(out, "Swap columns 1-2")?;
    grid.swap_cols(1, 2)?;
    grid.dump_to(out)?;

    let (rows, cols) = grid.dimensions();
    writeln!(out, "Resize to {}x{}", rows + 1, cols + 1)?;
    grid.try_resize(rows + 1, cols + 1)?;
    grid.dump_to(out)?;

    writeln!(out, "Resize back to {}x{}", rows, cols)?;
    grid.try_resize(rows, cols)?;
    grid.dump_to(out)?;

    run_scoped_copies(config, out)?;
    writeln!(out, "Dropping the scoped grid and its copies did not crash")?;
    Ok(())
}

fn run_scoped_copies<W: Write>(config: &DriverConfig, out: &mut W) -> Result<()> {
    let (rows, cols) = (config.large_rows, config.large_cols);
    log::info!("[wardgrid::demo] Allocating a {}x{} scoped grid", rows, cols);

    let mut local: Grid<i32> = Grid::try_new(rows, cols)?;
    let probe = (rows / 10, cols / 10);
    let other = (rows / 50, cols / 50);

    *local.at_mut(probe.0, probe.1)? = 2;
    writeln!(out, "local{:?} = {}", probe, local.at(probe.0, probe.1)?)?;
    writeln!(out)?;

    writeln!(out, "Copy of local by clone")?;
    let mut copy = local.clone();

    writeln!(out, "Copy of local by assignment")?;
    let mut assigned: Grid<i32> = Grid::try_new(1, 1)?;
    assigned.assign(&local);

    writeln!(out, "copy{:?} = {}", probe, copy.at(probe.0, probe.1)?)?;
    writeln!(out, "assigned{:?} = {}", probe, assigned.at(probe.0, probe.1)?)?;
    writeln!(out)?;

    writeln!(out, "Modify copy and assigned")?;
    *copy.at_mut(other.0, other.1)? = 3;
    *assigned.at_mut(other.0, other.1)? = 4;
    writeln!(out, "local{:?} = {}", other, local.at(other.0, other.1)?)?;
    writeln!(out, "copy{:?} = {}", other, copy.at(other.0, other.1)?)?;
    writeln!(out, "assigned{:?} = {}", other, assigned.at(other.0, other.1)?)?;
    Ok(())
}
