use serde::{Deserialize, Serialize};

/// Parameters for the demonstration driver and the guard suite.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    /// Shape of the small demonstration grid.
    pub rows: usize,
    pub cols: usize,
    /// Row-major seed values for the small grid; at least `rows * cols`.
    pub values: Vec<i32>,

    /// Shape of the scoped grid that is copied and dropped.
    pub large_rows: usize,
    pub large_cols: usize,

    /// Side of the square boolean grids classified by the guard suite.
    pub guard_dim: usize,
    /// Seed for the random boolean grid; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl DriverConfig {
    pub fn new(rows: usize, cols: usize, values: Vec<i32>) -> Self {
        Self {
            rows,
            cols,
            values,
            ..Self::default()
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            values: (1..=12).collect(),
            large_rows: 5000,
            large_cols: 10000,
            guard_dim: 100,
            seed: None,
        }
    }
}
