//! wardgrid: a dense 2D grid container and a small guarded-grid exercise.
//!
//! This crate provides `Grid<T>`, a row-major container that exclusively owns
//! its storage, with content-preserving resize, row/column swaps and a checked
//! and an unchecked access tier. On top of it sit builders for boolean grids,
//! row/column fill helpers and the `guard` classifier.
//!
//! Configuration for the command line driver lives in `config` so that it can
//! be shared by the binary and its tests.
pub mod config;
pub mod error;
pub mod grid;
pub mod guard;

pub use error::GridError;
pub use grid::Grid;
