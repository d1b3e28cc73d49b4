//! Library side of the `wardgrid` command, split out so the drivers can be
//! exercised from integration tests without spawning the binary.
pub mod config;
pub mod demo;
pub mod guard_suite;
