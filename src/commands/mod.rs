//! Command implementations

pub mod simple;

pub use simple::{play_lines, run_simple};
