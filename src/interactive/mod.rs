//! Interactive TUI interface
//!
//! Ratatui front end: app state, rendering and the win celebration.

mod app;
mod celebration;
mod rendering;

pub use app::{App, run_tui};
pub use celebration::Celebration;
pub use rendering::ui;
