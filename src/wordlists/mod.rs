//! Word list for the game
//!
//! Provides the embedded word list compiled into the binary and the pool that samples from it.

mod embedded;
pub mod pool;

pub use embedded::{WORDS, WORDS_COUNT};
pub use pool::{EmptyPoolError, WordPool};
