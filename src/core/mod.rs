//! Core domain types for the game
//!
//! This module contains the game state machine and its building blocks.
//! Nothing here touches the terminal; every type is pure and testable.

mod badge;
mod letter;
mod session;
mod word;

pub use badge::{BADGES, Badge, MAX_WRONG_GUESSES, Rgb};
pub use letter::{Letter, LetterError};
pub use session::{Evaluation, GameStatus, GuessOutcome, LetterState, Session};
pub use word::{SecretWord, WordError};
