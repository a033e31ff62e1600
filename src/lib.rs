//! Assembly: Endgame
//!
//! A terminal hangman game: every wrong guess costs one programming language,
//! and losing them all hands the world over to Assembly.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{GameStatus, Letter, SecretWord, Session};
//!
//! let mut session = Session::new(SecretWord::new("css").unwrap());
//! session.guess(Letter::new('c').unwrap());
//! session.guess(Letter::new('s').unwrap());
//!
//! assert_eq!(session.status(), GameStatus::Won);
//! assert_eq!(session.evaluate().wrong_guess_count, 0);
//! ```

// Core domain types
pub mod core;

// Session driver shared by both front ends
pub mod game;

// Word list
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
