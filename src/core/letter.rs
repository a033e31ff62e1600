//! Guessable letters
//!
//! A `Letter` is a single lowercase ASCII letter, the only input the game accepts.

use std::fmt;

/// A single lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for characters that cannot be guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not a letter from a to z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing uppercase input
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// Iterate over all 26 letters in alphabet order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
