//! Secret word representation
//!
//! A `SecretWord` stores the word to guess along with the set of letters it contains.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// A lowercase secret word with letter membership tracking
///
/// Keeps the distinct letters in a set so guesses are checked without scanning the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_set: FxHashSet<u8>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::SecretWord;
    ///
    /// let word = SecretWord::new("Rust").unwrap();
    /// assert_eq!(word.text(), "rust");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("c++").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letter_set: FxHashSet<u8> = text.bytes().collect();

        Ok(Self { text, letter_set })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter slots in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters of the word in order, duplicates included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.chars().filter_map(|c| Letter::new(c).ok())
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letter_set.contains(&letter.as_byte())
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
