//! Word pool sampling
//!
//! A `WordPool` is a non-empty set of secret word candidates with uniform random selection.

use super::WORDS;
use crate::core::SecretWord;
use rand::Rng;
use std::fmt;

/// A non-empty list of candidate secret words
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<SecretWord>,
}

/// Returned when a pool would contain no valid words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word pool must contain at least one valid word")
    }
}

impl std::error::Error for EmptyPoolError {}

impl WordPool {
    /// Build a pool from a string slice, skipping invalid entries
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::wordlists::WordPool;
    ///
    /// let pool = WordPool::from_slice(&["rust", "c++", "go"]).unwrap();
    /// assert_eq!(pool.len(), 2);
    /// assert!(WordPool::from_slice(&[]).is_err());
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, EmptyPoolError> {
        let words: Vec<SecretWord> = slice
            .iter()
            .filter_map(|&s| SecretWord::new(s).ok())
            .collect();

        if words.is_empty() {
            Err(EmptyPoolError)
        } else {
            Ok(Self { words })
        }
    }

    /// The word list compiled into the binary
    ///
    /// # Panics
    /// Will not panic - `build.rs` rejects an empty or malformed word list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(WORDS).expect("embedded word list validated by build script")
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty pools
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_slice_skips_invalid() {
        let pool = WordPool::from_slice(&["react", "next.js", "", "vite"]).unwrap();
        assert_eq!(pool.len(), 2);

        let mut rng = StdRng::seed_from_u64(9);
        let picked: std::collections::HashSet<String> = (0..100)
            .map(|_| pool.choose(&mut rng).text().to_string())
            .collect();
        let expected: std::collections::HashSet<String> =
            ["react", "vite"].iter().map(ToString::to_string).collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn from_slice_empty() {
        assert_eq!(WordPool::from_slice(&[]).unwrap_err(), EmptyPoolError);
        assert_eq!(WordPool::from_slice(&["1", "?"]).unwrap_err(), EmptyPoolError);
    }

    #[test]
    fn embedded_pool_keeps_every_word() {
        let pool = WordPool::embedded();
        assert_eq!(pool.len(), WORDS.len());
        assert!(!pool.is_empty());
    }

    #[test]
    fn choose_single_word_pool() {
        let pool = WordPool::from_slice(&["java"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(pool.choose(&mut rng).text(), "java");
        }
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let pool = WordPool::embedded();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pool.choose(&mut a), pool.choose(&mut b));
        }
    }

    #[test]
    fn choose_reaches_every_word() {
        let pool = WordPool::from_slice(&["css", "sql", "npm"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.choose(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
