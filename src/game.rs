//! Game driver
//!
//! Owns the word pool, the random source and the current session, and keeps
//! per-process win statistics. Both front ends (TUI and line mode) drive this.

use crate::core::{GameStatus, GuessOutcome, Letter, Session};
use crate::wordlists::WordPool;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Games played and won since the process started
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// What a single guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    /// Set when this guess moved the session into `Won` or `Lost`
    pub finished: Option<GameStatus>,
}

/// A running game: the current session plus what is needed to start the next one
pub struct Game {
    pool: WordPool,
    rng: StdRng,
    session: Session,
    stats: Statistics,
}

impl Game {
    /// Start a game with OS-seeded randomness
    #[must_use]
    pub fn new(pool: WordPool) -> Self {
        Self::with_rng(pool, StdRng::from_os_rng())
    }

    /// Start a game whose word sequence is fully determined by `seed`
    #[must_use]
    pub fn seeded(pool: WordPool, seed: u64) -> Self {
        Self::with_rng(pool, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool: WordPool, mut rng: StdRng) -> Self {
        let session = Self::sample_session(&pool, &mut rng);
        Self {
            pool,
            rng,
            session,
            stats: Statistics::default(),
        }
    }

    fn sample_session(pool: &WordPool, rng: &mut StdRng) -> Session {
        let word = pool.choose(rng).clone();
        debug!("new session: {} letters", word.len());
        trace!("secret word: {word}");
        Session::new(word)
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> Statistics {
        self.stats
    }

    /// Throw away the current session and sample a fresh word
    ///
    /// Nothing carries over except the statistics.
    pub fn new_session(&mut self) {
        self.session = Self::sample_session(&self.pool, &mut self.rng);
    }

    /// Apply a guess to the current session and record a finished game
    pub fn guess(&mut self, letter: Letter) -> GuessReport {
        let outcome = self.session.guess(letter);
        debug!("guess '{letter}': {outcome:?}");

        let status = self.session.status();
        let finished = (outcome.is_applied() && status.is_over()).then_some(status);

        if let Some(status) = finished {
            self.stats.games_played += 1;
            if status == GameStatus::Won {
                self.stats.games_won += 1;
            }
            info!(
                "game {:?} on '{}' after {} guesses ({}/{} won)",
                status,
                self.session.word(),
                self.session.guessed_letters().len(),
                self.stats.games_won,
                self.stats.games_played
            );
        }

        GuessReport { outcome, finished }
    }
}
