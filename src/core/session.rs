//! Game session state machine
//!
//! A `Session` holds the secret word and the letters guessed so far. Everything
//! else (wrong guesses, won/lost) is derived on demand from those two pieces.

use super::badge::MAX_WRONG_GUESSES;
use super::{Letter, SecretWord};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Derived view of a session, recomputed on every call to [`Session::evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub wrong_guess_count: usize,
    pub is_won: bool,
    pub is_lost: bool,
}

impl Evaluation {
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_won || self.is_lost
    }

    /// Collapse the flags into a status; a win takes precedence over a loss
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.is_won {
            GameStatus::Won
        } else if self.is_lost {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

/// Result of applying a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word
    Correct,
    /// The letter is not in the word; one badge is lost
    Wrong,
    /// The letter was guessed before; nothing changed
    AlreadyGuessed,
    /// The session had already ended; nothing changed
    GameOver,
}

impl GuessOutcome {
    /// Whether the guess changed the session
    #[inline]
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Correct | Self::Wrong)
    }
}

/// How a key on the on-screen alphabet should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unguessed,
    Correct,
    Wrong,
}

/// One game: a secret word plus the guesses made against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    word: SecretWord,
    guessed: Vec<Letter>,
    max_wrong_guesses: usize,
}

impl Session {
    /// Start a session for `word` using the default badge row
    #[must_use]
    pub fn new(word: SecretWord) -> Self {
        Self::with_max_wrong_guesses(word, MAX_WRONG_GUESSES)
    }

    /// Start a session with a custom wrong-guess budget
    #[must_use]
    pub fn with_max_wrong_guesses(word: SecretWord, max_wrong_guesses: usize) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            max_wrong_guesses,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Guessed letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Apply a guess
    ///
    /// Guesses on a finished session and repeated letters are absorbed without
    /// changing anything; the returned outcome says which case applied.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::GameOver;
        }
        if self.has_guessed(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        self.guessed.push(letter);

        if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        }
    }

    /// Number of guessed letters that are not in the word
    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&letter| !self.word.contains(letter))
            .count()
    }

    /// Derive wrong-guess count and won/lost flags from the current state
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        let wrong_guess_count = self.wrong_guess_count();
        let is_won = self.word.letters().all(|letter| self.has_guessed(letter));
        let is_lost = wrong_guess_count >= self.max_wrong_guesses;

        Evaluation {
            wrong_guess_count,
            is_won,
            is_lost,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.evaluate().status()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.evaluate().is_over()
    }

    /// Whether a letter of the word is shown to the player
    ///
    /// Guessed letters are always shown; losing reveals the whole word.
    #[must_use]
    pub fn reveals(&self, letter: Letter) -> bool {
        self.has_guessed(letter) || self.status() == GameStatus::Lost
    }

    /// The word slot by slot, with `None` for hidden letters
    #[must_use]
    pub fn masked_word(&self) -> Vec<Option<Letter>> {
        self.word
            .letters()
            .map(|letter| self.reveals(letter).then_some(letter))
            .collect()
    }

    /// Keyboard coloring for a letter
    #[must_use]
    pub fn letter_state(&self, letter: Letter) -> LetterState {
        if !self.has_guessed(letter) {
            LetterState::Unguessed
        } else if self.word.contains(letter) {
            LetterState::Correct
        } else {
            LetterState::Wrong
        }
    }

    /// Whether a key on the alphabet can still be pressed
    #[must_use]
    pub fn is_letter_enabled(&self, letter: Letter) -> bool {
        !self.has_guessed(letter) && !self.is_over()
    }

    /// Wrong guesses left before the session is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guess_count())
    }

    /// Whether badge `index` has been lost
    #[must_use]
    pub fn is_badge_lost(&self, index: usize) -> bool {
        index < self.wrong_guess_count()
    }

    /// Index of the badge lost by the most recent guess, if that guess was wrong
    #[must_use]
    pub fn last_lost_badge(&self) -> Option<usize> {
        let last = *self.guessed.last()?;
        if self.word.contains(last) {
            None
        } else {
            self.wrong_guess_count().checked_sub(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> Session {
        Session::new(SecretWord::new(word).unwrap())
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn guess_all(session: &mut Session, letters: &str) {
        for c in letters.chars() {
            session.guess(letter(c));
        }
    }

    #[test]
    fn new_session_is_in_progress() {
        let s = session("react");
        let eval = s.evaluate();
        assert_eq!(eval.wrong_guess_count, 0);
        assert!(!eval.is_won);
        assert!(!eval.is_lost);
        assert!(!eval.is_over());
        assert_eq!(s.status(), GameStatus::InProgress);
        assert!(s.guessed_letters().is_empty());
    }

    #[test]
    fn win_on_repeated_letters() {
        let mut s = session("css");
        assert_eq!(s.guess(letter('c')), GuessOutcome::Correct);
        assert_eq!(s.guess(letter('s')), GuessOutcome::Correct);

        let eval = s.evaluate();
        assert!(eval.is_won);
        assert!(!eval.is_lost);
        assert_eq!(eval.wrong_guess_count, 0);
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn loss_after_seven_wrong_guesses_reveals_word() {
        let mut s = session("java");
        guess_all(&mut s, "bqxzwku");

        let eval = s.evaluate();
        assert_eq!(eval.wrong_guess_count, 7);
        assert!(eval.is_lost);
        assert!(!eval.is_won);
        assert_eq!(s.status(), GameStatus::Lost);

        for l in s.word().letters() {
            assert!(s.reveals(l), "'{l}' should be revealed after a loss");
        }
        assert!(s.masked_word().iter().all(Option::is_some));
    }

    #[test]
    fn six_wrong_guesses_is_not_lost() {
        let mut s = session("java");
        guess_all(&mut s, "bqxzwk");
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.remaining_attempts(), 1);
    }

    #[test]
    fn duplicate_guess_is_idempotent() {
        let mut once = session("python");
        once.guess(letter('p'));

        let mut twice = session("python");
        twice.guess(letter('p'));
        assert_eq!(twice.guess(letter('p')), GuessOutcome::AlreadyGuessed);

        assert_eq!(once.guessed_letters(), twice.guessed_letters());
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_wrong_guess_costs_one_badge() {
        let mut s = session("python");
        assert_eq!(s.guess(letter('z')), GuessOutcome::Wrong);
        assert_eq!(s.guess(letter('z')), GuessOutcome::AlreadyGuessed);
        assert_eq!(s.wrong_guess_count(), 1);
    }

    #[test]
    fn guess_after_win_is_noop() {
        let mut s = session("npm");
        guess_all(&mut s, "npm");
        let before = s.clone();

        assert_eq!(s.guess(letter('z')), GuessOutcome::GameOver);
        assert_eq!(s, before);
    }

    #[test]
    fn guess_after_loss_is_noop() {
        let mut s = session("java");
        guess_all(&mut s, "bqxzwku");
        let before = s.clone();

        assert_eq!(s.guess(letter('j')), GuessOutcome::GameOver);
        assert_eq!(s, before);
    }

    #[test]
    fn won_and_lost_never_both_true() {
        // Every word in a small set, guessed in a mix of wrong-first and right-first orders
        let orders = ["bqxzwkuacjssv", "acjsvbqxzwku", "zyxwvutsrqponmlkjihgfedcba"];
        for word in ["java", "css", "sql", "jwt", "graphql"] {
            for order in orders {
                let mut s = session(word);
                for c in order.chars() {
                    s.guess(letter(c));
                    let eval = s.evaluate();
                    assert!(
                        !(eval.is_won && eval.is_lost),
                        "{word} reached both won and lost after guessing {:?}",
                        s.guessed_letters()
                    );
                }
            }
        }
    }

    #[test]
    fn win_takes_precedence_over_loss() {
        let eval = Evaluation {
            wrong_guess_count: 7,
            is_won: true,
            is_lost: true,
        };
        assert_eq!(eval.status(), GameStatus::Won);
    }

    #[test]
    fn unguessed_letters_hidden_while_in_progress() {
        let mut s = session("docker");
        s.guess(letter('o'));
        s.guess(letter('z'));

        assert!(!s.is_over());
        assert!(s.reveals(letter('o')));
        for c in "dckr".chars() {
            assert!(!s.reveals(letter(c)));
        }

        let masked: Vec<Option<char>> = s
            .masked_word()
            .into_iter()
            .map(|slot| slot.map(Letter::as_char))
            .collect();
        assert_eq!(masked, vec![None, Some('o'), None, None, None, None]);
    }

    #[test]
    fn guessed_letters_keep_guess_order() {
        let mut s = session("swift");
        guess_all(&mut s, "tzsa");
        let order: String = s.guessed_letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(order, "tzsa");
    }

    #[test]
    fn letter_state_and_enabled() {
        let mut s = session("vite");
        s.guess(letter('v'));
        s.guess(letter('q'));

        assert_eq!(s.letter_state(letter('v')), LetterState::Correct);
        assert_eq!(s.letter_state(letter('q')), LetterState::Wrong);
        assert_eq!(s.letter_state(letter('i')), LetterState::Unguessed);

        assert!(!s.is_letter_enabled(letter('v')));
        assert!(s.is_letter_enabled(letter('i')));

        guess_all(&mut s, "ite");
        assert_eq!(s.status(), GameStatus::Won);
        assert!(!s.is_letter_enabled(letter('a')));
    }

    #[test]
    fn badges_lost_in_order() {
        let mut s = session("bash");
        guess_all(&mut s, "xyz");
        assert!(s.is_badge_lost(0));
        assert!(s.is_badge_lost(2));
        assert!(!s.is_badge_lost(3));
        assert!(!s.is_badge_lost(MAX_WRONG_GUESSES));
    }

    #[test]
    fn last_lost_badge_tracks_most_recent_guess() {
        let mut s = session("bash");
        assert_eq!(s.last_lost_badge(), None);

        s.guess(letter('x'));
        assert_eq!(s.last_lost_badge(), Some(0));

        s.guess(letter('y'));
        assert_eq!(s.last_lost_badge(), Some(1));

        s.guess(letter('b'));
        assert_eq!(s.last_lost_badge(), None);
    }

    #[test]
    fn custom_wrong_guess_budget() {
        let mut s = Session::with_max_wrong_guesses(SecretWord::new("api").unwrap(), 2);
        s.guess(letter('x'));
        assert_eq!(s.status(), GameStatus::InProgress);
        s.guess(letter('y'));
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.remaining_attempts(), 0);
    }
}
