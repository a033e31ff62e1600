//! Formatting utilities shared by the TUI and line mode

use crate::core::{BADGES, Badge, GameStatus, Session};

pub const TITLE: &str = "Assembly: Endgame";

pub const TAGLINE: &str =
    "Guess the word in under 8 attempts to keep the programming world safe from Assembly!";

const FAREWELLS: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "It's been real, {}",
];

/// Headline and subtitle of the status banner, `None` while the game is running
#[must_use]
pub const fn status_banner(status: GameStatus) -> Option<(&'static str, &'static str)> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(("You Win!", "Well done! 🎉")),
        GameStatus::Lost => Some(("You Lose!", "You better start learning Assembly 😭")),
    }
}

/// Flavour text for losing the badge at `index`
#[must_use]
pub fn farewell_message(badge: &Badge, index: usize) -> String {
    FAREWELLS[index % FAREWELLS.len()].replace("{}", badge.name)
}

/// Farewell for the badge lost by the most recent guess, if any
#[must_use]
pub fn last_farewell(session: &Session) -> Option<String> {
    let index = session.last_lost_badge()?;
    BADGES.get(index).map(|badge| farewell_message(badge, index))
}

/// The word as space-separated slots, `_` for hidden letters
#[must_use]
pub fn masked_word(session: &Session) -> String {
    session
        .masked_word()
        .iter()
        .map(|slot| slot.map_or('_', |letter| letter.to_uppercase()))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// "N attempts left" with singular handling
#[must_use]
pub fn attempts_label(session: &Session) -> String {
    match session.remaining_attempts() {
        1 => "1 attempt left".to_string(),
        n => format!("{n} attempts left"),
    }
}
