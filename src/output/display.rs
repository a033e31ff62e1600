//! Display functions for line mode

use super::formatters::{TAGLINE, TITLE, attempts_label, last_farewell, masked_word, status_banner};
use crate::core::{BADGES, GameStatus, Letter, LetterState, Session};
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Print the title block
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).yellow())?;
    writeln!(out, " {}", TITLE.bright_yellow().bold())?;
    writeln!(out, " {}", TAGLINE.bright_black())?;
    writeln!(out, "{}", "═".repeat(60).yellow())
}

/// Print the full board: banner, badges, word slots and keyboard
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out)?;

    match (session.status(), status_banner(session.status())) {
        (GameStatus::Won, Some((headline, subtitle))) => {
            writeln!(out, "  {} {}", headline.green().bold(), subtitle.green())?;
        }
        (GameStatus::Lost, Some((headline, subtitle))) => {
            writeln!(out, "  {} {}", headline.red().bold(), subtitle.red())?;
        }
        _ => {
            if let Some(farewell) = last_farewell(session) {
                writeln!(out, "  {}", farewell.italic().bright_magenta())?;
            } else {
                writeln!(out)?;
            }
        }
    }

    // Badge row
    let badges: Vec<String> = BADGES
        .iter()
        .enumerate()
        .map(|(i, badge)| {
            if session.is_badge_lost(i) {
                "💀".dimmed().to_string()
            } else {
                let (fg, bg) = (badge.color, badge.background);
                format!(" {} ", badge.name)
                    .truecolor(fg.0, fg.1, fg.2)
                    .on_truecolor(bg.0, bg.1, bg.2)
                    .to_string()
            }
        })
        .collect();
    writeln!(out, "\n  {}", badges.join(" "))?;

    // Word slots
    let word = masked_word(session);
    let word = if session.status() == GameStatus::Lost {
        word.red().bold()
    } else {
        word.bright_white().bold()
    };
    writeln!(out, "\n  {word}   ({})", attempts_label(session).bright_black())?;

    // Keyboard
    let keys: Vec<String> = Letter::alphabet()
        .map(|letter| {
            let key = letter.to_uppercase().to_string();
            match session.letter_state(letter) {
                LetterState::Correct => key.black().on_green().to_string(),
                LetterState::Wrong => key.white().on_red().to_string(),
                LetterState::Unguessed if session.is_over() => key.bright_black().to_string(),
                LetterState::Unguessed => key.black().on_yellow().to_string(),
            }
        })
        .collect();
    writeln!(out, "\n  {}", keys[..13].join(" "))?;
    writeln!(out, "  {}\n", keys[13..].join(" "))
}

/// Print the per-process win statistics
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_statistics<W: Write>(out: &mut W, stats: Statistics) -> io::Result<()> {
    writeln!(
        out,
        "  Games: {} | Won: {} | Win rate: {}",
        stats.games_played,
        stats.games_won,
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    )
}

/// Print the celebration banner shown once per win
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_celebration<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "   🎉 🎊 ✨  A S S E M B L Y   D E F E A T E D !  ✨ 🎊 🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(
        out,
        "   Solved {} with {} to spare",
        session.word().text().to_uppercase().bright_white().bold(),
        attempts_label(session)
            .trim_end_matches(" left")
            .bright_cyan()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}
