//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{GameStatus, GuessOutcome, Letter};
use crate::game::Game;
use crate::output::{print_board, print_celebration, print_header, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(game: &mut Game) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive the game from any line-oriented input
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<R: BufRead, W: Write>(game: &mut Game, input: &mut R, out: &mut W) -> Result<()> {
    print_header(out)?;
    writeln!(out, "Type a letter and press Enter to guess.")?;
    writeln!(out, "Commands: 'new' for a new game once this one is over, 'quit' to exit")?;
    print_board(out, game.session())?;

    loop {
        let Some(line) = prompt(input, out, "Guess")? else {
            debug!("input closed");
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" if game.session().is_over() => {
                game.new_session();
                writeln!(out, "\n🔄 New game started!")?;
                print_board(out, game.session())?;
            }
            "new" => {
                writeln!(out, "{}", "Finish this game first!".yellow())?;
            }
            "" => {}
            text => {
                let mut chars = text.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(c), None) => Letter::new(c).ok(),
                    _ => None,
                };

                let Some(letter) = letter else {
                    writeln!(out, "{}", "❌ Type a single letter from A to Z".red())?;
                    continue;
                };

                let report = game.guess(letter);
                match report.outcome {
                    GuessOutcome::AlreadyGuessed => {
                        writeln!(out, "Already guessed {}", letter.to_uppercase())?;
                    }
                    GuessOutcome::GameOver => {
                        writeln!(out, "Game over - type 'new' to play again")?;
                    }
                    GuessOutcome::Correct | GuessOutcome::Wrong => {
                        print_board(out, game.session())?;
                    }
                }

                if let Some(status) = report.finished {
                    if status == GameStatus::Won {
                        print_celebration(out, game.session())?;
                    }
                    print_statistics(out, game.stats())?;
                    writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
                }
            }
        }
    }
}

/// Print a prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}
