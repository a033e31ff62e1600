//! Assembly: Endgame - CLI
//!
//! Hangman with a TUI and a plain line mode.

use anyhow::Result;
use assembly_endgame::{
    commands::run_simple,
    game::Game,
    interactive::{App, run_tui},
    logging::{LogSink, init_logger},
    wordlists::WordPool,
};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before every programming language falls to Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word selection (same seed, same sequence of words)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,

    /// Write logs to this file (required to see logs in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level '{s}' (off, error, warn, info, debug, trace)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let owns_terminal = matches!(command, Commands::Play);

    init_logger(
        cli.log_level,
        LogSink::select(cli.log_file.as_deref(), owns_terminal),
    )?;

    let pool = WordPool::embedded();
    info!("loaded {} words", pool.len());

    let mut game = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            Game::seeded(pool, seed)
        }
        None => Game::new(pool),
    };

    match command {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(&mut game),
    }
}
