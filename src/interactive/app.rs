//! TUI application state and logic

use super::celebration::{CONFETTI_PIECES, Celebration};
use crate::core::{GameStatus, GuessOutcome, Letter};
use crate::game::Game;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Frame interval while waiting for input
const TICK_RATE: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub game: Game,
    pub celebration: Option<Celebration>,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            celebration: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Route a key press
    ///
    /// Letters guess while the game runs. Once it is over, letters are inert
    /// and only Enter/`n` (new game) and `q` (quit) do anything. Letters
    /// held with Ctrl or Alt are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Shift is fine (uppercase letters); Ctrl/Alt chords are never guesses
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let over = self.game.session().is_over();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter if over => self.new_game(),
            KeyCode::Char('n' | 'N') if over && plain => self.new_game(),
            KeyCode::Char('q' | 'Q') if over && plain => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if plain => self.guess_char(c),
            _ => {}
        }
    }

    /// Guess a typed character; anything that isn't a letter is ignored
    pub fn guess_char(&mut self, c: char) {
        let Ok(letter) = Letter::new(c) else {
            debug!("ignoring non-letter key {c:?}");
            return;
        };

        let report = self.game.guess(letter);
        self.notice = match report.outcome {
            GuessOutcome::AlreadyGuessed => {
                Some(format!("{} was already guessed", letter.to_uppercase()))
            }
            GuessOutcome::Correct | GuessOutcome::Wrong | GuessOutcome::GameOver => None,
        };

        if report.finished == Some(GameStatus::Won) {
            self.celebration = Some(Celebration::new(&mut rand::rng(), CONFETTI_PIECES));
        }
    }

    /// Replace the session; ignored while a game is still running
    pub fn new_game(&mut self) {
        if !self.game.session().is_over() {
            return;
        }
        self.game.new_session();
        self.celebration = None;
        self.notice = None;
    }

    /// Advance animations by one frame
    pub fn on_tick(&mut self) {
        if let Some(celebration) = &mut self.celebration {
            celebration.tick();
            if celebration.is_finished() {
                self.celebration = None;
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event reading fails.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let guard = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    let restored = guard.restore();

    if let Err(err) = &res {
        error!("TUI stopped: {err:#}");
    }

    res?;
    restored.context("failed to restore terminal")
}

/// Run every restore step, then report the first failure
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Runs `restore` exactly once: explicitly, or on drop (including panic unwinding)
struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
    done: bool,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    const fn new(restore: F) -> Self {
        Self {
            restore,
            done: false,
        }
    }

    fn restore(mut self) -> io::Result<()> {
        self.done = true;
        (self.restore)()
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if !self.done {
            if let Err(err) = (self.restore)() {
                error!("failed to restore terminal: {err}");
            }
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
