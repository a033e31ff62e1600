//! TUI rendering with ratatui
//!
//! Header, status banner, badge row, word slots and on-screen alphabet.

use super::app::App;
use crate::core::{BADGES, Badge, GameStatus, Letter, LetterState, Rgb, Session};
use crate::output::formatters::{TAGLINE, TITLE, attempts_label, last_farewell, status_banner};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let session = app.game.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(4), // Status banner
            Constraint::Length(4), // Badges
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_banner(f, app, chunks[1]);
    render_badges(f, session, chunks[2]);
    render_word(f, session, chunks[3]);
    render_keyboard(f, session, chunks[4]);
    render_status(f, app, chunks[6]);

    if let Some(celebration) = &app.celebration {
        let area = f.area();
        f.render_widget(celebration, area);
    }
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn render_header(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::White)),
        );
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let session = app.game.session();
    let status = session.status();

    let (lines, color) = match (status, status_banner(status)) {
        (GameStatus::Won, Some((headline, subtitle))) => {
            (banner_lines(headline, subtitle), Color::Green)
        }
        (GameStatus::Lost, Some((headline, subtitle))) => {
            (banner_lines(headline, subtitle), Color::Red)
        }
        _ => {
            let text = app
                .notice
                .clone()
                .or_else(|| last_farewell(session))
                .unwrap_or_else(|| attempts_label(session));
            (
                vec![Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::ITALIC),
                ))],
                Color::DarkGray,
            )
        }
    };

    let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(banner, area);
}

fn banner_lines(headline: &'static str, subtitle: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(subtitle),
    ]
}

fn badge_span(badge: &Badge, lost: bool) -> Span<'static> {
    if lost {
        Span::styled("💀", Style::default().add_modifier(Modifier::DIM))
    } else {
        Span::styled(
            format!(" {} ", badge.name),
            Style::default()
                .fg(to_color(badge.color))
                .bg(to_color(badge.background)),
        )
    }
}

fn render_badges(f: &mut Frame, session: &Session, area: Rect) {
    let mut spans = Vec::with_capacity(BADGES.len() * 2);
    for (i, badge) in BADGES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(badge_span(badge, session.is_badge_lost(i)));
    }

    let badges = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Languages ").borders(Borders::ALL));
    f.render_widget(badges, area);
}

fn render_word(f: &mut Frame, session: &Session, area: Rect) {
    let mut spans = Vec::new();
    for (i, letter) in session.word().letters().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let span = if session.has_guessed(letter) {
            Span::styled(
                format!(" {} ", letter.to_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else if session.reveals(letter) {
            // Revealed by a loss without having been found
            Span::styled(
                format!(" {} ", letter.to_uppercase()),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::DIM | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(" _ ", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(word, area);
}

fn key_span(session: &Session, letter: Letter) -> Span<'static> {
    let style = match session.letter_state(letter) {
        LetterState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterState::Wrong => Style::default().fg(Color::White).bg(Color::Red),
        LetterState::Unguessed if session.is_letter_enabled(letter) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Unguessed => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!(" {} ", letter.to_uppercase()), style)
}

fn render_keyboard(f: &mut Frame, session: &Session, area: Rect) {
    let letters: Vec<Letter> = Letter::alphabet().collect();
    let rows: Vec<Line> = letters
        .chunks(13)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, &letter) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(key_span(session, letter));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.game.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let (help_text, color) = if app.game.session().is_over() {
        ("Enter/n: New Game | q: Quit", Color::Yellow)
    } else {
        ("a-z: Guess | Esc: Quit", Color::DarkGray)
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::wordlists::WordPool;
    use ratatui::{Terminal, backend::TestBackend};

    fn app_with(word: &str, guesses: &str) -> App {
        let mut app = App::new(Game::seeded(WordPool::from_slice(&[word]).unwrap(), 0));
        for c in guesses.chars() {
            app.guess_char(c);
        }
        app
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_title_and_keyboard() {
        let text = screen(&app_with("react", ""));
        assert!(text.contains("Assembly: Endgame"));
        assert!(text.contains(" A   B   C "));
        assert!(text.contains(" N   O   P "));
        assert!(text.contains("HTML"));
        assert!(text.contains("7 attempts left"));
        assert!(text.contains("a-z: Guess"));
    }

    #[test]
    fn hides_unguessed_letters() {
        let text = screen(&app_with("java", "a"));
        assert!(text.contains(" _   A   _   A "));
    }

    #[test]
    fn shows_farewell_and_skull_after_wrong_guess() {
        let text = screen(&app_with("java", "z"));
        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains("💀"));
        assert!(text.contains("CSS"));
    }

    #[test]
    fn win_banner() {
        let text = screen(&app_with("css", "cs"));
        assert!(text.contains("You Win!"));
        assert!(text.contains("Enter/n: New Game"));
    }

    #[test]
    fn loss_banner_reveals_word() {
        let app = app_with("java", "bqxzwku");
        let text = screen(&app);
        assert!(text.contains("You Lose!"));
        assert!(text.contains(" J   A   V   A "));
        assert!(text.contains("Games: 1 | Win Rate: 0%"));
    }
}
