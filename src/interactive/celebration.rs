//! Confetti effect drawn over the board after a win

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Animation length in ticks
pub const CELEBRATION_TICKS: u16 = 60;

/// Confetti pieces spawned per win
pub const CONFETTI_PIECES: usize = 120;

const GLYPHS: &[char] = &['*', '+', '•', '◆', '▪', '~', '✦'];

const COLORS: &[Color] = &[
    Color::Yellow,
    Color::LightRed,
    Color::LightGreen,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
];

/// One piece of confetti, positioned in fractions of the screen
#[derive(Debug, Clone, Copy)]
struct Piece {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    glyph: char,
    color: Color,
}

/// A one-shot falling-confetti animation
#[derive(Debug, Clone)]
pub struct Celebration {
    pieces: Vec<Piece>,
    ticks_left: u16,
}

impl Celebration {
    /// Scatter `count` pieces above and across the top of the screen
    pub fn new<R: Rng>(rng: &mut R, count: usize) -> Self {
        let pieces = (0..count)
            .map(|_| Piece {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(-0.6..0.1),
                dx: rng.random_range(-0.004..0.004),
                dy: rng.random_range(0.01..0.035),
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                color: COLORS[rng.random_range(0..COLORS.len())],
            })
            .collect();

        Self {
            pieces,
            ticks_left: CELEBRATION_TICKS,
        }
    }

    /// Advance the animation by one frame
    pub fn tick(&mut self) {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        for piece in &mut self.pieces {
            piece.x += piece.dx;
            piece.y += piece.dy;
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.ticks_left == 0
    }

    fn is_visible(piece: &Piece) -> bool {
        (0.0..1.0).contains(&piece.x) && (0.0..1.0).contains(&piece.y)
    }
}

impl Widget for &Celebration {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for piece in self.pieces.iter().filter(|p| Celebration::is_visible(p)) {
            let x = area.x + (piece.x * f32::from(area.width)) as u16;
            let y = area.y + (piece.y * f32::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(piece.glyph).set_fg(piece.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn finishes_after_fixed_ticks() {
        let mut celebration = Celebration::new(&mut StdRng::seed_from_u64(5), 10);
        for _ in 0..CELEBRATION_TICKS - 1 {
            celebration.tick();
            assert!(!celebration.is_finished());
        }
        celebration.tick();
        assert!(celebration.is_finished());
    }

    #[test]
    fn render_stays_inside_area() {
        let mut celebration = Celebration::new(&mut StdRng::seed_from_u64(2), CONFETTI_PIECES);
        for _ in 0..15 {
            celebration.tick();
        }
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        (&celebration).render(area, &mut buf);

        let drawn = buf
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert!(drawn > 0);
    }
}
