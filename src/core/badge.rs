//! Programming-language badges
//!
//! Each wrong guess costs one badge. The final badge is never lost, so the
//! list length bounds the number of wrong guesses a player can afford.

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// A decorative badge shown above the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub name: &'static str,
    pub color: Rgb,
    pub background: Rgb,
}

impl Badge {
    const fn new(name: &'static str, color: u32, background: u32) -> Self {
        Self {
            name,
            color: Rgb::from_hex(color),
            background: Rgb::from_hex(background),
        }
    }
}

/// The badge row, in display order
pub const BADGES: &[Badge] = &[
    Badge::new("HTML", 0xF9F4DA, 0xE2680F),
    Badge::new("CSS", 0xF9F4DA, 0x328AF1),
    Badge::new("JavaScript", 0x1E1E1E, 0xF4EB13),
    Badge::new("React", 0x1E1E1E, 0x2ED3E9),
    Badge::new("TypeScript", 0xF9F4DA, 0x298EC6),
    Badge::new("Node.js", 0xF9F4DA, 0x599137),
    Badge::new("Python", 0x1E1E1E, 0xFFD742),
    Badge::new("Assembly", 0xF9F4DA, 0x2D519F),
];

/// Wrong guesses allowed before the game is lost
pub const MAX_WRONG_GUESSES: usize = BADGES.len() - 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_badges_allow_seven_wrong_guesses() {
        assert_eq!(BADGES.len(), 8);
        assert_eq!(MAX_WRONG_GUESSES, 7);
    }

    #[test]
    fn last_badge_is_assembly() {
        assert_eq!(BADGES.last().map(|b| b.name), Some("Assembly"));
    }

    #[test]
    fn rgb_from_hex() {
        assert_eq!(Rgb::from_hex(0xE2680F), Rgb(0xE2, 0x68, 0x0F));
        assert_eq!(Rgb::from_hex(0x000000), Rgb(0, 0, 0));
    }
}
