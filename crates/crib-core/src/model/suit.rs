use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "S" => Some(Suit::Spades),
            "H" => Some(Suit::Hearts),
            "D" => Some(Suit::Diamonds),
            "C" => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.glyph())
        } else {
            write!(f, "{}", self.letter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Suit;

    #[test]
    fn display_returns_ascii_letters() {
        assert_eq!(Suit::Clubs.to_string(), "C");
        assert_eq!(Suit::Hearts.to_string(), "H");
        assert_eq!(format!("{:#}", Suit::Spades), "\u{2660}");
    }

    #[test]
    fn from_symbol_accepts_only_uppercase_letters() {
        assert_eq!(Suit::from_symbol("D"), Some(Suit::Diamonds));
        assert_eq!(Suit::from_symbol("d"), None);
        assert_eq!(Suit::from_symbol("X"), None);
    }
}
