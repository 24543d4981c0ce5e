use crate::error::CribError;
use crate::model::card::Card;
use core::fmt;

/// Cards in deal order. Construction rejects duplicates; order is kept
/// because the last card of a five-card hand is the cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn with_cards(cards: Vec<Card>) -> Result<Self, CribError> {
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    /// Parses a whitespace-separated list of `<rank>/<suit>` tokens.
    pub fn parse(text: &str) -> Result<Self, CribError> {
        let cards = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::with_cards(cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, card) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            if f.alternate() {
                write!(f, "{card:#}")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

/// Rejects any rank+suit that appears more than once.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), CribError> {
    for (position, card) in cards.iter().enumerate() {
        if cards[position + 1..].contains(card) {
            return Err(CribError::DuplicateCard(*card));
        }
    }
    Ok(())
}
