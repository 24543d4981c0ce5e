use crate::error::CribError;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn pegging_value(self) -> u8 {
        self.rank.pegging_value()
    }

    pub const fn rank_index(self) -> u8 {
        self.rank.index()
    }

    pub const fn is_jack(self) -> bool {
        matches!(self.rank, Rank::Jack)
    }
}

impl FromStr for Card {
    type Err = CribError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || CribError::InvalidCard {
            token: token.to_string(),
        };
        let (rank, suit) = token.split_once('/').ok_or_else(invalid)?;
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{:#}", self.rank, self.suit)
        } else {
            write!(f, "{}/{}", self.rank, self.suit)
        }
    }
}
