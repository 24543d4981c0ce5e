use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Standard deck shuffled by a `StdRng` seeded from `seed`.
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Self::standard();
        deck.cards.shuffle(&mut rng);
        deck
    }

    /// Copy of the deck with every card in `used` removed.
    pub fn without(&self, used: &[Card]) -> Self {
        let cards = self
            .cards
            .iter()
            .copied()
            .filter(|card| !used.contains(card))
            .collect();
        Self { cards }
    }

    /// Top `count` cards, or `None` when the deck is too short.
    pub fn deal(&self, count: usize) -> Option<&[Card]> {
        self.cards.get(..count)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, Deck};
    use crate::model::hand::ensure_distinct;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(ensure_distinct(deck.cards()).is_ok());
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn without_removes_only_used_cards() {
        let deck = Deck::shuffled_with_seed(7);
        let dealt = deck.deal(6).unwrap().to_vec();
        let rest = Deck::standard().without(&dealt);
        assert_eq!(rest.len(), 46);
        assert!(dealt.iter().all(|card| !rest.cards().contains(card)));
    }

    #[test]
    fn deal_refuses_more_than_available() {
        let deck = Deck::standard();
        assert_eq!(deck.deal(6).map(<[_]>::len), Some(6));
        assert!(deck.deal(DECK_SIZE + 1).is_none());
    }
}
