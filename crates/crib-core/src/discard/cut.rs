use super::crib::CribRanked;
use super::keep_maximal;
use super::optimizer::DiscardCandidate;
use crate::error::CribError;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::scoring::score_with_cut;
use serde::{Deserialize, Serialize};

/// Every card that can still be cut once a deal is known: the standard
/// deck minus the six dealt cards.
#[derive(Debug, Clone)]
pub struct CutDeck {
    deal: [Card; 6],
    cards: Vec<Card>,
}

impl CutDeck {
    pub fn for_deal(deal: &[Card; 6]) -> Self {
        let cards = Deck::standard().without(deal).cards().to_vec();
        Self { deal: *deal, cards }
    }

    /// First committed card of the candidate that is not part of this deal.
    /// `None` means the deck excludes every card the candidate holds.
    pub fn foreign_card(&self, candidate: &DiscardCandidate) -> Option<Card> {
        candidate
            .retained
            .iter()
            .chain(candidate.discarded.iter())
            .find(|card| !self.deal.contains(card))
            .copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of the five-card scores over every possible cut.
    pub fn total_score(&self, retained: &[Card; 4]) -> u32 {
        self.cards
            .iter()
            .map(|cut| score_with_cut(retained, Some(*cut)).total)
            .sum()
    }

    /// Mean five-card score over every possible cut. The deck always holds
    /// the 46 cards left after a deal.
    pub fn average_score(&self, retained: &[Card; 4]) -> f64 {
        f64::from(self.total_score(retained)) / self.cards.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRanked {
    pub candidate: DiscardCandidate,
    pub crib_bonus: f32,
    pub cut_average: f64,
}

/// Ranks candidates by their expected score over all cuts and keeps the best.
///
/// Fails with [`CribError::ForeignCandidate`] when a candidate holds a card
/// outside the deal `deck` was built for.
pub fn prune_by_cut(ranked: &[CribRanked], deck: &CutDeck) -> Result<Vec<CutRanked>, CribError> {
    let averaged = ranked
        .iter()
        .map(|entry| {
            if let Some(card) = deck.foreign_card(&entry.candidate) {
                return Err(CribError::ForeignCandidate { card });
            }
            Ok(CutRanked {
                candidate: entry.candidate,
                crib_bonus: entry.crib_bonus,
                cut_average: deck.average_score(&entry.candidate.retained),
            })
        })
        .collect::<Result<Vec<CutRanked>, CribError>>()?;
    Ok(keep_maximal(&averaged, |entry| entry.cut_average))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discard::crib::{CribOwner, CribRanked};
    use crate::model::hand::Hand;
    use crate::scoring::score_hand;

    fn deal(text: &str) -> [Card; 6] {
        let hand = Hand::parse(text).unwrap();
        hand.cards().try_into().unwrap()
    }

    fn candidate(deal: &[Card; 6], keep: [usize; 4], toss: [usize; 2]) -> DiscardCandidate {
        let retained = keep.map(|position| deal[position]);
        DiscardCandidate {
            retained,
            discarded: toss.map(|position| deal[position]),
            hand_score: score_hand(&retained).unwrap(),
        }
    }

    #[test]
    fn cut_deck_excludes_the_deal() {
        let dealt = deal("5/S 5/C 5/H J/D 2/S 9/C");
        let deck = CutDeck::for_deal(&dealt);
        assert_eq!(deck.len(), 46);
        assert!(dealt.iter().all(|card| !deck.cards().contains(card)));
    }

    #[test]
    fn average_equals_mean_of_individual_cuts() {
        let dealt = deal("5/S 5/C 5/H J/D 2/S 9/C");
        let deck = CutDeck::for_deal(&dealt);
        let retained = [dealt[0], dealt[1], dealt[2], dealt[3]];

        let mut scores = Vec::new();
        for cut in deck.cards() {
            let mut five = retained.to_vec();
            five.push(*cut);
            scores.push(f64::from(score_hand(&five).unwrap()));
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        assert!((deck.average_score(&retained) - mean).abs() < 1e-12);
        // The hand alone is worth 14 and no cut can lower it.
        assert!(deck.average_score(&retained) > 14.0);
    }

    #[test]
    fn foreign_card_checks_every_committed_card() {
        let dealt = deal("A/S 2/S 3/S 4/S 5/S 6/S");
        let deck = CutDeck::for_deal(&dealt);
        let ok = candidate(&dealt, [0, 1, 2, 3], [4, 5]);
        assert_eq!(deck.foreign_card(&ok), None);

        let king: Card = "K/H".parse().unwrap();
        let mut foreign = ok;
        foreign.discarded[1] = king;
        assert_eq!(deck.foreign_card(&foreign), Some(king));
    }

    #[test]
    fn prune_keeps_highest_average() {
        let dealt = deal("2/C 3/D 7/H 8/S K/C Q/D");
        let deck = CutDeck::for_deal(&dealt);
        let ranked = [
            CribRanked::rank(candidate(&dealt, [0, 1, 2, 3], [4, 5]), CribOwner::Mine),
            CribRanked::rank(candidate(&dealt, [2, 3, 4, 5], [0, 1]), CribOwner::Mine),
        ];
        let averages: Vec<f64> = ranked
            .iter()
            .map(|entry| deck.average_score(&entry.candidate.retained))
            .collect();

        let kept = prune_by_cut(&ranked, &deck).unwrap();
        assert!(!kept.is_empty());
        assert!(kept.len() <= ranked.len());
        let best = averages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(kept.iter().all(|entry| entry.cut_average == best));
        assert!(kept.iter().all(|entry| {
            ranked
                .iter()
                .any(|source| source.candidate == entry.candidate && source.crib_bonus == entry.crib_bonus)
        }));
    }

    #[test]
    fn prune_rejects_candidate_from_another_deal() {
        let dealt = deal("2/S 4/H 6/D 8/C 10/S Q/H");
        let other = deal("5/S 5/C 5/H J/D 2/C 9/C");
        let deck = CutDeck::for_deal(&dealt);
        let ranked = [
            CribRanked::rank(candidate(&dealt, [0, 1, 2, 3], [4, 5]), CribOwner::Mine),
            CribRanked::rank(candidate(&other, [0, 1, 2, 3], [4, 5]), CribOwner::Mine),
        ];

        assert_eq!(
            prune_by_cut(&ranked, &deck),
            Err(CribError::ForeignCandidate { card: other[0] })
        );
        assert_eq!(deck.foreign_card(&ranked[0].candidate), None);
    }
}
