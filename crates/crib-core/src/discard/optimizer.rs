use super::crib::{CribOwner, prune_by_crib};
use super::cut::{CutDeck, prune_by_cut};
use super::report::{DiscardReport, Recommendation};
use crate::error::CribError;
use crate::model::card::Card;
use crate::model::hand::ensure_distinct;
use crate::scoring::score_with_cut;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, event, trace};

pub const DEAL_SIZE: usize = 6;

/// One way of splitting a deal into four kept cards and two for the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardCandidate {
    pub retained: [Card; 4],
    pub discarded: [Card; 2],
    /// Points the four kept cards score before the cut.
    pub hand_score: u32,
}

impl DiscardCandidate {
    fn from_positions(deal: &[Card; DEAL_SIZE], first: usize, second: usize) -> Self {
        let mut retained = [deal[0]; 4];
        let mut slot = 0;
        for (position, card) in deal.iter().enumerate() {
            if position != first && position != second {
                retained[slot] = *card;
                slot += 1;
            }
        }
        Self {
            retained,
            discarded: [deal[first], deal[second]],
            hand_score: score_with_cut(&retained, None).total,
        }
    }
}

/// All fifteen discards of a deal, in position order.
pub fn enumerate_discards(deal: &[Card; DEAL_SIZE]) -> Vec<DiscardCandidate> {
    let mut candidates = Vec::with_capacity(15);
    for first in 0..DEAL_SIZE {
        for second in (first + 1)..DEAL_SIZE {
            candidates.push(DiscardCandidate::from_positions(deal, first, second));
        }
    }
    candidates
}

/// Discards whose kept cards score the most before the cut. Ties are all
/// kept, in enumeration order.
pub fn best_by_hand_score(deal: &[Card; DEAL_SIZE]) -> Vec<DiscardCandidate> {
    let mut best: Vec<DiscardCandidate> = Vec::new();
    for candidate in enumerate_discards(deal) {
        trace!(
            target: "crib_core::discard",
            retained = ?candidate.retained,
            discarded = ?candidate.discarded,
            hand_score = candidate.hand_score,
            "scored discard"
        );
        match best.first().map(|current| current.hand_score) {
            Some(top) if candidate.hand_score < top => {}
            Some(top) if candidate.hand_score == top => best.push(candidate),
            _ => {
                best.clear();
                best.push(candidate);
            }
        }
    }
    best
}

/// Runs the full discard search and reports every pruning stage that ran.
pub fn analyze_discard(deal: &[Card], crib: CribOwner) -> Result<DiscardReport, CribError> {
    let deal: &[Card; DEAL_SIZE] = deal.try_into().map_err(|_| CribError::InvalidHandSize {
        expected: "6",
        actual: deal.len(),
    })?;
    ensure_distinct(deal)?;

    let by_hand_score = best_by_hand_score(deal);
    debug!(
        target: "crib_core::discard",
        candidates = by_hand_score.len(),
        hand_score = by_hand_score.first().map(|c| c.hand_score),
        "hand score stage"
    );

    let mut by_crib_potential = None;
    let mut by_cut_average = None;
    let recommendation = if by_hand_score.len() > 1 {
        let by_crib = prune_by_crib(&by_hand_score, crib);
        debug!(
            target: "crib_core::discard",
            candidates = by_crib.len(),
            crib = crib.as_str(),
            "crib potential stage"
        );

        let recommendation = if by_crib.len() > 1 {
            let cut_deck = CutDeck::for_deal(deal);
            let by_cut = prune_by_cut(&by_crib, &cut_deck)?;
            debug!(
                target: "crib_core::discard",
                candidates = by_cut.len(),
                cut_cards = cut_deck.len(),
                "cut average stage"
            );
            // Remaining ties are settled by enumeration order.
            let best = by_cut.first().ok_or(CribError::EmptyCandidateSet)?;
            let recommendation = Recommendation::from_cut(best, by_cut.len());
            by_cut_average = Some(by_cut);
            recommendation
        } else {
            let best = by_crib.first().ok_or(CribError::EmptyCandidateSet)?;
            Recommendation::from_crib(best)
        };
        by_crib_potential = Some(by_crib);
        recommendation
    } else {
        let best = by_hand_score.first().ok_or(CribError::EmptyCandidateSet)?;
        Recommendation::from_hand_score(best)
    };

    event!(
        target: "crib_core::discard",
        Level::INFO,
        retained = ?recommendation.retained,
        discarded = ?recommendation.discarded,
        hand_score = recommendation.hand_score,
        resolved_by = recommendation.resolved_by.as_str(),
        remaining_ties = recommendation.remaining_ties,
        "discard recommended"
    );

    Ok(DiscardReport {
        deal: *deal,
        crib,
        by_hand_score,
        by_crib_potential,
        by_cut_average,
        recommendation,
    })
}

/// Recommended four cards to keep and two to throw for a six-card deal.
pub fn recommend_discard(deal: &[Card], crib: CribOwner) -> Result<Recommendation, CribError> {
    analyze_discard(deal, crib).map(|report| report.recommendation)
}
