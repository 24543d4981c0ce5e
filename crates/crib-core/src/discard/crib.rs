use super::keep_maximal;
use super::optimizer::DiscardCandidate;
use crate::model::card::Card;
use serde::{Deserialize, Serialize};

const JACK_BONUS: f32 = 0.5;

/// Who counts the crib this hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CribOwner {
    #[default]
    Mine,
    Opponent,
}

impl CribOwner {
    pub const fn from_is_mine(is_mine: bool) -> Self {
        if is_mine {
            CribOwner::Mine
        } else {
            CribOwner::Opponent
        }
    }

    /// Crib value helps the dealer and hurts the pone.
    pub fn signed(self, bonus: f32) -> f32 {
        match self {
            CribOwner::Mine => bonus,
            CribOwner::Opponent => 0.0 - bonus,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CribOwner::Mine => "mine",
            CribOwner::Opponent => "opponent",
        }
    }
}

/// Strongest crib property of a discarded pair. Checked in declaration
/// order; the first that holds is the only one credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CribPattern {
    Fifteen,
    Pair,
    Connected,
    Suited,
    Unrelated,
}

impl CribPattern {
    pub fn classify(discarded: [Card; 2]) -> Self {
        let [first, second] = discarded;
        if first.pegging_value() + second.pegging_value() == 15 {
            CribPattern::Fifteen
        } else if first.rank == second.rank {
            CribPattern::Pair
        } else if first.rank_index().abs_diff(second.rank_index()) == 1 {
            CribPattern::Connected
        } else if first.suit == second.suit {
            CribPattern::Suited
        } else {
            CribPattern::Unrelated
        }
    }

    pub const fn base_bonus(self) -> f32 {
        match self {
            CribPattern::Fifteen => 4.0,
            CribPattern::Pair => 3.0,
            CribPattern::Connected => 2.0,
            CribPattern::Suited => 1.0,
            CribPattern::Unrelated => 0.0,
        }
    }
}

/// Signed estimate of what the discarded pair adds to the crib.
pub fn crib_bonus(discarded: [Card; 2], owner: CribOwner) -> f32 {
    let mut bonus = CribPattern::classify(discarded).base_bonus();
    if discarded.iter().any(|card| card.is_jack()) {
        bonus += JACK_BONUS;
    }
    owner.signed(bonus)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CribRanked {
    pub candidate: DiscardCandidate,
    pub pattern: CribPattern,
    pub crib_bonus: f32,
}

impl CribRanked {
    pub fn rank(candidate: DiscardCandidate, owner: CribOwner) -> Self {
        Self {
            candidate,
            pattern: CribPattern::classify(candidate.discarded),
            crib_bonus: crib_bonus(candidate.discarded, owner),
        }
    }

    pub fn adjusted_score(&self) -> f32 {
        self.candidate.hand_score as f32 + self.crib_bonus
    }
}

/// Ranks tied candidates by crib potential and keeps the best.
pub fn prune_by_crib(candidates: &[DiscardCandidate], owner: CribOwner) -> Vec<CribRanked> {
    let ranked: Vec<CribRanked> = candidates
        .iter()
        .map(|candidate| CribRanked::rank(*candidate, owner))
        .collect();
    keep_maximal(&ranked, |entry| f64::from(entry.adjusted_score()))
}
