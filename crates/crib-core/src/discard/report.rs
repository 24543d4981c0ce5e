use super::crib::{CribOwner, CribRanked};
use super::cut::CutRanked;
use super::optimizer::DiscardCandidate;
use crate::model::card::Card;
use serde::{Deserialize, Serialize};

/// Which pruning stage narrowed the candidates to the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedBy {
    HandScore,
    CribPotential,
    CutAverage,
}

impl ResolvedBy {
    pub const fn as_str(self) -> &'static str {
        match self {
            ResolvedBy::HandScore => "hand_score",
            ResolvedBy::CribPotential => "crib_potential",
            ResolvedBy::CutAverage => "cut_average",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub retained: [Card; 4],
    pub discarded: [Card; 2],
    pub hand_score: u32,
    pub resolved_by: ResolvedBy,
    /// Set once the crib stage has ranked this candidate.
    pub crib_bonus: Option<f32>,
    /// Set once the cut stage has ranked this candidate.
    pub cut_average: Option<f64>,
    /// Candidates still tied when the search stopped, this one included.
    pub remaining_ties: usize,
}

impl Recommendation {
    pub(crate) fn from_hand_score(best: &DiscardCandidate) -> Self {
        Self {
            retained: best.retained,
            discarded: best.discarded,
            hand_score: best.hand_score,
            resolved_by: ResolvedBy::HandScore,
            crib_bonus: None,
            cut_average: None,
            remaining_ties: 1,
        }
    }

    pub(crate) fn from_crib(best: &CribRanked) -> Self {
        Self {
            resolved_by: ResolvedBy::CribPotential,
            crib_bonus: Some(best.crib_bonus),
            ..Self::from_hand_score(&best.candidate)
        }
    }

    pub(crate) fn from_cut(best: &CutRanked, remaining_ties: usize) -> Self {
        Self {
            resolved_by: ResolvedBy::CutAverage,
            crib_bonus: Some(best.crib_bonus),
            cut_average: Some(best.cut_average),
            remaining_ties,
            ..Self::from_hand_score(&best.candidate)
        }
    }
}

/// Candidate sets after each stage that ran, plus the final pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscardReport {
    pub deal: [Card; 6],
    pub crib: CribOwner,
    pub by_hand_score: Vec<DiscardCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_crib_potential: Option<Vec<CribRanked>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_cut_average: Option<Vec<CutRanked>>,
    pub recommendation: Recommendation,
}

impl DiscardReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Size of the candidate set after each stage that ran, in order.
    pub fn stage_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![self.by_hand_score.len()];
        if let Some(ranked) = &self.by_crib_potential {
            sizes.push(ranked.len());
        }
        if let Some(ranked) = &self.by_cut_average {
            sizes.push(ranked.len());
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discard::optimizer::analyze_discard;
    use crate::model::hand::Hand;

    #[test]
    fn report_serializes_stage_names_in_snake_case() {
        let deal = Hand::parse("5/S 5/C 5/H J/D 2/S 9/C").unwrap();
        let report = analyze_discard(deal.cards(), CribOwner::Mine).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"resolved_by\": \"hand_score\""));
        assert!(json.contains("\"crib\": \"mine\""));
        assert!(!json.contains("by_crib_potential"));
    }

    #[test]
    fn report_roundtrips_through_json() {
        let deal = Hand::parse("A/S 2/H 3/D 4/C 6/S 8/H").unwrap();
        let report = analyze_discard(deal.cards(), CribOwner::Opponent).unwrap();
        let restored = DiscardReport::from_json(&report.to_json().unwrap()).unwrap();
        assert_eq!(restored.recommendation.retained, report.recommendation.retained);
        assert_eq!(restored.stage_sizes(), report.stage_sizes());
    }
}
