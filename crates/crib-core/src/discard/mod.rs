pub mod crib;
pub mod cut;
pub mod optimizer;
pub mod report;

pub use crib::{CribOwner, CribPattern, CribRanked, crib_bonus, prune_by_crib};
pub use cut::{CutDeck, CutRanked, prune_by_cut};
pub use optimizer::{
    DiscardCandidate, analyze_discard, best_by_hand_score, enumerate_discards, recommend_discard,
};
pub use report::{DiscardReport, Recommendation, ResolvedBy};

/// Keeps the items whose key equals the maximum key, preserving order.
fn keep_maximal<T: Clone>(items: &[T], key: impl Fn(&T) -> f64) -> Vec<T> {
    let best = items
        .iter()
        .map(&key)
        .max_by(|a, b| a.total_cmp(b));
    match best {
        Some(best) => items
            .iter()
            .filter(|item| key(item) == best)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}
