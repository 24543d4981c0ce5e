use crate::model::card::Card;
use thiserror::Error;

/// Failures raised at the scoring and discard boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CribError {
    #[error("invalid card {token:?}: expected <rank>/<suit> such as 10/H or Q/S")]
    InvalidCard { token: String },
    #[error("expected {expected} cards, found {actual}")]
    InvalidHandSize { expected: &'static str, actual: usize },
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("card {card} is not part of the deal the cut deck was built for")]
    ForeignCandidate { card: Card },
    /// Never produced by a correct discard search; reported rather than panicking.
    #[error("discard search produced no candidates")]
    EmptyCandidateSet,
}
