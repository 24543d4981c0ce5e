pub mod combinations;
pub mod engine;

pub use combinations::{Combination, Combinations};
pub use engine::{ScoreBreakdown, score_breakdown, score_hand, score_with_cut};
