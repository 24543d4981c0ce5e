pub mod discard;
pub mod error;
pub mod model;
pub mod scoring;

pub use discard::{CribOwner, DiscardReport, Recommendation, analyze_discard, recommend_discard};
pub use error::CribError;
pub use scoring::{ScoreBreakdown, score_breakdown, score_hand};
