//! Skill-fit, availability and workload scoring for ranking workers against a
//! project's required skills.
//!
//! Pipeline (leaf first):
//! - [`level`]: tier → weight scale
//! - [`skills`]: per-worker skill-match percentage
//! - [`availability`]: availability bonus and workload term
//! - [`scoring`]: bounded composite score
//! - [`pipeline`]: validation, ordering and tie-breaking

pub mod availability;
pub mod level;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use availability::{Adjustment, Availability};
pub use level::{SkillLevel, weight_of};
pub use pipeline::{EmptyRequirementsPolicy, MatchingConfig, MatchingEngine, RankedWorker, TieBreaker, score};
pub use scoring::{MatchScore, MatchTier};
pub use skills::SkillMatchResult;

/// Rounds to the nearest integer, halves toward +∞.
///
/// Every stage of the score rounds this way (skill percent, workload penalty,
/// final score) and in that order.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value < 0.0 && rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}
