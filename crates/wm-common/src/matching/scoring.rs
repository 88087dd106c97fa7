use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use super::{
    availability::{Adjustment, adjust},
    round_half_up,
    skills::{SkillMatchResult, check_required_skills},
    weights::{MAX_SCORE, SKILL_WEIGHT},
};
use crate::{MatchResult, SkillRequirement, Worker};

/// Full breakdown behind one worker's composite score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub skills: SkillMatchResult,
    pub adjustment: Adjustment,
    /// `skill% * 0.6 + bonus + workload term`, before rounding and clamping.
    pub raw_total: f64,
    /// Final score in [0, 100].
    pub total: u8,
}

impl MatchScore {
    pub fn to_result(&self, worker: &Worker) -> MatchResult {
        MatchResult {
            worker_id: worker.id().to_string(),
            match_score: self.total,
            skill_match_percent: self.skills.match_percent,
            availability: worker.availability(),
            workload_percent: worker.workload_percent(),
            skill_utilization_percent: worker.skill_utilization_percent(),
        }
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.total)
    }
}

/// Display band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchTier {
    /// 80 and above
    Strong,
    /// 60 to 79
    Moderate,
    Weak,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchTier::Strong
        } else if score >= 60 {
            MatchTier::Moderate
        } else {
            MatchTier::Weak
        }
    }
}

/// Blends the three terms into a score in [0, 100].
///
/// The sum is evaluated left to right in `f64` (skill share, then bonus, then
/// workload term) and rounded once at the end; the clamp is only a safety
/// bound since the best case is exactly 100.
pub fn composite_score(skill_match_percent: u8, adjustment: &Adjustment) -> (f64, u8) {
    let raw = f64::from(skill_match_percent) * SKILL_WEIGHT
        + f64::from(adjustment.availability_bonus)
        + adjustment.workload_term;

    let total = round_half_up(raw).clamp(0.0, f64::from(MAX_SCORE));
    // clamped into [0, 100] above
    (raw, total as u8)
}

pub fn calculate_match_score(requirements: &[SkillRequirement], worker: &Worker) -> MatchScore {
    let skills = check_required_skills(requirements, worker);
    let adjustment = adjust(worker);
    let (raw_total, total) = composite_score(skills.match_percent, &adjustment);

    MatchScore {
        skills,
        adjustment,
        raw_total,
        total,
    }
}
