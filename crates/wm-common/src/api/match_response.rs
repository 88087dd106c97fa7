use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    MatchResult,
    matching::{MatchTier, RankedWorker, availability::is_overloaded, weights::SKILL_WEIGHT},
    run_id,
};

/// Ranked candidate list for a presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Process-level run id shared by every response of this process.
    pub match_run_id: String,
    pub engine_version: String,
    pub matched_at: DateTime<Utc>,
    pub candidate_count: usize,
    pub candidates: Vec<RankedCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking
    pub rank: usize,
    #[serde(flatten)]
    pub result: MatchResult,
    pub tier: MatchTier,
    /// Workload above 70%
    pub overloaded: bool,
    pub score_breakdown: ScoreBreakdown,
    /// Which required skills were met, below tier, or missing.
    pub skills_detail: String,
}

/// Contribution of each term to the raw (pre-rounding) score.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub availability: f64,
    pub workload: f64,
    pub raw_total: f64,
}

impl From<&RankedWorker> for RankedCandidate {
    fn from(ranked: &RankedWorker) -> Self {
        let score = &ranked.score;
        Self {
            rank: 0,
            result: ranked.result.clone(),
            tier: score.tier(),
            overloaded: is_overloaded(ranked.result.workload_percent),
            score_breakdown: ScoreBreakdown {
                skills: f64::from(score.skills.match_percent) * SKILL_WEIGHT,
                availability: f64::from(score.adjustment.availability_bonus),
                workload: score.adjustment.workload_term,
                raw_total: score.raw_total,
            },
            skills_detail: score.skills.reason.clone(),
        }
    }
}

impl MatchResponse {
    /// Builds the response from an already ordered ranking.
    pub fn from_ranking(ranking: &[RankedWorker], matched_at: DateTime<Utc>) -> Self {
        let candidates: Vec<RankedCandidate> = ranking
            .iter()
            .enumerate()
            .map(|(position, ranked)| RankedCandidate {
                rank: position + 1,
                ..RankedCandidate::from(ranked)
            })
            .collect();

        Self {
            match_run_id: run_id::get().to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            matched_at,
            candidate_count: candidates.len(),
            candidates,
        }
    }

    pub fn results(&self) -> impl Iterator<Item = &MatchResult> {
        self.candidates.iter().map(|c| &c.result)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{
        SkillRequirement, Worker,
        matching::{Availability, MatchingEngine, SkillLevel},
    };

    fn ranking() -> Vec<RankedWorker> {
        let requirements = vec![SkillRequirement::new("Java", SkillLevel::Advanced).unwrap()];
        let workers = vec![
            Worker::new("EMP003", Availability::Busy, 80, 75)
                .unwrap()
                .add_skill("Java", SkillLevel::Expert, 90, 4)
                .unwrap(),
            Worker::new("EMP001", Availability::Available, 30, 82).unwrap(),
        ];

        MatchingEngine::default()
            .rank_scored(&requirements, &workers)
            .unwrap()
    }

    #[test]
    fn numbers_candidates_from_one() {
        let matched_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let response = MatchResponse::from_ranking(&ranking(), matched_at);

        assert_eq!(response.candidate_count, 2);
        assert_eq!(response.candidates[0].rank, 1);
        assert_eq!(response.candidates[1].rank, 2);
        assert_eq!(response.matched_at, matched_at);
        assert_eq!(response.match_run_id.len(), 26);
    }

    #[test]
    fn carries_tier_overload_and_breakdown() {
        let response = MatchResponse::from_ranking(&ranking(), Utc::now());
        let top = &response.candidates[0];

        // 100 * 0.6 + 5 + 76 * 0.2 = 80.2
        assert_eq!(top.result.worker_id, "EMP003");
        assert_eq!(top.result.match_score, 80);
        assert_eq!(top.tier, MatchTier::Strong);
        assert!(top.overloaded);
        assert!((top.score_breakdown.raw_total - 80.2).abs() < 1e-9);
        assert!(top.skills_detail.contains("met: Java"));

        let second = &response.candidates[1];
        assert!(!second.overloaded);
        assert_eq!(second.tier, MatchTier::Weak);
    }

    #[test]
    fn serializes_flat_candidate_rows() {
        let response = MatchResponse::from_ranking(&ranking(), Utc::now());
        let json = serde_json::to_value(&response).unwrap();
        let row = &json["candidates"][0];

        assert_eq!(row["rank"], 1);
        assert_eq!(row["worker_id"], "EMP003");
        assert_eq!(row["availability"], "Busy");
        assert_eq!(row["tier"], "strong");
        assert_eq!(response.results().count(), 2);
    }
}
