use std::cmp::Ordering;

use tracing::{debug, info, instrument};

use super::scoring::{MatchScore, calculate_match_score};
use crate::{MatchResult, SkillRequirement, Worker, error::MatchError};

/// Secondary ordering for workers with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreaker {
    /// Keep roster order (stable sort).
    #[default]
    InputOrder,
    /// Worker id ascending, then roster order.
    WorkerId,
}

/// What to do when a project lists no required skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyRequirementsPolicy {
    /// Fail with [`MatchError::EmptyRequirements`].
    #[default]
    Reject,
    /// Score everyone on availability and workload alone.
    AvailabilityOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchingConfig {
    pub tie_breaker: TieBreaker,
    pub empty_requirements: EmptyRequirementsPolicy,
}

impl MatchingConfig {
    /// Reads `WM_TIE_BREAK` (`input_order` | `worker_id`) and
    /// `WM_ALLOW_EMPTY_REQUIREMENTS` (`1` / `true`). Unrecognized values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tie_breaker = lookup("WM_TIE_BREAK")
            .and_then(|raw| parse_tie_breaker(&raw))
            .unwrap_or(defaults.tie_breaker);

        let empty_requirements = match lookup("WM_ALLOW_EMPTY_REQUIREMENTS") {
            Some(raw) if raw == "1" || raw.trim().eq_ignore_ascii_case("true") => {
                EmptyRequirementsPolicy::AvailabilityOnly
            }
            _ => defaults.empty_requirements,
        };

        Self {
            tie_breaker,
            empty_requirements,
        }
    }
}

fn parse_tie_breaker(raw: &str) -> Option<TieBreaker> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "input_order" | "stable" => Some(TieBreaker::InputOrder),
        "worker_id" | "id" => Some(TieBreaker::WorkerId),
        _ => None,
    }
}

/// One worker's place in a ranking, with the breakdown that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWorker {
    /// Position of the worker in the input roster.
    pub input_index: usize,
    pub score: MatchScore,
    pub result: MatchResult,
}

/// Scores and orders a roster snapshot against a requirement list.
///
/// Holds only configuration; every call is independent and reads nothing but
/// its arguments.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Ranks every worker, best first, keeping the per-worker breakdown.
    ///
    /// Output length always equals `workers.len()`; nobody is filtered out.
    #[instrument(skip_all, fields(requirements = requirements.len(), workers = workers.len()))]
    pub fn rank_scored(
        &self,
        requirements: &[SkillRequirement],
        workers: &[Worker],
    ) -> Result<Vec<RankedWorker>, MatchError> {
        if requirements.is_empty()
            && self.config.empty_requirements == EmptyRequirementsPolicy::Reject
        {
            return Err(MatchError::EmptyRequirements);
        }

        let mut ranked: Vec<RankedWorker> = workers
            .iter()
            .enumerate()
            .map(|(input_index, worker)| {
                let score = calculate_match_score(requirements, worker);
                debug!(
                    worker_id = worker.id(),
                    skill_match_percent = score.skills.match_percent,
                    availability_bonus = score.adjustment.availability_bonus,
                    workload_term = score.adjustment.workload_term,
                    match_score = score.total,
                    "scored worker"
                );
                RankedWorker {
                    input_index,
                    result: score.to_result(worker),
                    score,
                }
            })
            .collect();

        let tie_breaker = self.config.tie_breaker;
        ranked.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| match tie_breaker {
                    TieBreaker::InputOrder => Ordering::Equal,
                    TieBreaker::WorkerId => a.result.worker_id.cmp(&b.result.worker_id),
                })
        });

        info!(
            ranked = ranked.len(),
            top_score = ranked.first().map(|r| r.score.total),
            tie_breaker = ?tie_breaker,
            "ranked workers"
        );

        Ok(ranked)
    }

    /// Ranks every worker, best first.
    pub fn rank_workers(
        &self,
        requirements: &[SkillRequirement],
        workers: &[Worker],
    ) -> Result<Vec<MatchResult>, MatchError> {
        Ok(self
            .rank_scored(requirements, workers)?
            .into_iter()
            .map(|ranked| ranked.result)
            .collect())
    }
}

/// Ranks with the default configuration (reject empty requirements, keep
/// roster order on ties).
pub fn score(
    requirements: &[SkillRequirement],
    workers: &[Worker],
) -> Result<Vec<MatchResult>, MatchError> {
    MatchingEngine::default().rank_workers(requirements, workers)
}
