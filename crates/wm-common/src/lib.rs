pub mod api;
pub mod error;
pub mod logging;
pub mod matching;
pub mod run_id;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use error::MatchError;
use matching::{Availability, SkillLevel};

/// Lowercased form used for case-insensitive skill lookups.
fn skill_key(name: &str) -> String {
    name.to_lowercase()
}

/// Clamps a percentage into [0, 100].
fn clamp_percent(field: &'static str, value: i32) -> u8 {
    let clamped = value.clamp(0, 100);
    if clamped != value {
        warn!(field, value, clamped, "percentage out of range; clamped");
    }
    // in range after the clamp above
    clamped as u8
}

/// One entry of a project's required skill profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequirement {
    name: String,
    key: String,
    level: SkillLevel,
}

impl SkillRequirement {
    /// Rejects blank names. The name is kept as given; only case is
    /// ignored when matching.
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Result<Self, MatchError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MatchError::BlankSkillName);
        }

        Ok(Self {
            key: skill_key(&name),
            name,
            level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSkill {
    name: String,
    key: String,
    level: SkillLevel,
    proficiency_score: u8,
    years_experience: u32,
}

impl WorkerSkill {
    /// `proficiency_score` is clamped into [0, 100]; it is informational and
    /// does not affect scoring.
    pub fn new(
        name: impl Into<String>,
        level: SkillLevel,
        proficiency_score: i32,
        years_experience: u32,
    ) -> Result<Self, MatchError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MatchError::BlankSkillName);
        }

        Ok(Self {
            key: skill_key(&name),
            name,
            level,
            proficiency_score: clamp_percent("proficiency_score", proficiency_score),
            years_experience,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }

    pub fn proficiency_score(&self) -> u8 {
        self.proficiency_score
    }

    pub fn years_experience(&self) -> u32 {
        self.years_experience
    }
}

/// Candidate snapshot supplied by the caller for one matching request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    id: String,
    availability: Availability,
    workload_percent: u8,
    skill_utilization_percent: u8,
    skills: Vec<WorkerSkill>,
}

impl Worker {
    /// Out-of-range percentages are clamped rather than rejected.
    pub fn new(
        id: impl Into<String>,
        availability: Availability,
        workload_percent: i32,
        skill_utilization_percent: i32,
    ) -> Result<Self, MatchError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(MatchError::BlankWorkerId);
        }

        Ok(Self {
            id,
            availability,
            workload_percent: clamp_percent("workload_percent", workload_percent),
            skill_utilization_percent: clamp_percent(
                "skill_utilization_percent",
                skill_utilization_percent,
            ),
            skills: Vec::new(),
        })
    }

    /// Adds a skill; names must be unique ignoring case.
    pub fn with_skill(mut self, skill: WorkerSkill) -> Result<Self, MatchError> {
        if self.skill(&skill.key).is_some() {
            return Err(MatchError::DuplicateWorkerSkill {
                worker_id: self.id,
                skill: skill.name,
            });
        }
        self.skills.push(skill);
        Ok(self)
    }

    /// Convenience wrapper over [`WorkerSkill::new`] + [`Worker::with_skill`];
    /// a blank name is reported against this worker.
    pub fn add_skill(
        self,
        name: impl Into<String>,
        level: SkillLevel,
        proficiency_score: i32,
        years_experience: u32,
    ) -> Result<Self, MatchError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MatchError::BlankWorkerSkillName { worker_id: self.id });
        }

        let skill = WorkerSkill::new(name, level, proficiency_score, years_experience)?;
        self.with_skill(skill)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn workload_percent(&self) -> u8 {
        self.workload_percent
    }

    pub fn skill_utilization_percent(&self) -> u8 {
        self.skill_utilization_percent
    }

    pub fn skills(&self) -> &[WorkerSkill] {
        &self.skills
    }

    fn skill(&self, key: &str) -> Option<&WorkerSkill> {
        self.skills.iter().find(|s| s.key == key)
    }
}

/// Ranked output row, one per input worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub worker_id: String,
    /// Composite score (0–100).
    pub match_score: u8,
    /// Share of the required skill weight the worker satisfies (0–100).
    pub skill_match_percent: u8,
    pub availability: Availability,
    pub workload_percent: u8,
    /// Passed through for display; not used in scoring.
    pub skill_utilization_percent: u8,
}
