use serde::{Deserialize, Serialize};

use crate::{
    SkillRequirement, Worker,
    error::MatchError,
    matching::{Availability, SkillLevel},
};

/// Matching request as supplied by a presentation layer.
///
/// Enumerations arrive as strings and percentages as plain integers; nothing
/// here is trusted until [`MatchRequest::into_validated`] succeeds. Every
/// field is required: a missing field is a deserialization error rather than
/// a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(alias = "requiredSkills")]
    pub required_skills: Vec<RequiredSkillInput>,
    pub workers: Vec<WorkerInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkillInput {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerInput {
    pub id: String,
    pub availability: String,
    pub workload: i32,
    #[serde(alias = "skillUtilization")]
    pub skill_utilization: i32,
    pub skills: Vec<WorkerSkillInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSkillInput {
    pub name: String,
    pub level: String,
    pub proficiency: i32,
    #[serde(alias = "yearsExp")]
    pub years_exp: u32,
}

/// Strongly typed form of a [`MatchRequest`], ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub requirements: Vec<SkillRequirement>,
    pub workers: Vec<Worker>,
}

impl MatchRequest {
    /// Converts every entry or fails on the first malformed one.
    ///
    /// Blank requirement rows are rejected, not dropped. Whether an empty
    /// requirement list is acceptable is left to the engine's policy.
    pub fn into_validated(self) -> Result<ValidatedRequest, MatchError> {
        let requirements = self
            .required_skills
            .into_iter()
            .enumerate()
            .map(|(index, input)| input.into_requirement().map_err(|err| err.in_requirement(index)))
            .collect::<Result<Vec<_>, _>>()?;

        let workers = self
            .workers
            .into_iter()
            .enumerate()
            .map(|(index, input)| input.into_worker().map_err(|err| err.in_worker(index)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedRequest {
            requirements,
            workers,
        })
    }
}

impl RequiredSkillInput {
    fn into_requirement(self) -> Result<SkillRequirement, MatchError> {
        let level: SkillLevel = self.level.parse()?;
        SkillRequirement::new(self.name, level)
    }
}

impl WorkerInput {
    fn into_worker(self) -> Result<Worker, MatchError> {
        let availability: Availability = self.availability.parse()?;
        let worker = Worker::new(self.id, availability, self.workload, self.skill_utilization)?;

        self.skills.into_iter().try_fold(worker, |worker, skill| {
            let level: SkillLevel = skill.level.parse()?;
            worker.add_skill(skill.name, level, skill.proficiency, skill.years_exp)
        })
    }
}
