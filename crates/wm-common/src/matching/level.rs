use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::error::MatchError;

/// Proficiency tier, ordered from least to most proficient.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    /// Numeric weight used by the skill matcher (25 / 50 / 75 / 100).
    pub const fn weight(self) -> u32 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 100,
        }
    }
}

pub const fn weight_of(level: SkillLevel) -> u32 {
    level.weight()
}

impl FromStr for SkillLevel {
    type Err = MatchError;

    /// Accepts tier names case-insensitively ("expert", " Advanced ").
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_ref().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MatchError::UnknownSkillLevel(input.to_string()))
    }
}
