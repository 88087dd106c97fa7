use super::round_half_up;
use crate::{SkillRequirement, Worker};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub total_required_weight: u32,
    pub matched_weight: u32,
    /// round(matched / total * 100), or 0 when nothing is required.
    pub match_percent: u8,
    /// Required skills the worker meets or exceeds.
    pub matched_skills: Vec<String>,
    /// Required skills the worker has, but below the required tier.
    pub partial_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reason: String,
}

/// Weighs one worker's declared skills against a project's requirements.
///
/// Each requirement contributes `min(worker tier weight, required tier weight)`
/// when the worker has the skill (case-insensitive exact name), otherwise 0.
/// Exceeding a tier earns nothing extra, so strength in one skill never hides
/// the absence of another. Duplicate requirements are counted independently.
pub fn check_required_skills(requirements: &[SkillRequirement], worker: &Worker) -> SkillMatchResult {
    let mut total_required_weight = 0u32;
    let mut matched_weight = 0u32;
    let mut matched_skills = Vec::new();
    let mut partial_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for req in requirements {
        let required = req.level().weight();
        total_required_weight += required;

        match worker.skill(req.key()) {
            Some(skill) => {
                let held = skill.level().weight();
                matched_weight += held.min(required);
                if held >= required {
                    matched_skills.push(req.name().to_string());
                } else {
                    partial_skills.push(req.name().to_string());
                }
            }
            None => missing_skills.push(req.name().to_string()),
        }
    }

    let match_percent = if total_required_weight > 0 {
        let fraction = f64::from(matched_weight) / f64::from(total_required_weight);
        // matched <= total, so this stays within [0, 100]
        round_half_up(fraction * 100.0) as u8
    } else {
        0
    };

    let reason = if requirements.is_empty() {
        "no required skills".to_string()
    } else {
        format!(
            "{}/{} required weight ({}%) (met: {} / below tier: {} / missing: {})",
            matched_weight,
            total_required_weight,
            match_percent,
            list_or_none(&matched_skills),
            list_or_none(&partial_skills),
            list_or_none(&missing_skills),
        )
    };

    SkillMatchResult {
        total_required_weight,
        matched_weight,
        match_percent,
        matched_skills,
        partial_skills,
        missing_skills,
        reason,
    }
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
