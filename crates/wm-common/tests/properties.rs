use std::collections::BTreeMap;

use proptest::prelude::*;
use proptest::sample::select;
use wm_common::matching::availability::{adjust, availability_bonus};
use wm_common::matching::{Availability, MatchingEngine, SkillLevel, score};
use wm_common::{SkillRequirement, Worker};

const SKILL_POOL: [&str; 6] = ["Python", "React", "Java", "Docker", "AWS", "SQL"];
const OTHER_POOL: [&str; 4] = ["Figma", "Rust", "Go", "Terraform"];

fn level() -> impl Strategy<Value = SkillLevel> {
    select(SkillLevel::ALL.to_vec())
}

fn availability() -> impl Strategy<Value = Availability> {
    select(vec![
        Availability::Available,
        Availability::Busy,
        Availability::OnLeave,
    ])
}

fn requirements() -> impl Strategy<Value = Vec<SkillRequirement>> {
    prop::collection::vec((select(SKILL_POOL.to_vec()), level()), 1..6).prop_map(|rows| {
        rows.into_iter()
            .map(|(name, level)| SkillRequirement::new(name, level).unwrap())
            .collect()
    })
}

fn skill_map(pool: &'static [&'static str]) -> impl Strategy<Value = BTreeMap<&'static str, SkillLevel>> {
    prop::collection::btree_map(select(pool.to_vec()), level(), 0..pool.len())
}

fn build_worker(
    id: String,
    availability: Availability,
    workload: i32,
    utilization: i32,
    skills: &BTreeMap<&'static str, SkillLevel>,
) -> Worker {
    skills.iter().fold(
        Worker::new(id, availability, workload, utilization).unwrap(),
        |worker, (name, level)| worker.add_skill(*name, *level, 70, 2).unwrap(),
    )
}

fn worker(index: usize) -> impl Strategy<Value = Worker> {
    (availability(), -20..=130i32, 0..=100i32, skill_map(&SKILL_POOL)).prop_map(
        move |(availability, workload, utilization, skills)| {
            build_worker(format!("EMP{index:03}"), availability, workload, utilization, &skills)
        },
    )
}

fn roster() -> impl Strategy<Value = Vec<Worker>> {
    (0usize..12).prop_flat_map(|len| (0..len).map(worker).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn every_worker_is_ranked_within_bounds(reqs in requirements(), workers in roster()) {
        let results = score(&reqs, &workers).unwrap();

        prop_assert_eq!(results.len(), workers.len());
        for result in &results {
            prop_assert!(result.match_score <= 100);
            prop_assert!(result.skill_match_percent <= 100);
            prop_assert!(result.workload_percent <= 100);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }

        let mut ranked_ids: Vec<&str> = results.iter().map(|r| r.worker_id.as_str()).collect();
        let mut input_ids: Vec<&str> = workers.iter().map(|w| w.id()).collect();
        ranked_ids.sort_unstable();
        input_ids.sort_unstable();
        prop_assert_eq!(ranked_ids, input_ids);
    }

    #[test]
    fn raising_a_skill_level_never_lowers_the_score(
        reqs in requirements(),
        availability in availability(),
        workload in 0..=100i32,
        skills in skill_map(&SKILL_POOL),
        pick in any::<prop::sample::Index>(),
    ) {
        let before = build_worker("EMP001".into(), availability, workload, 50, &skills);

        let mut upgraded = skills.clone();
        if let Some(name) = skills.keys().nth(pick.index(skills.len().max(1))) {
            upgraded.insert(*name, SkillLevel::Expert);
        }
        let after = build_worker("EMP001".into(), availability, workload, 50, &upgraded);

        let before = score(&reqs, &[before]).unwrap();
        let after = score(&reqs, &[after]).unwrap();
        prop_assert!(after[0].skill_match_percent >= before[0].skill_match_percent);
        prop_assert!(after[0].match_score >= before[0].match_score);
    }

    #[test]
    fn one_tier_up_towards_the_requirement_raises_the_skill_match(
        reqs in requirements(),
        pick in any::<prop::sample::Index>(),
        below in 0usize..3,
        availability in availability(),
        workload in 0..=100i32,
        skills in skill_map(&SKILL_POOL),
    ) {
        let target = &reqs[pick.index(reqs.len())];
        let required_tier = SkillLevel::ALL
            .iter()
            .position(|level| *level == target.level())
            .unwrap();
        prop_assume!(required_tier > 0);

        let held_tier = below % required_tier;
        let name = SKILL_POOL
            .iter()
            .copied()
            .find(|name| *name == target.name())
            .unwrap();

        let mut held = skills.clone();
        held.insert(name, SkillLevel::ALL[held_tier]);
        let mut raised = skills;
        raised.insert(name, SkillLevel::ALL[held_tier + 1]);

        let before = build_worker("EMP001".into(), availability, workload, 50, &held);
        let after = build_worker("EMP001".into(), availability, workload, 50, &raised);

        let before = score(&reqs, &[before]).unwrap();
        let after = score(&reqs, &[after]).unwrap();
        prop_assert!(after[0].skill_match_percent > before[0].skill_match_percent);
        prop_assert!(after[0].match_score >= before[0].match_score);
    }

    #[test]
    fn workers_without_required_skills_score_on_availability_and_workload(
        reqs in requirements(),
        availability in availability(),
        workload in 0..=100i32,
        skills in skill_map(&OTHER_POOL),
    ) {
        let worker = build_worker("EMP002".into(), availability, workload, 60, &skills);
        let adjustment = adjust(&worker);
        let expected = (f64::from(availability_bonus(availability)) + adjustment.workload_term).round();

        let results = score(&reqs, &[worker]).unwrap();
        prop_assert_eq!(results[0].skill_match_percent, 0);
        prop_assert_eq!(f64::from(results[0].match_score), expected);
    }

    #[test]
    fn exceeding_the_required_tier_earns_nothing_extra(
        required in level(),
        availability in availability(),
        workload in 0..=100i32,
    ) {
        let reqs = vec![SkillRequirement::new("Kubernetes", required).unwrap()];
        let exact = Worker::new("EXACT", availability, workload, 50)
            .unwrap()
            .add_skill("Kubernetes", required, 70, 2)
            .unwrap();
        let expert = Worker::new("EXPERT", availability, workload, 50)
            .unwrap()
            .add_skill("kubernetes", SkillLevel::Expert, 99, 9)
            .unwrap();

        let results = score(&reqs, &[exact, expert]).unwrap();
        prop_assert_eq!(results[0].skill_match_percent, 100);
        prop_assert_eq!(results[0].match_score, results[1].match_score);
        prop_assert_eq!(results[0].worker_id.as_str(), "EXACT");
    }

    #[test]
    fn reversing_the_roster_keeps_every_score(reqs in requirements(), workers in roster()) {
        let engine = MatchingEngine::default();
        let forward = engine.rank_workers(&reqs, &workers).unwrap();

        let reversed: Vec<Worker> = workers.iter().rev().cloned().collect();
        let backward = engine.rank_workers(&reqs, &reversed).unwrap();

        let by_id = |results: &[wm_common::MatchResult]| {
            results
                .iter()
                .map(|r| (r.worker_id.clone(), r.match_score))
                .collect::<BTreeMap<_, _>>()
        };
        prop_assert_eq!(by_id(&forward), by_id(&backward));
    }
}
