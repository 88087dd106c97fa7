use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use super::{
    round_half_up,
    weights::{
        AVAILABLE_BONUS, BUSY_BONUS, ON_LEAVE_BONUS, OVERLOAD_THRESHOLD, WORKLOAD_PENALTY_RATE,
        WORKLOAD_TERM_RATE,
    },
};
use crate::{Worker, error::MatchError};

/// Whether a worker can start on new work right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display)]
pub enum Availability {
    Available,
    Busy,
    #[serde(rename = "On Leave", alias = "OnLeave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
}

impl FromStr for Availability {
    type Err = MatchError;

    /// Accepts "Available", "Busy", "On Leave" / "OnLeave" / "on_leave", ignoring case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let folded: String = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match folded.as_str() {
            "available" => Ok(Availability::Available),
            "busy" => Ok(Availability::Busy),
            "onleave" => Ok(Availability::OnLeave),
            _ => Err(MatchError::UnknownAvailability(input.to_string())),
        }
    }
}

/// Additive terms derived from availability and workload, independent of skills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub availability_bonus: u32,
    pub workload_penalty: u32,
    pub workload_term: f64,
}

pub fn availability_bonus(availability: Availability) -> u32 {
    match availability {
        Availability::Available => AVAILABLE_BONUS,
        Availability::Busy => BUSY_BONUS,
        Availability::OnLeave => ON_LEAVE_BONUS,
    }
}

/// `round(workload * 0.3)`, with workload capped at 100.
pub fn workload_penalty(workload_percent: u8) -> u32 {
    let workload = f64::from(workload_percent.min(100));
    // workload ∈ [0, 100] so the penalty is in [0, 30]
    round_half_up(workload * WORKLOAD_PENALTY_RATE) as u32
}

/// `(100 - penalty) * 0.2`, always within [14, 20].
pub fn workload_term(workload_percent: u8) -> f64 {
    f64::from(100 - workload_penalty(workload_percent)) * WORKLOAD_TERM_RATE
}

pub fn is_overloaded(workload_percent: u8) -> bool {
    workload_percent > OVERLOAD_THRESHOLD
}

pub fn adjust(worker: &Worker) -> Adjustment {
    let workload = worker.workload_percent();

    Adjustment {
        availability_bonus: availability_bonus(worker.availability()),
        workload_penalty: workload_penalty(workload),
        workload_term: workload_term(workload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_table_is_fixed() {
        assert_eq!(availability_bonus(Availability::Available), 20);
        assert_eq!(availability_bonus(Availability::Busy), 5);
        assert_eq!(availability_bonus(Availability::OnLeave), 0);
    }

    #[test]
    fn penalty_rounds_half_up() {
        assert_eq!(workload_penalty(0), 0);
        assert_eq!(workload_penalty(30), 9);
        // 45 * 0.3 = 13.5
        assert_eq!(workload_penalty(45), 14);
        // 5 * 0.3 = 1.5
        assert_eq!(workload_penalty(5), 2);
        assert_eq!(workload_penalty(100), 30);
    }

    #[test]
    fn workload_term_is_bounded() {
        for workload in 0..=100u8 {
            let term = workload_term(workload);
            assert!((14.0..=20.0).contains(&term), "workload {workload} → {term}");
        }
        assert!((workload_term(30) - 18.2).abs() < 1e-9);
        assert!((workload_term(0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn higher_workload_never_raises_the_term() {
        let terms: Vec<f64> = (0..=100u8).map(workload_term).collect();
        assert!(terms.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn overload_is_strictly_above_seventy() {
        assert!(!is_overloaded(70));
        assert!(is_overloaded(71));
    }

    #[test]
    fn adjusts_from_worker_snapshot() {
        let worker = Worker::new("EMP003", Availability::Busy, 80, 75).unwrap();
        let adj = adjust(&worker);

        assert_eq!(adj.availability_bonus, 5);
        assert_eq!(adj.workload_penalty, 24);
        assert!((adj.workload_term - 15.2).abs() < 1e-9);
    }

    #[test]
    fn parses_availability_tags() {
        assert_eq!("Available".parse(), Ok(Availability::Available));
        assert_eq!("busy".parse(), Ok(Availability::Busy));
        assert_eq!("On Leave".parse(), Ok(Availability::OnLeave));
        assert_eq!("OnLeave".parse(), Ok(Availability::OnLeave));
        assert_eq!("on_leave".parse(), Ok(Availability::OnLeave));
        assert_eq!(
            "Vacation".parse::<Availability>(),
            Err(MatchError::UnknownAvailability("Vacation".into()))
        );
    }

    #[test]
    fn serializes_display_form() {
        assert_eq!(Availability::OnLeave.to_string(), "On Leave");
        assert_eq!(
            serde_json::to_string(&Availability::OnLeave).unwrap(),
            "\"On Leave\""
        );
        let parsed: Availability = serde_json::from_str("\"OnLeave\"").unwrap();
        assert_eq!(parsed, Availability::OnLeave);
    }
}
