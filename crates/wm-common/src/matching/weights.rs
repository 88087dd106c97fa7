/// Share of the raw score carried by the skill-match percentage.
pub const SKILL_WEIGHT: f64 = 0.6;

/// Availability bonuses, in raw score points.
pub const AVAILABLE_BONUS: u32 = 20;
pub const BUSY_BONUS: u32 = 5;
pub const ON_LEAVE_BONUS: u32 = 0;

/// Workload percent → penalty points (rounded), so penalty ∈ [0, 30].
pub const WORKLOAD_PENALTY_RATE: f64 = 0.3;

/// Scale applied to the remaining capacity (100 - penalty), so term ∈ [14, 20].
pub const WORKLOAD_TERM_RATE: f64 = 0.2;

/// Workloads strictly above this are flagged as overloaded.
pub const OVERLOAD_THRESHOLD: u8 = 70;

pub const MAX_SCORE: u8 = 100;
