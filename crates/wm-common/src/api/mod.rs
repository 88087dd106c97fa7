//! Serializable request/response shapes exchanged with a presentation layer.

pub mod match_request;
pub mod match_response;

pub use match_request::{MatchRequest, RequiredSkillInput, ValidatedRequest, WorkerInput, WorkerSkillInput};
pub use match_response::{MatchResponse, RankedCandidate, ScoreBreakdown};
