/// Validation failures raised before any worker is scored.
///
/// A matching call either scores every worker or returns one of these;
/// there are no partial results.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("at least one required skill must be specified")]
    EmptyRequirements,

    #[error("required skill name must not be blank")]
    BlankSkillName,

    #[error("unknown skill level: {0:?} (expected Beginner, Intermediate, Advanced or Expert)")]
    UnknownSkillLevel(String),

    #[error("unknown availability: {0:?} (expected Available, Busy or On Leave)")]
    UnknownAvailability(String),

    #[error("worker id must not be blank")]
    BlankWorkerId,

    #[error("worker {worker_id} has a skill with a blank name")]
    BlankWorkerSkillName { worker_id: String },

    #[error("worker {worker_id} declares skill {skill:?} more than once")]
    DuplicateWorkerSkill { worker_id: String, skill: String },

    #[error("required skill #{index}: {source}")]
    InvalidRequirement {
        index: usize,
        #[source]
        source: Box<MatchError>,
    },

    #[error("worker #{index}: {source}")]
    InvalidWorker {
        index: usize,
        #[source]
        source: Box<MatchError>,
    },
}

impl MatchError {
    pub(crate) fn in_requirement(self, index: usize) -> Self {
        MatchError::InvalidRequirement {
            index,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_worker(self, index: usize) -> Self {
        MatchError::InvalidWorker {
            index,
            source: Box::new(self),
        }
    }
}
