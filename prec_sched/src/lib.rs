use thiserror::Error;

pub mod graph;
pub mod schedulers;
pub mod tabu_list;

/// Errors surfaced by graph construction and the two schedulers.
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// Malformed graph construction input.
    #[error("invalid problem configuration: {0}")]
    Configuration(String),
    /// The backward construction starved before scheduling every job.
    #[error("inconsistent precedence graph: {0}")]
    GraphInconsistency(String),
    /// A caller-supplied initial schedule is not a feasible permutation.
    #[error("invalid initial schedule: {0}")]
    InvalidSchedule(String),
}
