//! Per-job outcome and status enumeration

use super::job::TruncationJob;
use super::operations::TruncateStats;
use crate::error::TruncateError;

/// Result of running one job: success with its stats, or the failure reason
#[derive(Debug)]
pub enum Outcome {
    Success(TruncateStats),
    Failure(TruncateError),
}

/// A job paired with what happened when it ran
#[derive(Debug)]
pub struct JobOutcome {
    pub job: TruncationJob,
    pub outcome: Outcome,
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn stats(&self) -> Option<&TruncateStats> {
        match &self.outcome {
            Outcome::Success(stats) => Some(stats),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&TruncateError> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn status(&self) -> Status {
        match &self.outcome {
            Outcome::Success(stats) if stats.unchanged() => Status::Unchanged,
            Outcome::Success(_) => Status::Truncated,
            Outcome::Failure(_) => Status::Error,
        }
    }
}

/// Display classification of a job outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Lines were removed
    Truncated,
    /// File already had at most the requested number of lines
    Unchanged,
    /// Reading, decoding or writing failed
    Error,
}

impl Status {
    /// Returns the emoji symbol for this status
    pub fn symbol(&self) -> &str {
        match self {
            Status::Truncated => "🟢",
            Status::Unchanged => "🟠",
            Status::Error => "🔴",
        }
    }

    /// Returns the text representation of this status
    pub fn text(&self) -> &str {
        match self {
            Status::Truncated => "truncated",
            Status::Unchanged => "unchanged",
            Status::Error => "failed",
        }
    }
}
