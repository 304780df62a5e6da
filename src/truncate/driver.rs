//! Sequential job runner

use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::job::TruncationJob;
use super::operations::{preview_truncate, truncate_file};
use super::status::{JobOutcome, Outcome};

/// Options controlling a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Read and measure only; never write
    pub dry_run: bool,
}

/// Everything a run produced, in job order
#[derive(Debug)]
pub struct TruncationReport {
    pub outcomes: Vec<JobOutcome>,
    pub dry_run: bool,
    pub duration: Duration,
}

impl TruncationReport {
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs every job once, in order, and collects the outcomes.
///
/// A failing job is recorded and the loop moves on; this never returns early.
pub fn run_jobs(jobs: &[TruncationJob], options: RunOptions) -> TruncationReport {
    let start_time = Instant::now();
    let mut outcomes = Vec::with_capacity(jobs.len());

    info!(jobs = jobs.len(), dry_run = options.dry_run, "starting run");

    for job in jobs {
        let result = if options.dry_run {
            preview_truncate(job.path(), job.keep_lines)
        } else {
            truncate_file(job.path(), job.keep_lines)
        };

        let outcome = match result {
            Ok(stats) => Outcome::Success(stats),
            Err(e) => {
                debug!(job = %job, error = %e, "job failed");
                Outcome::Failure(e)
            }
        };

        outcomes.push(JobOutcome {
            job: job.clone(),
            outcome,
        });
    }

    TruncationReport {
        outcomes,
        dry_run: options.dry_run,
        duration: start_time.elapsed(),
    }
}
