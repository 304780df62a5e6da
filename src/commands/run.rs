//! Truncation command implementation
//!
//! Resolves the job list, runs it in order and prints the per-job report.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::core::{collect_jobs, render_json, render_lines, resolve_config_source, RunStatistics};
use crate::truncate::{run_jobs, RunOptions, TruncationJob, TruncationReport};

/// Options for the truncation command, straight from the command line
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub jobs: Vec<TruncationJob>,
    pub dry_run: bool,
    pub json: bool,
    pub summary: bool,
}

/// Main handler for the truncation command.
///
/// Only set-up problems (job file, empty job list) are returned as errors.
/// Individual job failures end up in the returned report.
pub fn handle_run_command(args: RunArgs) -> Result<TruncationReport> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

/// Runs the command, writing the report to `out`
pub fn execute(args: RunArgs, out: &mut impl Write) -> Result<TruncationReport> {
    let source = resolve_config_source(args.config);
    let jobs = collect_jobs(source, args.jobs)?;

    let report = run_jobs(
        &jobs,
        RunOptions {
            dry_run: args.dry_run,
        },
    );

    let stats = RunStatistics::from_report(&report);
    info!(
        truncated = stats.truncated_files,
        unchanged = stats.unchanged_files,
        failed = stats.error_files,
        "run finished"
    );

    if args.json {
        writeln!(out, "{}", render_json(&report)?)?;
        return Ok(report);
    }

    for line in render_lines(&report) {
        writeln!(out, "{line}")?;
    }

    if args.summary {
        writeln!(out)?;
        writeln!(out, "{}", stats.generate_summary(report.duration, report.dry_run))?;
        let detail = stats.generate_detailed_summary();
        if !detail.is_empty() {
            writeln!(out)?;
            writeln!(out, "{detail}")?;
        }
    }

    Ok(report)
}
