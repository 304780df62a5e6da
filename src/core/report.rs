//! Rendering a finished run as text lines or JSON

use anyhow::Result;
use serde_json::{json, Value};

use super::config::{DRY_RUN_PREFIX, ERROR_PREFIX, SUCCESS_PREFIX};
use super::stats::RunStatistics;
use crate::truncate::{JobOutcome, Outcome, TruncationReport};

/// The stdout line for one job
pub fn format_outcome_line(outcome: &JobOutcome, dry_run: bool) -> String {
    let path = outcome.job.path.display();
    match &outcome.outcome {
        Outcome::Success(stats) if dry_run => format!(
            "{DRY_RUN_PREFIX} {path} ({} -> {} lines)",
            stats.original_lines, stats.kept_lines
        ),
        Outcome::Success(_) => format!("{SUCCESS_PREFIX} {path}"),
        Outcome::Failure(err) => format!("{ERROR_PREFIX} {path}: {err}"),
    }
}

/// One line per job, in job order
pub fn render_lines(report: &TruncationReport) -> Vec<String> {
    report
        .outcomes
        .iter()
        .map(|outcome| format_outcome_line(outcome, report.dry_run))
        .collect()
}

fn outcome_json(outcome: &JobOutcome) -> Value {
    let mut entry = json!({
        "path": outcome.job.path.display().to_string(),
        "keep_lines": outcome.job.keep_lines,
        "status": outcome.status().text(),
    });

    match &outcome.outcome {
        Outcome::Success(stats) => {
            entry["original_lines"] = json!(stats.original_lines);
            entry["kept_lines"] = json!(stats.kept_lines);
            entry["original_bytes"] = json!(stats.original_bytes);
            entry["kept_bytes"] = json!(stats.kept_bytes);
        }
        Outcome::Failure(err) => {
            entry["stage"] = json!(err.stage());
            entry["error"] = json!(err.to_string());
        }
    }

    entry
}

pub fn report_json(report: &TruncationReport) -> Value {
    let stats = RunStatistics::from_report(report);
    json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "dry_run": report.dry_run,
        "duration_ms": report.duration.as_millis() as u64,
        "summary": {
            "total": stats.total(),
            "truncated": stats.truncated_files,
            "unchanged": stats.unchanged_files,
            "failed": stats.error_files,
            "lines_removed": stats.lines_removed,
            "bytes_removed": stats.bytes_removed,
        },
        "jobs": report.outcomes.iter().map(outcome_json).collect::<Vec<_>>(),
    })
}

pub fn render_json(report: &TruncationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report_json(report))?)
}
