//! Statistics tracking for truncation runs

use std::time::Duration;

use crate::core::config::{
    ERROR_MESSAGE_MAX_LENGTH, ERROR_MESSAGE_TRUNCATE_LENGTH, PATH_DISPLAY_WIDTH,
};
use crate::truncate::{JobOutcome, Status, TruncationReport};

/// Counters accumulated over a run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub truncated_files: u64,
    pub unchanged_files: u64,
    pub error_files: u64,
    pub lines_removed: u64,
    pub bytes_removed: u64,
    pub failed_files: Vec<(String, String)>, // (file_path, error_message)
}

impl RunStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_report(report: &TruncationReport) -> Self {
        let mut stats = Self::new();
        for outcome in &report.outcomes {
            stats.update(outcome);
        }
        stats
    }

    /// Updates statistics based on one job outcome
    pub fn update(&mut self, outcome: &JobOutcome) {
        match outcome.status() {
            Status::Truncated => self.truncated_files += 1,
            Status::Unchanged => self.unchanged_files += 1,
            Status::Error => self.error_files += 1,
        }

        if let Some(stats) = outcome.stats() {
            self.lines_removed += stats.removed_lines() as u64;
            self.bytes_removed += (stats.original_bytes - stats.kept_bytes) as u64;
        }

        if let Some(err) = outcome.error() {
            self.failed_files.push((
                outcome.job.path.display().to_string(),
                clean_error_message(&err.to_string()),
            ));
        }
    }

    pub fn total(&self) -> u64 {
        self.truncated_files + self.unchanged_files + self.error_files
    }

    /// Generates the one-line summary of a run
    pub fn generate_summary(&self, duration: Duration, dry_run: bool) -> String {
        let duration_secs = duration.as_secs_f64();
        let verb = if dry_run { "would truncate" } else { "truncated" };

        let mut summary = format!(
            "✅ Completed in {:.1}s • {} {} • {} unchanged • {} lines removed",
            duration_secs, self.truncated_files, verb, self.unchanged_files, self.lines_removed
        );
        if self.error_files > 0 {
            summary.push_str(&format!(" • {} failed", self.error_files));
        }

        summary
    }

    /// Lists failed files as a tree, empty when nothing failed
    pub fn generate_detailed_summary(&self) -> String {
        let mut lines = Vec::new();

        if !self.failed_files.is_empty() {
            lines.push(format!(
                "{} FAILED FILES ({})",
                Status::Error.symbol(),
                self.failed_files.len()
            ));
            for (i, (file_path, error)) in self.failed_files.iter().enumerate() {
                let tree_char = if i == self.failed_files.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                let short_path = crate::utils::shorten_path(file_path, PATH_DISPLAY_WIDTH);
                lines.push(format!("   {} {:30} # {}", tree_char, short_path, error));
            }
        }

        lines.join("\n")
    }
}

/// Cleans and formats error messages for display
pub(crate) fn clean_error_message(error: &str) -> String {
    // Replace newlines/tabs with spaces and collapse whitespace
    let cleaned = error.replace(['\n', '\r', '\t'], " ");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.contains("No such file") || cleaned.contains("cannot find") {
        "file not found".to_string()
    } else if cleaned.contains("Permission denied") || cleaned.contains("Access is denied") {
        "permission denied".to_string()
    } else if cleaned.contains("Is a directory") {
        "is a directory".to_string()
    } else if cleaned.contains("invalid UTF-8") {
        "not valid UTF-8".to_string()
    } else if cleaned.chars().count() > ERROR_MESSAGE_MAX_LENGTH {
        let head: String = cleaned.chars().take(ERROR_MESSAGE_TRUNCATE_LENGTH).collect();
        format!("{head}...")
    } else {
        cleaned
    }
}
