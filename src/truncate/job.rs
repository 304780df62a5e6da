//! Truncation job definition and `PATH:N` parsing

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single instruction: keep the first `keep_lines` lines of `path`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TruncationJob {
    pub path: PathBuf,
    pub keep_lines: usize,
}

impl TruncationJob {
    pub fn new(path: impl Into<PathBuf>, keep_lines: usize) -> Self {
        Self {
            path: path.into(),
            keep_lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TruncationJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.keep_lines)
    }
}

/// Parses a `PATH:N` job argument.
///
/// Splits at the last `:` so drive-letter paths like `c:\notes.txt:10` work.
pub fn parse_job_arg(input: &str) -> Result<TruncationJob, String> {
    let (path, count) = input
        .rsplit_once(':')
        .ok_or_else(|| format!("expected PATH:N, got '{input}'"))?;

    if path.is_empty() {
        return Err(format!("missing path in '{input}'"));
    }

    let keep_lines: usize = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid line count: {count}"))?;

    Ok(TruncationJob::new(path, keep_lines))
}
