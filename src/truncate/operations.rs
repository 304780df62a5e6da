//! The truncate operation itself

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

use super::lines::FileContent;
use crate::error::{Result, TruncateError};

/// Line and byte counts before and after a truncation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TruncateStats {
    pub original_lines: usize,
    pub kept_lines: usize,
    pub original_bytes: usize,
    pub kept_bytes: usize,
}

impl TruncateStats {
    fn compute(content: &FileContent, keep_lines: usize) -> Self {
        Self {
            original_lines: content.line_count(),
            kept_lines: keep_lines.min(content.line_count()),
            original_bytes: content.byte_len(),
            kept_bytes: content.prefix(keep_lines).len(),
        }
    }

    /// True when nothing was (or would be) removed
    pub fn unchanged(&self) -> bool {
        self.kept_lines == self.original_lines
    }

    pub fn removed_lines(&self) -> usize {
        self.original_lines - self.kept_lines
    }
}

/// Rewrites `path` in place so it holds only its first `keep_lines` lines.
///
/// The file is always rewritten, even when it is already short enough. There
/// is no backup and no atomic replace: a failed write can leave the file
/// partially written or empty.
pub fn truncate_file(path: &Path, keep_lines: usize) -> Result<TruncateStats> {
    let content = FileContent::read(path)?;
    let stats = TruncateStats::compute(&content, keep_lines);
    trace!(
        path = %path.display(),
        lines = stats.original_lines,
        bytes = stats.original_bytes,
        "read file"
    );

    write_prefix(path, content.prefix(keep_lines))?;
    debug!(
        path = %path.display(),
        kept = stats.kept_lines,
        removed = stats.removed_lines(),
        "truncated file"
    );

    Ok(stats)
}

/// Computes what `truncate_file` would do without writing anything
pub fn preview_truncate(path: &Path, keep_lines: usize) -> Result<TruncateStats> {
    let content = FileContent::read(path)?;
    Ok(TruncateStats::compute(&content, keep_lines))
}

fn write_prefix(path: &Path, prefix: &str) -> Result<()> {
    let file = File::create(path).map_err(TruncateError::Write)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(prefix.as_bytes())
        .map_err(TruncateError::Write)?;
    // into_inner flushes and surfaces the flush error instead of losing it in Drop
    let file = writer
        .into_inner()
        .map_err(|e| TruncateError::Write(e.into_error()))?;
    file.sync_all().map_err(TruncateError::Write)?;
    Ok(())
}
