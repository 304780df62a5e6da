//! Configuration constants and job file loading

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::truncate::TruncationJob;

// Job file discovery
pub const CONFIG_ENV_VAR: &str = "TRUNCATE_LINES_CONFIG";
pub const LOCAL_CONFIG_FILE: &str = "truncate-lines.toml";
pub const USER_CONFIG_DIR: &str = "truncate-lines";
pub const USER_CONFIG_FILE: &str = "jobs.toml";

// UI Constants
pub const NO_JOBS_MESSAGE: &str =
    "No jobs given. Pass PATH:N arguments or a job file with --config.";
pub const SUCCESS_PREFIX: &str = "Successfully truncated";
pub const ERROR_PREFIX: &str = "Error truncating";
pub const DRY_RUN_PREFIX: &str = "Would truncate";

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 30;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 60;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 57;

/// On-disk job file layout
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    #[serde(default, rename = "job")]
    pub jobs: Vec<TruncationJob>,
}

impl JobFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read job file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid job file {}", path.display()))
    }
}

/// Where a job file path came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line
    Flag(PathBuf),
    /// Named by the environment variable
    Env(PathBuf),
    /// Found by searching the default locations
    Discovered(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Env(p) | ConfigSource::Discovered(p) => p,
        }
    }

    /// Explicitly named files must exist; discovered ones are only used if they do
    pub fn is_explicit(&self) -> bool {
        !matches!(self, ConfigSource::Discovered(_))
    }
}

/// Determines which job file to use
///
/// Priority order:
/// 1. --config FILE flag
/// 2. TRUNCATE_LINES_CONFIG env var
/// 3. ./truncate-lines.toml
/// 4. <user config dir>/truncate-lines/jobs.toml
pub fn resolve_config_source(flag: Option<PathBuf>) -> Option<ConfigSource> {
    if let Some(path) = flag {
        return Some(ConfigSource::Flag(path));
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(ConfigSource::Env(PathBuf::from(path)));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(ConfigSource::Discovered(local));
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
        .map(ConfigSource::Discovered)
}

/// Builds the final job list: job file entries first, then command-line jobs.
///
/// A discovered job file is skipped when command-line jobs were given.
pub fn collect_jobs(
    source: Option<ConfigSource>,
    cli_jobs: Vec<TruncationJob>,
) -> Result<Vec<TruncationJob>> {
    let mut jobs = Vec::new();

    match source {
        Some(source) if source.is_explicit() || cli_jobs.is_empty() => {
            debug!(path = %source.path().display(), "loading job file");
            jobs.extend(JobFile::load(source.path())?.jobs);
        }
        Some(source) => {
            debug!(path = %source.path().display(), "ignoring discovered job file");
        }
        None => {}
    }

    jobs.extend(cli_jobs);

    if jobs.is_empty() {
        bail!(NO_JOBS_MESSAGE);
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_job_file() {
        let file = JobFile::parse(
            r#"
[[job]]
path = "a.txt"
keep_lines = 2

[[job]]
path = 'c:\project\screen.dart'
keep_lines = 1064
"#,
        )
        .unwrap();

        assert_eq!(
            file.jobs,
            vec![
                TruncationJob::new("a.txt", 2),
                TruncationJob::new(r"c:\project\screen.dart", 1064),
            ]
        );
    }

    #[test]
    fn test_parse_empty_job_file() {
        assert!(JobFile::parse("").unwrap().jobs.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!(JobFile::parse("[[job]]\npath = \"a\"\nkeep_lines = -1\n").is_err());
        assert!(JobFile::parse("[[job]]\npath = \"a\"\n").is_err());
        assert!(JobFile::parse("[[job]]\npath = \"a\"\nkeep_lines = 1\nmode = \"x\"\n").is_err());
        assert!(JobFile::parse("jobs = 3\n").is_err());
    }

    #[test]
    fn test_flag_takes_priority() {
        let source = resolve_config_source(Some(PathBuf::from("x.toml")));
        assert_eq!(source, Some(ConfigSource::Flag(PathBuf::from("x.toml"))));
    }

    #[test]
    fn test_collect_orders_file_jobs_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.toml");
        fs::write(&path, "[[job]]\npath = \"from-file\"\nkeep_lines = 1\n").unwrap();

        let jobs = collect_jobs(
            Some(ConfigSource::Flag(path)),
            vec![TruncationJob::new("from-cli", 2)],
        )
        .unwrap();

        assert_eq!(
            jobs,
            vec![
                TruncationJob::new("from-file", 1),
                TruncationJob::new("from-cli", 2),
            ]
        );
    }

    #[test]
    fn test_discovered_file_yields_to_cli_jobs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.toml");
        fs::write(&path, "[[job]]\npath = \"from-file\"\nkeep_lines = 1\n").unwrap();

        let jobs = collect_jobs(
            Some(ConfigSource::Discovered(path)),
            vec![TruncationJob::new("from-cli", 2)],
        )
        .unwrap();

        assert_eq!(jobs, vec![TruncationJob::new("from-cli", 2)]);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = collect_jobs(
            Some(ConfigSource::Env(dir.path().join("nope.toml"))),
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_no_jobs_is_error() {
        let err = collect_jobs(None, Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), NO_JOBS_MESSAGE);
    }
}
