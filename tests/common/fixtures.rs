//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory with automatic cleanup
pub struct TestDir {
    pub temp_dir: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a new file in the directory
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        self.create_bytes(name, content.as_bytes())
    }

    pub fn create_bytes(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create a job file listing `(path, keep_lines)` entries
    pub fn create_job_file(&self, name: &str, jobs: &[(&Path, usize)]) -> Result<PathBuf> {
        let mut content = String::new();
        for (path, keep_lines) in jobs {
            content.push_str(&format!(
                "[[job]]\npath = '{}'\nkeep_lines = {}\n\n",
                path.display(),
                keep_lines
            ));
        }
        self.create_file(name, &content)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path().join(name))?)
    }
}

/// `L1\n` .. `L<count>\n`
pub fn numbered_lines(count: usize) -> String {
    (1..=count).map(|i| format!("L{i}\n")).collect()
}
