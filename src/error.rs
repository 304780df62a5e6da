//! Per-job error type

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Why a single truncation job failed.
///
/// Every variant counts as the same kind of failure in a report; the variants
/// only differ in which step broke and what the underlying error says.
#[derive(Error, Debug)]
pub enum TruncateError {
    #[error("{0}")]
    Read(#[source] io::Error),

    #[error("invalid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error("{0}")]
    Write(#[source] io::Error),
}

impl TruncateError {
    /// Short name of the step that failed, used in JSON reports
    pub fn stage(&self) -> &'static str {
        match self {
            TruncateError::Read(_) => "read",
            TruncateError::Decode(_) => "decode",
            TruncateError::Write(_) => "write",
        }
    }
}

pub type Result<T> = std::result::Result<T, TruncateError>;
