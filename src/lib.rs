//! # truncate-lines
//!
//! `truncate-lines` rewrites text files in place so each keeps only its first
//! N lines. It powers the `truncate-lines` CLI tool.
//!
//! ## Core Features
//!
//! - **Terminator-preserving**: `\n`, `\r\n` and lone `\r` line ends are kept byte-for-byte.
//! - **Job lists**: jobs come from `PATH:N` arguments or a TOML job file.
//! - **Per-job reports**: every job yields a success or failure outcome; one
//!   failing file never stops the rest.
//! - **Dry runs and JSON**: preview changes or emit a machine-readable report.
//!
//! ## Example
//!
//! ```rust,no_run
//! use truncate_lines::truncate::{run_jobs, RunOptions, TruncationJob};
//!
//! let jobs = vec![TruncationJob::new("a.txt", 2), TruncationJob::new("missing.txt", 5)];
//! let report = run_jobs(&jobs, RunOptions::default());
//! for outcome in &report.outcomes {
//!     println!("{}: {}", outcome.job.path.display(), outcome.status().text());
//! }
//! ```

pub mod commands;
pub mod core;
pub mod error;
pub mod truncate;
pub mod utils;
