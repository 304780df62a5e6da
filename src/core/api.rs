//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Job file loading and discovery
//! - Run statistics
//! - Report rendering
//!
//! Internal implementation details are not exposed through this API.

// Configuration
pub use super::config::{collect_jobs, resolve_config_source, ConfigSource, JobFile};
pub use super::config::{CONFIG_ENV_VAR, LOCAL_CONFIG_FILE, NO_JOBS_MESSAGE};

// Statistics
pub use super::stats::RunStatistics;

// Rendering
pub use super::report::{format_outcome_line, render_json, render_lines, report_json};
