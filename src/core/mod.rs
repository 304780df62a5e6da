// Internal modules - not part of public API
pub(crate) mod config;
pub(crate) mod report;
pub(crate) mod stats;


// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
