//! urlive - check that URLs found in files are alive
//!
//! Extracts URLs from text files, deduplicates them, optionally filters
//! them against an ignore list, then probes each remaining URL
//! concurrently with a short HEAD request and classifies the result.
//! A run exits `0` when every URL answered 200, and `3` when anything
//! was broken, suspicious, or unreachable.

pub mod config;
pub mod core;
pub mod discovery;
pub mod logging;
pub mod probe;
pub mod ui;

// Re-export the crate's main entry points
pub use crate::core::error::{Result, UrliveError};
pub use crate::core::types::{ProbeOutcome, UrlStatus};
pub use crate::probe::{ProbeOptions, ProbeUrls, Prober, RunReport, Severity};
