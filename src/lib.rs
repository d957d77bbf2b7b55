//! pagestat: word, tag, link and image statistics for a single web page
//!
//! This crate fetches one HTML page, extracts its words, element names,
//! hyperlink targets and image sources, computes frequency statistics over
//! words and tags, persists everything into a small SQLite schema and reports
//! the most used words and tags together with link and image counts.

pub mod aggregate;
pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod storage;

use thiserror::Error;

/// Error returned by a full pipeline run
///
/// Configuration, prompt and output failures have their own error types and
/// are reported by the binary.
#[derive(Debug, Error)]
pub enum PagestatError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] pipeline::FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for pipeline runs
pub type Result<T> = std::result::Result<T, PagestatError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use aggregate::{aggregate, TokenStat};
pub use config::Config;
pub use extract::{extract_images, extract_links, extract_tag_names, tokenize, DocumentNode};
pub use pipeline::{process_url, run_pipeline, Report};
pub use storage::{RecordStore, SqliteStore};
