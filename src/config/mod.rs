//! Configuration module for pagestat
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section and key may be omitted; missing values
//! fall back to the defaults on each type.
//!
//! # Example
//!
//! ```no_run
//! use pagestat::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagestat.toml")).unwrap();
//! println!("Reporting the top {} words", config.report.top_n);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, PromptConfig, ReportConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
