//! Error types for option resolution.
//!
//! Responsibilities:
//! - Define error variants for every failure of the resolution pipeline.
//! - Expose the offending parameter names for structured reporting.
//!
//! Does NOT handle:
//! - Exit codes or user-facing formatting (see the CLI crate).
//!
//! Invariants:
//! - All variants are fatal configuration problems; none are retryable.
//! - File errors carry the path; option errors carry the parameter name(s).
//! - No variant includes the value of a secret option.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file \"{}\" does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to read configuration file \"{}\"", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file \"{}\" has an unexpected format", path.display())]
    MalformedFile { path: PathBuf },

    #[error("Configuration file \"{}\" is missing field: \"touca\"", path.display())]
    MissingSection { path: PathBuf },

    #[error("Configuration option \"{param}\" has unexpected type")]
    InvalidType { param: String },

    #[error("Configuration option \"{param}\" is in conflict with the provided API URL")]
    ConflictingOption { param: String },

    #[error("Missing value for configuration option(s) {}", params.join(","))]
    MissingOptions { params: Vec<String> },

    #[error("API URL \"{url}\" is not a valid URL")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ConfigError {
    /// Names of the options this error refers to, if any.
    pub fn params(&self) -> Vec<&str> {
        match self {
            ConfigError::InvalidType { param } | ConfigError::ConflictingOption { param } => {
                vec![param.as_str()]
            }
            ConfigError::MissingOptions { params } => params.iter().map(String::as_str).collect(),
            ConfigError::MalformedUrl { .. } => vec!["api_url"],
            ConfigError::MissingFile { .. }
            | ConfigError::FileRead { .. }
            | ConfigError::MalformedFile { .. }
            | ConfigError::MissingSection { .. } => Vec::new(),
        }
    }
}
