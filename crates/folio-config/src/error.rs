//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::Violation;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Portfolio content loaded but failed validation.
    #[error("Portfolio content is invalid ({} violation(s)): {}", .violations.len(), summarize(.violations))]
    InvalidContent { violations: Vec<Violation> },

    /// Content file extension is neither `.toml` nor `.json`.
    #[error("Unsupported content format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
