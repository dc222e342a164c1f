//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (e.g., `ConfigError`) are defined in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A name is not part of a closed vocabulary.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVocabulary { kind: &'static str, value: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
