//! Cross-cutting error types for Survey.
//!
//! Store-specific errors (`StoreError`) and configuration errors (`ConfigError`)
//! are defined in their respective crates. A unified error is deferred to
//! `survey-cli`, where everything converges into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Survey crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A status transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
