//! Error types for the Enigma engine.

use thiserror::Error;

/// Errors produced by the Enigma engine.
///
/// Both variants are deterministic validation failures raised to the
/// immediate caller; nothing in the engine retries them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A component or machine was assembled from invalid parts: wiring of
    /// the wrong length or shape, a rotor count other than 3, a position
    /// count other than 3.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A call received a character outside the A-Z alphabet where a letter
    /// is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EnigmaError {
    pub(crate) fn config(detail: impl Into<String>) -> Self {
        EnigmaError::InvalidConfiguration(detail.into())
    }

    pub(crate) fn input(detail: impl Into<String>) -> Self {
        EnigmaError::InvalidInput(detail.into())
    }
}
