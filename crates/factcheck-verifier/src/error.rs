//! Verifier error types

use thiserror::Error;

/// Errors that can occur during verification
#[derive(Error, Debug)]
pub enum VerifierError {
    /// The search provider is not usable as configured; the message is the
    /// provider's own description
    #[error("{0}")]
    SearchConfiguration(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Verdict JSON missing or malformed
    #[error("Invalid verdict: {0}")]
    InvalidVerdict(String),
}

impl From<serde_json::Error> for VerifierError {
    fn from(e: serde_json::Error) -> Self {
        VerifierError::InvalidVerdict(e.to_string())
    }
}
