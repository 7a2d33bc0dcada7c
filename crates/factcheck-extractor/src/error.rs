//! Extraction failures

use thiserror::Error;

/// Why a document produced no claims
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The completion call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Valid JSON, but not `{"claims": [...]}`
    #[error("Invalid claim format: {0}")]
    InvalidFormat(String),

    /// The response held no parseable JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
