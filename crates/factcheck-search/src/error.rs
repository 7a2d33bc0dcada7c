//! Error types for web search

use factcheck_domain::SearchFailure;
use thiserror::Error;

/// Errors that can occur during a web search
#[derive(Error, Debug)]
pub enum SearchError {
    /// No API key configured
    #[error("TAVILY_API_KEY not configured")]
    MissingCredentials,

    /// The provider rejected the API key
    #[error("search API credentials rejected: {0}")]
    InvalidCredentials(String),

    /// Network failure or timeout
    #[error("Search request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("Search API error {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

impl SearchFailure for SearchError {
    fn is_configuration(&self) -> bool {
        matches!(
            self,
            SearchError::MissingCredentials | SearchError::InvalidCredentials(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(SearchError::MissingCredentials.is_configuration());
        assert!(SearchError::InvalidCredentials("401".to_string()).is_configuration());
        assert!(!SearchError::Transport("timeout".to_string()).is_configuration());
        assert!(!SearchError::Api { status: 500, body: String::new() }.is_configuration());
        assert!(!SearchError::InvalidResponse("eof".to_string()).is_configuration());
    }
}
