//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and the services
//! it calls. Implementations live in other crates.

use crate::evidence::SearchEvidence;
use async_trait::async_trait;

/// Trait for LLM completion providers
///
/// Implemented by the infrastructure layer (factcheck-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for LLM operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a prompt, return the completion text
    async fn complete(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model answering prompts (for logs)
    fn model_name(&self) -> &str;
}

/// Classification every search error must provide.
///
/// Configuration failures (missing or rejected credentials) must not be
/// mistaken for a temporarily unavailable search service.
pub trait SearchFailure: std::error::Error {
    /// True when the failure stems from service configuration
    fn is_configuration(&self) -> bool;
}

/// Trait for web search providers
///
/// Implemented by the infrastructure layer (factcheck-search)
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Error type for search operations
    type Error: SearchFailure + Send + Sync + 'static;

    /// Search the web for evidence about `query`
    async fn search(&self, query: &str) -> Result<SearchEvidence, Self::Error>;
}
