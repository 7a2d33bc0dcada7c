//! Factcheck LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `factcheck-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI chat completions API
//!
//! # Examples
//!
//! ```
//! use factcheck_llm::MockProvider;
//! use factcheck_domain::LlmProvider;
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.complete("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use factcheck_domain::LlmProvider;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Provider is not usable as configured (e.g. missing API key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API key rejected by the provider
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

#[derive(Debug, Default)]
struct MockState {
    rules: Vec<(String, MockReply)>,
    prompts: Vec<String>,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// A rule matches when its pattern occurs anywhere in the prompt; rules are
/// tried in the order they were added and the default response is used when
/// none matches.
///
/// # Examples
///
/// ```
/// use factcheck_llm::MockProvider;
/// use factcheck_domain::LlmProvider;
///
/// # tokio_test::block_on(async {
/// let provider = MockProvider::new("Fixed response");
/// provider.add_response("Claim: A", "response A");
/// provider.add_error("Claim: B");
///
/// assert_eq!(provider.complete("...Claim: A...").await.unwrap(), "response A");
/// assert!(provider.complete("...Claim: B...").await.is_err());
/// assert_eq!(provider.complete("anything else").await.unwrap(), "Fixed response");
/// assert_eq!(provider.call_count(), 3);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Respond with `response` to prompts containing `pattern`
    pub fn add_response(&self, pattern: impl Into<String>, response: impl Into<String>) {
        self.lock()
            .rules
            .push((pattern.into(), MockReply::Text(response.into())));
    }

    /// Fail prompts containing `pattern`
    pub fn add_error(&self, pattern: impl Into<String>) {
        self.lock().rules.push((pattern.into(), MockReply::Error));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        self.lock().prompts.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        let mut state = self.lock();
        state.prompts.push(prompt.to_string());

        let reply = state
            .rules
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
