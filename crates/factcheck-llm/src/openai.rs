//! OpenAI Provider Implementation
//!
//! Chat completions over the OpenAI REST API. One user message per prompt,
//! fixed temperature, no streaming and no retries: a failed call is reported
//! to the caller, which decides how to degrade.
//!
//! # Examples
//!
//! ```no_run
//! use factcheck_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-4o-mini").unwrap();
//! ```

use crate::LlmError;
use async_trait::async_trait;
use factcheck_domain::LlmProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// OpenAI chat completions provider
pub struct OpenAiProvider {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if the API key is empty.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Configuration("OPENAI_API_KEY not configured".to_string()));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
            client,
        })
    }

    /// Point the provider at a different API root (proxies, compatible servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Bound each completion call. Unbounded by default.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sampling temperature in use
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Send one completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be sent or times out
    /// - The API rejects the key, the model, or the request rate
    /// - The response carries no completion text
    async fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self.client.post(&url).bearer_auth(&self.api_key).json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    LlmError::Unauthorized(error_text)
                }
                reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(self.model.clone()),
                reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                _ => LlmError::Communication(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("No completion content".to_string()))?;

        debug!(model = %self.model, chars = content.len(), "Completion received");
        Ok(content)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        self.send(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_openai_provider_creation() {
        let provider = OpenAiProvider::new("sk-test", "gpt-4o-mini").unwrap();
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.model_name(), "gpt-4o-mini");
        assert_eq!(provider.temperature(), DEFAULT_TEMPERATURE);
        assert!(provider.timeout.is_none());
    }

    #[test]
    fn test_openai_provider_requires_key() {
        let result = OpenAiProvider::new("  ", "gpt-4o-mini");
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider = OpenAiProvider::new("sk-test", "m")
            .unwrap()
            .with_base_url("http://localhost:1234/v1/");
        assert_eq!(provider.base_url, "http://localhost:1234/v1");
    }

    #[tokio::test]
    async fn test_complete_sends_chat_request() {
        let seen: Arc<Mutex<Option<(HeaderMap, Value)>>> = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&seen);
        let router = Router::new().route(
            "/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let captured = Arc::clone(&captured);
                async move {
                    *captured.lock().unwrap() = Some((headers, body));
                    Json(json!({
                        "choices": [{"message": {"role": "assistant", "content": "{\"claims\": []}"}}]
                    }))
                }
            }),
        );
        let base_url = spawn_stub(router).await;

        let provider = OpenAiProvider::new("sk-test", "gpt-4o-mini")
            .unwrap()
            .with_base_url(base_url);
        let content = provider.complete("Extract claims").await.unwrap();
        assert_eq!(content, r#"{"claims": []}"#);

        let (headers, body) = seen.lock().unwrap().take().unwrap();
        assert_eq!(headers["authorization"], "Bearer sk-test");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Extract claims");
    }

    #[tokio::test]
    async fn test_unauthorized_is_reported() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "bad key") }),
        );
        let base_url = spawn_stub(router).await;

        let provider = OpenAiProvider::new("sk-wrong", "gpt-4o-mini")
            .unwrap()
            .with_base_url(base_url);
        let result = provider.complete("hi").await;
        assert!(matches!(result, Err(LlmError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid_response() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base_url = spawn_stub(router).await;

        let provider = OpenAiProvider::new("sk-test", "m").unwrap().with_base_url(base_url);
        let result = provider.complete("hi").await;
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_error() {
        // Nothing listens on port 9 locally
        let provider = OpenAiProvider::new("sk-test", "m")
            .unwrap()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Some(Duration::from_secs(2)));

        let result = provider.complete("test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
