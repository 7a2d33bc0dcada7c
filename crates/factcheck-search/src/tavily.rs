//! Tavily search client
//!
//! Each claim becomes one query against `POST /search` asking for a
//! synthesized answer alongside the ranked results.

use crate::error::SearchError;
use async_trait::async_trait;
use factcheck_domain::{SearchEvidence, SearchHit, SearchProvider};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Tavily API root
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Default number of results requested per query
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default request timeout (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Tavily API client for web search
pub struct TavilyClient {
    api_key: String,
    base_url: String,
    max_results: usize,
    include_answer: bool,
    client: reqwest::Client,
}

/// Tavily API request
#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    include_answer: bool,
    max_results: usize,
}

/// Tavily API response
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    results: Vec<TavilyResult>,
}

/// Individual search result from Tavily.
///
/// Tavily names the excerpt `content`; `snippet` is accepted as well.
#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl From<TavilyResult> for SearchHit {
    fn from(r: TavilyResult) -> Self {
        SearchHit {
            title: r.title,
            snippet: r.snippet.or(r.content).unwrap_or_default(),
            url: r.url,
        }
    }
}

impl TavilyClient {
    /// Create a new Tavily client with the default 10 second timeout
    ///
    /// # Errors
    ///
    /// Returns `SearchError::MissingCredentials` if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Tavily client with a custom request timeout
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, SearchError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::MissingCredentials);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            include_answer: true,
            client,
        })
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the number of results requested per query
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Results requested per query
    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    type Error = SearchError;

    async fn search(&self, query: &str) -> Result<SearchEvidence, Self::Error> {
        let request = TavilyRequest {
            api_key: &self.api_key,
            query,
            include_answer: self.include_answer,
            max_results: self.max_results,
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::InvalidCredentials(format!("HTTP {}: {}", status, body)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let tavily_response: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        let hits: Vec<SearchHit> = tavily_response
            .results
            .into_iter()
            .take(self.max_results)
            .map(SearchHit::from)
            .collect();

        debug!(
            hits = hits.len(),
            has_answer = tavily_response.answer.is_some(),
            "Tavily search complete"
        );

        Ok(SearchEvidence::new(hits, tavily_response.answer))
    }
}
