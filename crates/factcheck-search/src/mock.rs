//! Deterministic search provider for tests

use crate::error::SearchError;
use async_trait::async_trait;
use factcheck_domain::{SearchEvidence, SearchProvider};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy)]
enum MockFailure {
    Unavailable,
    MissingCredentials,
}

#[derive(Debug, Default)]
struct MockState {
    evidence: Vec<(String, SearchEvidence)>,
    failures: Vec<(String, MockFailure)>,
    queries: Vec<String>,
}

/// Mock search provider
///
/// Returns canned evidence keyed by exact query, falling back to a default.
/// Failures take precedence over evidence for the same query.
///
/// # Examples
///
/// ```
/// use factcheck_search::MockSearch;
/// use factcheck_domain::{SearchEvidence, SearchProvider};
///
/// # tokio_test::block_on(async {
/// let search = MockSearch::new(SearchEvidence::default());
/// search.fail_unavailable("flaky claim");
///
/// assert!(search.search("flaky claim").await.is_err());
/// assert!(search.search("other claim").await.unwrap().is_empty());
/// assert_eq!(search.queries(), vec!["flaky claim", "other claim"]);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockSearch {
    default_evidence: SearchEvidence,
    state: Arc<Mutex<MockState>>,
}

impl MockSearch {
    /// Create a mock returning `evidence` for every query
    pub fn new(evidence: SearchEvidence) -> Self {
        Self {
            default_evidence: evidence,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Return `evidence` for `query`
    pub fn add_evidence(&self, query: impl Into<String>, evidence: SearchEvidence) {
        self.lock().evidence.push((query.into(), evidence));
    }

    /// Simulate a network failure for `query`
    pub fn fail_unavailable(&self, query: impl Into<String>) {
        self.lock().failures.push((query.into(), MockFailure::Unavailable));
    }

    /// Simulate missing credentials for `query`
    pub fn fail_missing_credentials(&self, query: impl Into<String>) {
        self.lock()
            .failures
            .push((query.into(), MockFailure::MissingCredentials));
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<String> {
        self.lock().queries.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockSearch {
    fn default() -> Self {
        Self::new(SearchEvidence::default())
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    type Error = SearchError;

    async fn search(&self, query: &str) -> Result<SearchEvidence, Self::Error> {
        let mut state = self.lock();
        state.queries.push(query.to_string());

        if let Some((_, failure)) = state.failures.iter().find(|(q, _)| q == query) {
            return Err(match failure {
                MockFailure::Unavailable => SearchError::Transport("simulated network error".to_string()),
                MockFailure::MissingCredentials => SearchError::MissingCredentials,
            });
        }

        Ok(state
            .evidence
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, evidence)| evidence.clone())
            .unwrap_or_else(|| self.default_evidence.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcheck_domain::{SearchFailure, SearchHit};

    #[tokio::test]
    async fn test_keyed_evidence() {
        let search = MockSearch::default();
        let evidence = SearchEvidence::new(vec![SearchHit::new("t", "s")], None);
        search.add_evidence("q1", evidence.clone());

        assert_eq!(search.search("q1").await.unwrap(), evidence);
        assert!(search.search("q2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_kinds() {
        let search = MockSearch::default();
        search.fail_unavailable("down");
        search.fail_missing_credentials("nokey");

        assert!(!search.search("down").await.unwrap_err().is_configuration());
        assert!(search.search("nokey").await.unwrap_err().is_configuration());
    }
}
