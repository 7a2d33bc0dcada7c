//! Per-claim evidence fetch and adjudication

use crate::config::VerifierConfig;
use crate::error::VerifierError;
use crate::parser::parse_verdict;
use crate::prompt::build_prompt;
use factcheck_domain::{
    Assessment, Claim, LlmProvider, SearchFailure, SearchProvider, UnverifiableReason,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Verifies claims against live web evidence
pub struct ClaimVerifier<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    llm_provider: Arc<L>,
    search_provider: Arc<S>,
    config: VerifierConfig,
}

impl<L, S> ClaimVerifier<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    /// Create a new verifier
    pub fn new(llm_provider: L, search_provider: S, config: VerifierConfig) -> Self {
        Self::with_shared(Arc::new(llm_provider), Arc::new(search_provider), config)
    }

    /// Create a verifier over providers shared with other components
    pub fn with_shared(llm_provider: Arc<L>, search_provider: Arc<S>, config: VerifierConfig) -> Self {
        Self {
            llm_provider,
            search_provider,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Assess a single claim.
    ///
    /// Returns `Err` only when the search provider reports a configuration
    /// failure. Search outages and unusable LLM answers become
    /// [`Assessment::Unverifiable`].
    pub async fn verify(&self, claim: &Claim) -> Result<Assessment, VerifierError> {
        let evidence = match self.search_provider.search(claim.as_str()).await {
            Ok(evidence) => evidence,
            Err(e) if e.is_configuration() => {
                return Err(VerifierError::SearchConfiguration(e.to_string()));
            }
            Err(e) => {
                warn!(claim = %claim, error = %e, "Search failed, claim is unverifiable");
                return Ok(Assessment::Unverifiable(UnverifiableReason::SearchUnavailable));
            }
        };
        debug!(
            hits = evidence.hits.len(),
            has_answer = evidence.answer.is_some(),
            "Evidence fetched"
        );

        let prompt = build_prompt(&self.config.prompt, claim, &evidence);
        debug!(prompt_version = %self.config.prompt.version, "Requesting verdict");

        let verdict = match self.llm_provider.complete(&prompt).await {
            Ok(response) => parse_verdict(&response),
            Err(e) => Err(VerifierError::Llm(e.to_string())),
        };

        match verdict {
            Ok(verdict) => {
                info!(claim = %claim, status = %verdict.status, "Claim adjudicated");
                Ok(Assessment::Adjudicated(verdict))
            }
            Err(e) => {
                warn!(claim = %claim, error = %e, "Verification failed, claim is unverifiable");
                Ok(Assessment::Unverifiable(UnverifiableReason::VerificationFailed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcheck_domain::{PromptTemplate, SearchEvidence, SearchHit, VerificationStatus};
    use factcheck_llm::MockProvider;
    use factcheck_search::MockSearch;

    const VERIFIED: &str =
        r#"{"status": "Verified", "explanation": "Matches the census", "correct_value": null, "source": "US Census"}"#;

    fn verifier(llm: MockProvider, search: MockSearch) -> ClaimVerifier<MockProvider, MockSearch> {
        ClaimVerifier::new(llm, search, VerifierConfig::default())
    }

    #[tokio::test]
    async fn test_adjudicated_verdict() {
        let verifier = verifier(MockProvider::new(VERIFIED), MockSearch::default());
        let assessment = verifier.verify(&Claim::new("c")).await.unwrap();

        match assessment {
            Assessment::Adjudicated(verdict) => {
                assert_eq!(verdict.status, VerificationStatus::Verified);
                assert_eq!(verdict.source, "US Census");
            }
            other => panic!("expected verdict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_claim_is_the_search_query() {
        let search = MockSearch::default();
        let llm = MockProvider::new(VERIFIED);
        let verifier = ClaimVerifier::new(llm.clone(), search.clone(), VerifierConfig::default());

        search.add_evidence(
            "Mount Everest is 8,849 m tall",
            SearchEvidence::new(
                vec![SearchHit::new("Everest", "8,848.86 m per the 2020 survey")],
                Some("8,849 m".to_string()),
            ),
        );
        verifier.verify(&Claim::new("Mount Everest is 8,849 m tall")).await.unwrap();

        assert_eq!(search.queries(), vec!["Mount Everest is 8,849 m tall"]);
        let prompt = &llm.prompts()[0];
        assert!(prompt.contains("Direct Answer: 8,849 m"));
        assert!(prompt.contains("- Everest: 8,848.86 m per the 2020 survey"));
    }

    #[tokio::test]
    async fn test_search_outage_is_unverifiable() {
        let search = MockSearch::default();
        search.fail_unavailable("c");
        let llm = MockProvider::new(VERIFIED);
        let verifier = ClaimVerifier::new(llm.clone(), search, VerifierConfig::default());

        let assessment = verifier.verify(&Claim::new("c")).await.unwrap();
        assert_eq!(
            assessment,
            Assessment::Unverifiable(UnverifiableReason::SearchUnavailable)
        );
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials_propagate() {
        let search = MockSearch::default();
        search.fail_missing_credentials("c");
        let verifier = verifier(MockProvider::new(VERIFIED), search);

        let err = verifier.verify(&Claim::new("c")).await.unwrap_err();
        assert!(matches!(err, VerifierError::SearchConfiguration(_)));
        assert_eq!(err.to_string(), "TAVILY_API_KEY not configured");
    }

    #[tokio::test]
    async fn test_invalid_json_is_unverifiable() {
        let verifier = verifier(MockProvider::new("I think it's true."), MockSearch::default());
        let assessment = verifier.verify(&Claim::new("c")).await.unwrap();
        assert_eq!(
            assessment,
            Assessment::Unverifiable(UnverifiableReason::VerificationFailed)
        );
    }

    #[tokio::test]
    async fn test_llm_error_is_unverifiable() {
        let llm = MockProvider::new(VERIFIED);
        llm.add_error("Claim: broken");
        let verifier = verifier(llm, MockSearch::default());

        let assessment = verifier.verify(&Claim::new("broken")).await.unwrap();
        assert!(assessment.is_unverifiable());
        let ok = verifier.verify(&Claim::new("fine")).await.unwrap();
        assert!(!ok.is_unverifiable());
    }

    #[tokio::test]
    async fn test_custom_prompt() {
        let llm = MockProvider::new(VERIFIED);
        let config = VerifierConfig {
            prompt: PromptTemplate::new("tiny", "{claim} | {search_results}"),
        };
        let verifier = ClaimVerifier::new(llm.clone(), MockSearch::default(), config);

        verifier.verify(&Claim::new("x")).await.unwrap();
        assert_eq!(llm.prompts(), vec!["x | "]);
    }
}
