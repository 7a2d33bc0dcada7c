//! The fact-checking pipeline, independent of the HTTP layer.
//!
//! One call is one linear pass: filename check, text extraction, claim
//! extraction, then evidence fetch and adjudication for each claim in turn.

use factcheck_domain::{FactCheckResult, LlmProvider, SearchProvider};
use factcheck_extractor::{ClaimExtractor, ExtractorConfig};
use factcheck_pdf::PdfError;
use factcheck_verifier::{ClaimVerifier, VerifierConfig, VerifierError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons a document could not be fact-checked
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// Upload name does not end in `.pdf`
    #[error("File must be a PDF")]
    NotPdf,

    /// Upload could not be read as a PDF
    #[error("Error extracting PDF: {0}")]
    Pdf(#[from] PdfError),

    /// PDF has no extractable text
    #[error("No text found in PDF")]
    NoText,

    /// A provider is misconfigured (e.g. missing search credentials)
    #[error("{0}")]
    Configuration(String),

    /// Unexpected failure inside the service
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FactCheckError {
    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FactCheckError::NotPdf | FactCheckError::Pdf(_) | FactCheckError::NoText
        )
    }
}

impl From<VerifierError> for FactCheckError {
    fn from(e: VerifierError) -> Self {
        match e {
            VerifierError::SearchConfiguration(msg) => FactCheckError::Configuration(msg),
            other => FactCheckError::Internal(other.to_string()),
        }
    }
}

/// Reject upload names that do not end in `.pdf`
pub fn ensure_pdf_filename(filename: &str) -> Result<(), FactCheckError> {
    if filename.ends_with(".pdf") {
        Ok(())
    } else {
        Err(FactCheckError::NotPdf)
    }
}

/// Drives extraction and verification for one document
pub struct FactChecker<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    extractor: ClaimExtractor<L>,
    verifier: ClaimVerifier<L, S>,
}

impl<L, S> FactChecker<L, S>
where
    L: LlmProvider,
    S: SearchProvider,
{
    /// Build a pipeline whose extractor and verifier share one LLM provider
    pub fn new(
        llm: Arc<L>,
        search: Arc<S>,
        extractor_config: ExtractorConfig,
        verifier_config: VerifierConfig,
    ) -> Self {
        Self {
            extractor: ClaimExtractor::with_shared(Arc::clone(&llm), extractor_config),
            verifier: ClaimVerifier::with_shared(llm, search, verifier_config),
        }
    }

    /// Fact-check an uploaded document.
    ///
    /// Results follow claim extraction order. A document whose text yields no
    /// claims produces an empty list.
    pub async fn check_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<FactCheckResult>, FactCheckError> {
        ensure_pdf_filename(filename)?;

        let extracted = tokio::task::spawn_blocking(move || factcheck_pdf::extract_text(&bytes))
            .await
            .map_err(|e| FactCheckError::Internal(format!("PDF extraction task failed: {}", e)))??;

        if extracted.is_blank() {
            return Err(FactCheckError::NoText);
        }
        debug!(
            pages = extracted.page_count,
            chars = extracted.text.chars().count(),
            "Extracted PDF text"
        );

        let claims = self.extractor.extract(&extracted.text).await;
        if claims.is_empty() {
            info!("No verifiable claims found");
            return Ok(Vec::new());
        }
        info!(claims = claims.len(), "Verifying claims");

        let mut results = Vec::with_capacity(claims.len());
        for claim in &claims {
            let assessment = self.verifier.verify(claim).await?;
            results.push(FactCheckResult::from_assessment(claim, assessment));
        }

        let unverifiable = results.iter().filter(|r| r.is_unverifiable()).count();
        if unverifiable > 0 {
            warn!(
                unverifiable,
                total = results.len(),
                "Some claims could not be verified"
            );
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcheck_domain::{UnverifiableReason, VerificationStatus};
    use factcheck_llm::MockProvider;
    use factcheck_pdf::fixtures::{blank_pdf, text_pdf};
    use factcheck_search::MockSearch;

    fn checker(llm: MockProvider, search: MockSearch) -> FactChecker<MockProvider, MockSearch> {
        FactChecker::new(
            Arc::new(llm),
            Arc::new(search),
            ExtractorConfig::default(),
            VerifierConfig::default(),
        )
    }

    #[test]
    fn test_filename_check() {
        assert!(ensure_pdf_filename("report.pdf").is_ok());
        assert!(matches!(ensure_pdf_filename("report.PDF"), Err(FactCheckError::NotPdf)));
        assert!(matches!(ensure_pdf_filename("report.pdf.txt"), Err(FactCheckError::NotPdf)));
        assert!(matches!(ensure_pdf_filename(""), Err(FactCheckError::NotPdf)));
    }

    #[tokio::test]
    async fn test_claims_verified_in_order() {
        let llm = MockProvider::new(r#"{"status": "False", "explanation": "", "correct_value": null, "source": ""}"#);
        llm.add_response("Analyze the following text", r#"{"claims": ["first", "second", "third"]}"#);
        llm.add_response("Claim: first", r#"{"status": "Verified", "explanation": "a", "source": "s1"}"#);
        llm.add_response("Claim: second", r#"{"status": "Inaccurate", "correct_value": "2", "source": "s2"}"#);
        let search = MockSearch::default();
        let checker = checker(llm, search.clone());

        let pdf = text_pdf(&["first second third"]).unwrap();
        let results = checker.check_document("doc.pdf", pdf).await.unwrap();

        let claims: Vec<&str> = results.iter().map(|r| r.claim.as_str()).collect();
        assert_eq!(claims, vec!["first", "second", "third"]);
        assert_eq!(results[0].status, VerificationStatus::Verified);
        assert_eq!(results[1].status, VerificationStatus::Inaccurate);
        assert_eq!(results[1].correct_value.as_deref(), Some("2"));
        assert_eq!(results[2].status, VerificationStatus::False);
        assert_eq!(search.queries(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_blank_pdf_is_rejected() {
        let llm = MockProvider::default();
        let checker = checker(llm.clone(), MockSearch::default());

        let err = checker.check_document("scan.pdf", blank_pdf(2).unwrap()).await.unwrap_err();
        assert!(matches!(err, FactCheckError::NoText));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_a_pdf_error() {
        let checker = checker(MockProvider::default(), MockSearch::default());
        let err = checker
            .check_document("fake.pdf", b"not a pdf at all".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, FactCheckError::Pdf(_)));
        assert!(err.to_string().starts_with("Error extracting PDF: "));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_search_outage_flags_result() {
        let llm = MockProvider::new(r#"{"claims": ["c1"]}"#);
        let search = MockSearch::default();
        search.fail_unavailable("c1");
        let checker = checker(llm, search);

        let results = checker
            .check_document("doc.pdf", text_pdf(&["c1"]).unwrap())
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, VerificationStatus::False);
        assert_eq!(results[0].source, "N/A");
        assert_eq!(results[0].unverifiable, Some(UnverifiableReason::SearchUnavailable));
    }

    #[tokio::test]
    async fn test_missing_search_credentials_abort() {
        let llm = MockProvider::new(r#"{"claims": ["c1"]}"#);
        let search = MockSearch::default();
        search.fail_missing_credentials("c1");
        let checker = checker(llm, search);

        let err = checker
            .check_document("doc.pdf", text_pdf(&["c1"]).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, FactCheckError::Configuration(_)));
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "TAVILY_API_KEY not configured");
    }
}
