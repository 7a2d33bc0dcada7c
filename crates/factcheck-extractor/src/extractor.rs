//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_claims;
use crate::prompt::PromptBuilder;
use factcheck_domain::{Claim, LlmProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Extracts verifiable claims from document text
pub struct ClaimExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> ClaimExtractor<L>
where
    L: LlmProvider,
{
    /// Create a new extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self::with_shared(Arc::new(llm_provider), config)
    }

    /// Create an extractor over a provider shared with other components
    pub fn with_shared(llm_provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract claims, degrading to an empty list on any failure
    pub async fn extract(&self, text: &str) -> Vec<Claim> {
        match self.try_extract(text).await {
            Ok(claims) => claims,
            Err(e) => {
                warn!(error = %e, "Claim extraction failed, continuing with no claims");
                Vec::new()
            }
        }
    }

    /// Extract claims, reporting LLM and parse failures
    pub async fn try_extract(&self, text: &str) -> Result<Vec<Claim>, ExtractorError> {
        let truncated = truncate_chars(text, self.config.max_text_chars);
        if truncated.len() < text.len() {
            debug!(
                kept_chars = self.config.max_text_chars,
                total_bytes = text.len(),
                "Document text truncated for extraction"
            );
        }

        let prompt = PromptBuilder::new(&self.config.prompt, truncated).build();

        info!(
            prompt_version = %self.config.prompt.version,
            model = self.llm_provider.model_name(),
            "Extracting claims"
        );
        debug!("Prompt length: {} chars", prompt.len());

        let response = self
            .llm_provider
            .complete(&prompt)
            .await
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", response.len());

        let claims = parse_claims(&response)?;

        info!("Extracted {} claims", claims.len());
        Ok(claims)
    }
}
