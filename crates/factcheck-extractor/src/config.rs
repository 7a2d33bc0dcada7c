//! Configuration for the Extractor

use crate::prompt::{default_template, TEXT_PLACEHOLDER};
use factcheck_domain::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Characters of document text sent to the LLM; the rest is dropped
    pub max_text_chars: usize,

    /// Extraction prompt
    pub prompt: PromptTemplate,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }
        if !self.prompt.missing_placeholders(&[TEXT_PLACEHOLDER]).is_empty() {
            return Err(format!(
                "extraction prompt '{}' lacks the {{{}}} placeholder",
                self.prompt.version, TEXT_PLACEHOLDER
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_chars: 3000,
            prompt: default_template(),
        }
    }
}
