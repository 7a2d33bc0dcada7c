//! Verifier configuration

use crate::prompt::{default_template, CLAIM_PLACEHOLDER, RESULTS_PLACEHOLDER};
use factcheck_domain::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Configuration for the Verifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Verification prompt
    pub prompt: PromptTemplate,
}

impl VerifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let missing = self
            .prompt
            .missing_placeholders(&[CLAIM_PLACEHOLDER, RESULTS_PLACEHOLDER]);
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(|name| format!("{{{}}}", name)).collect();
            return Err(format!(
                "verification prompt '{}' lacks placeholder(s): {}",
                self.prompt.version,
                names.join(", ")
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            prompt: default_template(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VERIFICATION_PROMPT_VERSION;

    #[test]
    fn test_default_config() {
        let config = VerifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prompt.version, VERIFICATION_PROMPT_VERSION);
    }

    #[test]
    fn test_missing_placeholder_is_named() {
        let config = VerifierConfig {
            prompt: PromptTemplate::new("short", "Is this true? {claim}"),
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("{search_results}"));
        assert!(!err.contains("{claim}"));
    }

    #[test]
    fn test_prompt_override_from_toml() {
        let config = VerifierConfig::from_toml(
            r#"
[prompt]
version = "verdict-v2"
text = "Claim: {claim}\nEvidence: {search_results}"
"#,
        )
        .unwrap();
        assert_eq!(config.prompt.version, "verdict-v2");
        assert!(config.validate().is_ok());
    }
}
