//! Service configuration.
//!
//! Loaded from an optional TOML file, then overlaid with secrets from the
//! environment. Every section may be omitted.

use factcheck_extractor::ExtractorConfig;
use factcheck_verifier::VerifierConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the LLM API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the search API key
pub const TAVILY_API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Field present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener
    pub server: ServerSection,
    /// LLM provider
    pub llm: LlmSection,
    /// Web search provider
    pub search: SearchSection,
    /// Claim extraction
    pub extractor: ExtractorConfig,
    /// Claim verification
    pub verifier: VerifierConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,
    /// Bind port
    pub bind_port: u16,
    /// Largest accepted request body
    pub max_upload_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 10000,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// `[llm]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    /// API key; `OPENAI_API_KEY` takes precedence
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Chat model
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// API root
    pub base_url: String,
    /// Request timeout; none when absent
    pub timeout_secs: Option<u64>,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            api_key: None,
            model: factcheck_llm::openai::DEFAULT_MODEL.to_string(),
            temperature: factcheck_llm::openai::DEFAULT_TEMPERATURE,
            base_url: factcheck_llm::openai::DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// `[search]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// API key; `TAVILY_API_KEY` takes precedence
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API root
    pub base_url: String,
    /// Results requested per claim
    pub max_results: usize,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: factcheck_search::tavily::DEFAULT_BASE_URL.to_string(),
            max_results: factcheck_search::tavily::DEFAULT_MAX_RESULTS,
            timeout_secs: factcheck_search::tavily::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Render as TOML, without secrets
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Overlay API keys from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Overlay API keys from `lookup`; empty values are ignored
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(OPENAI_API_KEY_VAR) {
            self.llm.api_key = Some(key);
        }
        if let Some(key) = non_empty(TAVILY_API_KEY_VAR) {
            self.search.api_key = Some(key);
        }
    }

    /// Replace the listener address with `host:port`
    pub fn set_bind(&mut self, bind: &str) -> Result<(), ConfigError> {
        let (host, port) = bind
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::Invalid(format!("bind address '{}' is not host:port", bind)))?;
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid(format!("bind port '{}' is not a port number", port)))?;
        if host.is_empty() {
            return Err(ConfigError::Invalid(format!("bind address '{}' has no host", bind)));
        }

        self.server.bind_address = host.to_string();
        self.server.bind_port = port;
        Ok(())
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.bind_port)
    }

    /// Check that the service can start with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_blank(&self.llm.api_key) {
            return Err(ConfigError::MissingField(OPENAI_API_KEY_VAR.to_string()));
        }
        if is_blank(&self.search.api_key) {
            return Err(ConfigError::MissingField(TAVILY_API_KEY_VAR.to_string()));
        }
        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("server.max_upload_bytes must be greater than 0".to_string()));
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::Invalid("search.max_results must be greater than 0".to_string()));
        }
        if self.search.timeout_secs == 0 {
            return Err(ConfigError::Invalid("search.timeout_secs must be greater than 0".to_string()));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::Invalid(format!(
                "llm.temperature must be within [0, 2], got {}",
                self.llm.temperature
            )));
        }
        self.extractor
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("extractor: {}", e)))?;
        self.verifier
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("verifier: {}", e)))?;
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
