//! Factcheck Claim Extractor
//!
//! Turns document text into a list of objectively verifiable claims using an
//! LLM.
//!
//! # Architecture
//!
//! ```text
//! Text → truncate → prompt → LLM → strict parse → Claims
//! ```
//!
//! Extraction is best effort: `ClaimExtractor::extract` never fails. An LLM
//! error or an unusable response is logged and yields no claims, so a bad
//! extraction ends the request with an empty result instead of an error.
//! `ClaimExtractor::try_extract` exposes the underlying error.
//!
//! # Example Usage
//!
//! ```
//! use factcheck_extractor::{ClaimExtractor, ExtractorConfig};
//! use factcheck_llm::MockProvider;
//!
//! # tokio_test::block_on(async {
//! let llm = MockProvider::new(r#"{"claims": ["Revenue reached $4.2B in 2023"]}"#);
//! let extractor = ClaimExtractor::new(llm, ExtractorConfig::default());
//!
//! let claims = extractor.extract("Revenue reached $4.2B in 2023, a record.").await;
//! assert_eq!(claims.len(), 1);
//! # });
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{truncate_chars, ClaimExtractor};
pub use parser::parse_claims;
pub use prompt::{default_template, PromptBuilder, EXTRACTION_PROMPT_VERSION};
