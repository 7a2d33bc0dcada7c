//! Factcheck Domain Layer
//!
//! Core data model for the fact-checking pipeline and the trait seams every
//! infrastructure crate plugs into.
//!
//! ## Key Concepts
//!
//! - **Claim**: one verifiable factual assertion lifted verbatim from a document
//! - **SearchEvidence**: web search hits plus an optional synthesized answer
//! - **Verdict**: the adjudication an LLM produced for a claim
//! - **Assessment**: a verdict, or the reason no verdict could be reached
//! - **FactCheckResult**: the record returned to the caller, one per claim
//! - **PromptTemplate**: versioned prompt wording with `{name}` placeholders
//!
//! ## Architecture
//!
//! Providers (LLM completion, web search) are traits defined here and
//! implemented in `factcheck-llm` and `factcheck-search`. Application crates
//! are generic over them so tests can substitute deterministic mocks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod evidence;
pub mod prompt;
pub mod response;
pub mod result;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use claim::Claim;
pub use evidence::{SearchEvidence, SearchHit};
pub use prompt::PromptTemplate;
pub use response::json_payload;
pub use result::FactCheckResult;
pub use traits::{LlmProvider, SearchFailure, SearchProvider};
pub use verdict::{Assessment, ParseStatusError, UnverifiableReason, VerificationStatus, Verdict};
