//! Factcheck Claim Verifier
//!
//! Adjudicates one claim at a time: fetches web evidence for the claim, then
//! asks an LLM for a JSON verdict grounded in that evidence.
//!
//! The verifier never turns an unreachable search API or a bad LLM answer
//! into a request failure. Both produce an [`Assessment::Unverifiable`] with
//! the reason attached. Only a search *configuration* failure (missing or
//! rejected credentials) is returned as an error.
//!
//! # Examples
//!
//! ```
//! use factcheck_domain::{Assessment, Claim, VerificationStatus};
//! use factcheck_llm::MockProvider;
//! use factcheck_search::MockSearch;
//! use factcheck_verifier::{ClaimVerifier, VerifierConfig};
//!
//! # tokio_test::block_on(async {
//! let llm = MockProvider::new(
//!     r#"{"status": "Verified", "explanation": "Matches", "correct_value": null, "source": "Wikipedia"}"#,
//! );
//! let verifier = ClaimVerifier::new(llm, MockSearch::default(), VerifierConfig::default());
//!
//! let assessment = verifier.verify(&Claim::new("Water boils at 100 C at sea level")).await.unwrap();
//! match assessment {
//!     Assessment::Adjudicated(verdict) => assert_eq!(verdict.status, VerificationStatus::Verified),
//!     Assessment::Unverifiable(reason) => panic!("unexpected: {reason}"),
//! }
//! # });
//! ```
//!
//! [`Assessment::Unverifiable`]: factcheck_domain::Assessment::Unverifiable

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod prompt;
mod verifier;

pub use config::VerifierConfig;
pub use error::VerifierError;
pub use parser::parse_verdict;
pub use prompt::{default_template, VERIFICATION_PROMPT_VERSION};
pub use verifier::ClaimVerifier;
