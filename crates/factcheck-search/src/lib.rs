//! Factcheck Web Search Layer
//!
//! Implementations of the `SearchProvider` trait from `factcheck-domain`.
//!
//! # Providers
//!
//! - `TavilyClient`: Tavily search API with synthesized answers
//! - `MockSearch`: Deterministic mock for testing

#![warn(missing_docs)]

mod error;
mod mock;
pub mod tavily;

pub use error::SearchError;
pub use mock::MockSearch;
pub use tavily::TavilyClient;
