//! Claim module - one verifiable assertion taken from a document

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single factual claim, exactly as the extractor produced it.
///
/// Claims carry no identity beyond their text and live for one request.
/// The text is never rewritten after extraction: the result record echoes
/// it verbatim.
///
/// # Examples
///
/// ```
/// use factcheck_domain::Claim;
///
/// let claim = Claim::new("Water boils at 100 °C at sea level");
/// assert_eq!(claim.as_str(), "Water boils at 100 °C at sea level");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claim(String);

impl Claim {
    /// Wrap claim text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the claim text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the claim, returning its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Claim {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Claim {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Claim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
