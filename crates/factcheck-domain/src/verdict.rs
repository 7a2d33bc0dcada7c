//! Verification outcomes for a claim

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status reported for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationStatus {
    /// Matches authoritative data
    Verified,
    /// Outdated or partially wrong
    Inaccurate,
    /// No credible evidence supports it
    False,
}

impl VerificationStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Inaccurate => "Inaccurate",
            VerificationStatus::False => "False",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string names none of the known statuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verification status: {:?}", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for VerificationStatus {
    type Err = ParseStatusError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("verified") {
            Ok(VerificationStatus::Verified)
        } else if trimmed.eq_ignore_ascii_case("inaccurate") {
            Ok(VerificationStatus::Inaccurate)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(VerificationStatus::False)
        } else {
            Err(ParseStatusError(s.to_string()))
        }
    }
}

/// An adjudication produced by the verification LLM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Verification status
    pub status: VerificationStatus,

    /// Reasoning behind the status
    pub explanation: String,

    /// Correct or current value when the claim is inaccurate
    pub correct_value: Option<String>,

    /// Brief citation drawn from the evidence
    pub source: String,
}

/// Why a claim could not be adjudicated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnverifiableReason {
    /// The web search failed (network, provider error, malformed response)
    SearchUnavailable,
    /// The verification LLM call failed or returned an unusable verdict
    VerificationFailed,
}

impl UnverifiableReason {
    /// Explanation text reported to the caller
    pub fn explanation(&self) -> &'static str {
        match self {
            UnverifiableReason::SearchUnavailable => "Unable to verify - search service unavailable",
            UnverifiableReason::VerificationFailed => "Unable to verify claim",
        }
    }

    /// Source text reported to the caller
    pub fn source(&self) -> &'static str {
        match self {
            UnverifiableReason::SearchUnavailable => "N/A",
            UnverifiableReason::VerificationFailed => "Error during verification",
        }
    }
}

impl fmt::Display for UnverifiableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnverifiableReason::SearchUnavailable => f.write_str("search unavailable"),
            UnverifiableReason::VerificationFailed => f.write_str("verification failed"),
        }
    }
}

/// Outcome of verifying one claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment {
    /// The LLM produced a well-formed verdict
    Adjudicated(Verdict),
    /// No verdict could be reached; reported to the caller as `False`
    Unverifiable(UnverifiableReason),
}

impl Assessment {
    /// True when no verdict could be reached
    pub fn is_unverifiable(&self) -> bool {
        matches!(self, Assessment::Unverifiable(_))
    }
}
