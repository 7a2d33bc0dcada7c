//! The per-claim record returned to API callers

use crate::claim::Claim;
use crate::verdict::{Assessment, UnverifiableReason, VerificationStatus};
use serde::{Deserialize, Serialize};

/// Fact-check result for one claim.
///
/// Serialized field names are part of the HTTP contract. `correct_value` is
/// always present on the wire, as `null` when there is nothing to correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckResult {
    /// Claim text, verbatim from extraction
    pub claim: String,

    /// Verification status
    pub status: VerificationStatus,

    /// Reasoning behind the status
    pub explanation: String,

    /// Correct or current value, if the claim is inaccurate
    pub correct_value: Option<String>,

    /// Brief citation
    pub source: String,

    /// Set when the status is a fallback rather than an adjudication.
    /// Not part of the wire format.
    #[serde(skip)]
    pub unverifiable: Option<UnverifiableReason>,
}

impl FactCheckResult {
    /// Build the record for `claim` from its assessment.
    ///
    /// An unverifiable assessment is reported as `False` with a fixed
    /// explanation and source.
    ///
    /// # Examples
    ///
    /// ```
    /// use factcheck_domain::{Assessment, Claim, FactCheckResult, UnverifiableReason, VerificationStatus};
    ///
    /// let result = FactCheckResult::from_assessment(
    ///     &Claim::new("The Moon is 384,400 km from Earth"),
    ///     Assessment::Unverifiable(UnverifiableReason::SearchUnavailable),
    /// );
    /// assert_eq!(result.status, VerificationStatus::False);
    /// assert_eq!(result.source, "N/A");
    /// assert!(result.is_unverifiable());
    /// ```
    pub fn from_assessment(claim: &Claim, assessment: Assessment) -> Self {
        match assessment {
            Assessment::Adjudicated(verdict) => Self {
                claim: claim.as_str().to_string(),
                status: verdict.status,
                explanation: verdict.explanation,
                correct_value: verdict.correct_value,
                source: verdict.source,
                unverifiable: None,
            },
            Assessment::Unverifiable(reason) => Self {
                claim: claim.as_str().to_string(),
                status: VerificationStatus::False,
                explanation: reason.explanation().to_string(),
                correct_value: None,
                source: reason.source().to_string(),
                unverifiable: Some(reason),
            },
        }
    }

    /// True when the status is a fallback, not an adjudication
    pub fn is_unverifiable(&self) -> bool {
        self.unverifiable.is_some()
    }
}
