//! Parse LLM output into claims

use crate::error::ExtractorError;
use factcheck_domain::{json_payload, Claim};
use serde_json::Value;
use tracing::warn;

/// Parse an extraction response of the form `{"claims": ["...", ...]}`.
///
/// - The JSON may sit inside a markdown code block anywhere in the response.
/// - The root must be a JSON object; a missing `claims` key means no claims.
/// - `claims` must be an array. Entries that are not strings, or are blank,
///   are skipped. Surviving entries are trimmed.
pub fn parse_claims(response: &str) -> Result<Vec<Claim>, ExtractorError> {
    let json: Value = serde_json::from_str(json_payload(response))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let claims_json = match obj.get("claims") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };

    let claims_array = claims_json
        .as_array()
        .ok_or_else(|| ExtractorError::InvalidFormat("'claims' is not an array".to_string()))?;

    let mut claims = Vec::with_capacity(claims_array.len());
    for (idx, entry) in claims_array.iter().enumerate() {
        match entry.as_str().map(str::trim) {
            Some(text) if !text.is_empty() => claims.push(Claim::new(text)),
            Some(_) => warn!("Claim {} is blank, skipping", idx),
            None => warn!("Claim {} is not a string, skipping", idx),
        }
    }

    Ok(claims)
}
