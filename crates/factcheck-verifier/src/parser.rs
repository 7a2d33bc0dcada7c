//! Parse LLM output into a verdict

use crate::error::VerifierError;
use factcheck_domain::{json_payload, Verdict, VerificationStatus};
use serde_json::{Map, Value};

/// Parse a verdict response.
///
/// The JSON may sit inside a markdown code block anywhere in the response.
/// It must be an object with a `status` naming one of the three statuses
/// (any case).
/// `explanation` and `source` default to empty strings. `correct_value` may be
/// a string, a number or null; the strings `"null"` and `""` count as null.
pub fn parse_verdict(response: &str) -> Result<Verdict, VerifierError> {
    let json: Value = serde_json::from_str(json_payload(response))?;

    let obj = json
        .as_object()
        .ok_or_else(|| VerifierError::InvalidVerdict("Expected JSON object".to_string()))?;

    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| VerifierError::InvalidVerdict("Missing 'status' field".to_string()))?
        .parse::<VerificationStatus>()
        .map_err(|e| VerifierError::InvalidVerdict(e.to_string()))?;

    Ok(Verdict {
        status,
        explanation: text_field(obj, "explanation")?,
        correct_value: correct_value(obj.get("correct_value"))?,
        source: text_field(obj, "source")?,
    })
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Result<String, VerifierError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(VerifierError::InvalidVerdict(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
    }
}

fn correct_value(value: Option<&Value>) -> Result<Option<String>, VerifierError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(VerifierError::InvalidVerdict(format!(
            "'correct_value' must be a string, number or null, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_verdict() {
        let verdict = parse_verdict(
            r#"{
                "status": "Inaccurate",
                "explanation": "Revenue was restated",
                "correct_value": "$4.1 billion",
                "source": "Annual report 2023"
            }"#,
        )
        .unwrap();

        assert_eq!(verdict.status, VerificationStatus::Inaccurate);
        assert_eq!(verdict.explanation, "Revenue was restated");
        assert_eq!(verdict.correct_value.as_deref(), Some("$4.1 billion"));
        assert_eq!(verdict.source, "Annual report 2023");
    }

    #[test]
    fn test_parse_fenced_verdict() {
        let response = "```json\n{\"status\": \"verified\", \"explanation\": \"ok\", \"correct_value\": null, \"source\": \"NASA\"}\n```";
        let verdict = parse_verdict(response).unwrap();
        assert_eq!(verdict.status, VerificationStatus::Verified);
        assert_eq!(verdict.correct_value, None);
    }

    #[test]
    fn test_null_like_correct_values() {
        for raw in [r#""null""#, r#""NULL""#, r#""""#, "null"] {
            let response = format!(r#"{{"status": "False", "correct_value": {}}}"#, raw);
            assert_eq!(parse_verdict(&response).unwrap().correct_value, None, "{}", raw);
        }
    }

    #[test]
    fn test_numeric_correct_value() {
        let verdict = parse_verdict(r#"{"status": "Inaccurate", "correct_value": 8849}"#).unwrap();
        assert_eq!(verdict.correct_value.as_deref(), Some("8849"));
    }

    #[test]
    fn test_optional_text_fields_default_empty() {
        let verdict = parse_verdict(r#"{"status": "False"}"#).unwrap();
        assert_eq!(verdict.explanation, "");
        assert_eq!(verdict.source, "");
    }

    #[test]
    fn test_status_is_required() {
        let result = parse_verdict(r#"{"explanation": "no status"}"#);
        assert!(matches!(result, Err(VerifierError::InvalidVerdict(_))));
    }

    #[test]
    fn test_unknown_status_rejected() {
        for status in ["Verified|Inaccurate|False", "Unverifiable", "true"] {
            let response = format!(r#"{{"status": "{}"}}"#, status);
            assert!(parse_verdict(&response).is_err(), "{}", status);
        }
    }

    #[test]
    fn test_non_object_and_prose_rejected() {
        assert!(parse_verdict(r#"["Verified"]"#).is_err());
        assert!(parse_verdict("The claim appears to be true.").is_err());
        assert!(parse_verdict(r#"{"status": "False", "correct_value": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_parse_after_preamble() {
        let response = "Based on the evidence:\n```json\n{\"status\": \"Verified\", \"explanation\": \"ok\", \"source\": \"BBC\"}\n```";
        let verdict = parse_verdict(response).unwrap();
        assert_eq!(verdict.status, VerificationStatus::Verified);
        assert_eq!(verdict.source, "BBC");
    }

    #[test]
    fn test_parse_single_line_fence() {
        let verdict = parse_verdict(r#"```json {"status": "False", "correct_value": null} ```"#).unwrap();
        assert_eq!(verdict.status, VerificationStatus::False);
    }
}
