//! Helpers for reading structured LLM output

const FENCE: &str = "```";

/// The JSON payload of an LLM response.
///
/// When the response contains a markdown code fence anywhere, the payload is
/// the text after the first fence (minus an info string such as `json`) up
/// to the next fence, or to the end of the text when the block is left open.
/// Fences may sit on the same line as the JSON. Without a fence the whole
/// response is the payload. The result is trimmed.
pub fn json_payload(response: &str) -> &str {
    let Some(open) = response.find(FENCE) else {
        return response.trim();
    };

    let after_fence = &response[open + FENCE.len()..];
    let info_len = after_fence
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after_fence.len());
    let body = &after_fence[info_len..];

    match body.find(FENCE) {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_response() {
        assert_eq!(json_payload("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fenced_block() {
        assert_eq!(json_payload("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(json_payload("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn test_preamble_and_trailer_around_fence() {
        let response = "Here is the result:\n```json\n{\"a\": 1}\n```\nLet me know if you need more.";
        assert_eq!(json_payload(response), "{\"a\": 1}");
    }

    #[test]
    fn test_single_line_fence() {
        assert_eq!(json_payload("```json {\"a\": 1} ```"), "{\"a\": 1}");
        assert_eq!(json_payload("```{\"a\": 1}```"), "{\"a\": 1}");
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(json_payload("```json\n{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(json_payload("```"), "");
    }
}
