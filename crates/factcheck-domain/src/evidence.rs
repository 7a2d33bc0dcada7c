//! Web search evidence gathered for a single claim

use serde::{Deserialize, Serialize};

/// One web search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page title
    pub title: String,

    /// Text excerpt relevant to the query
    pub snippet: String,

    /// Page URL, when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SearchHit {
    /// Create a hit without a URL
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: None,
        }
    }

    /// Attach the page URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Search results for one claim: ranked hits plus an optional direct answer
/// synthesized by the search provider.
///
/// Evidence is consumed immediately by the verifier and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEvidence {
    /// Ranked hits, best first
    #[serde(default)]
    pub hits: Vec<SearchHit>,

    /// Provider-synthesized answer to the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl SearchEvidence {
    /// Create evidence from hits and an optional answer
    pub fn new(hits: Vec<SearchHit>, answer: Option<String>) -> Self {
        Self { hits, answer }
    }

    /// True when there are no hits and no answer
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty() && self.answer.as_deref().map_or(true, |a| a.trim().is_empty())
    }

    /// Render the evidence as the text block handed to the verification prompt.
    ///
    /// One `- {title}: {snippet}` line per hit. A non-empty direct answer is
    /// placed first as `Direct Answer: {answer}` followed by a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use factcheck_domain::{SearchEvidence, SearchHit};
    ///
    /// let evidence = SearchEvidence::new(
    ///     vec![SearchHit::new("Eiffel Tower", "The tower is 330 m tall.")],
    ///     Some("330 metres".to_string()),
    /// );
    /// assert_eq!(
    ///     evidence.to_prompt_text(),
    ///     "Direct Answer: 330 metres\n\n- Eiffel Tower: The tower is 330 m tall."
    /// );
    /// ```
    pub fn to_prompt_text(&self) -> String {
        let lines = self
            .hits
            .iter()
            .map(|hit| format!("- {}: {}", hit.title, hit.snippet))
            .collect::<Vec<_>>()
            .join("\n");

        match self.answer.as_deref() {
            Some(answer) if !answer.is_empty() => format!("Direct Answer: {}\n\n{}", answer, lines),
            _ => lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text_without_answer() {
        let evidence = SearchEvidence::new(
            vec![
                SearchHit::new("First", "alpha"),
                SearchHit::new("Second", "beta").with_url("https://example.com/b"),
            ],
            None,
        );
        assert_eq!(evidence.to_prompt_text(), "- First: alpha\n- Second: beta");
    }

    #[test]
    fn test_prompt_text_with_answer_only() {
        let evidence = SearchEvidence::new(Vec::new(), Some("42".to_string()));
        assert_eq!(evidence.to_prompt_text(), "Direct Answer: 42\n\n");
    }

    #[test]
    fn test_empty_answer_is_ignored() {
        let evidence = SearchEvidence::new(vec![SearchHit::new("T", "s")], Some(String::new()));
        assert_eq!(evidence.to_prompt_text(), "- T: s");
    }

    #[test]
    fn test_is_empty() {
        assert!(SearchEvidence::default().is_empty());
        assert!(SearchEvidence::new(Vec::new(), Some("  ".to_string())).is_empty());
        assert!(!SearchEvidence::new(Vec::new(), Some("yes".to_string())).is_empty());
        assert!(!SearchEvidence::new(vec![SearchHit::default()], None).is_empty());
    }
}
