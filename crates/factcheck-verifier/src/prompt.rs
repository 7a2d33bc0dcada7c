//! LLM prompt for claim adjudication

use factcheck_domain::{Claim, PromptTemplate, SearchEvidence};

/// Version tag of the built-in verification prompt
pub const VERIFICATION_PROMPT_VERSION: &str = "verdict-v1";

pub(crate) const CLAIM_PLACEHOLDER: &str = "claim";
pub(crate) const RESULTS_PLACEHOLDER: &str = "search_results";

const VERIFICATION_TEMPLATE: &str = r#"You are a fact-checking expert. Analyze this claim against the provided search results.

Claim: {claim}

Search Results:
{search_results}

Based on the search results, determine:
1. Status: Is the claim "Verified" (matches authoritative data), "Inaccurate" (outdated or partially wrong), or "False" (no credible evidence)?
2. Explanation: Brief explanation of your reasoning
3. Correct Value: If inaccurate, provide the correct/current value. Otherwise null.
4. Source: A brief citation from the search results

Return ONLY this JSON format:
{
  "status": "Verified|Inaccurate|False",
  "explanation": "explanation here",
  "correct_value": "value or null",
  "source": "source citation"
}"#;

/// The built-in verification prompt
pub fn default_template() -> PromptTemplate {
    PromptTemplate::new(VERIFICATION_PROMPT_VERSION, VERIFICATION_TEMPLATE)
}

pub(crate) fn build_prompt(template: &PromptTemplate, claim: &Claim, evidence: &SearchEvidence) -> String {
    let search_results = evidence.to_prompt_text();
    template.render(&[
        (CLAIM_PLACEHOLDER, claim.as_str()),
        (RESULTS_PLACEHOLDER, &search_results),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use factcheck_domain::SearchHit;

    #[test]
    fn test_prompt_includes_claim_and_evidence() {
        let evidence = SearchEvidence::new(
            vec![
                SearchHit::new("Census 2020", "Population 331.4 million"),
                SearchHit::new("World Bank", "US population 2022"),
            ],
            Some("About 333 million".to_string()),
        );
        let prompt = build_prompt(&default_template(), &Claim::new("The US has 300M people"), &evidence);

        assert!(prompt.contains("Claim: The US has 300M people\n"));
        assert!(prompt.contains(
            "Search Results:\nDirect Answer: About 333 million\n\n- Census 2020: Population 331.4 million\n- World Bank: US population 2022\n"
        ));
    }

    #[test]
    fn test_json_skeleton_survives_rendering() {
        let prompt = build_prompt(&default_template(), &Claim::new("c"), &SearchEvidence::default());
        assert!(prompt.contains("Return ONLY this JSON format:\n{\n  \"status\": \"Verified|Inaccurate|False\","));
        assert!(prompt.ends_with("\"source\": \"source citation\"\n}"));
    }

    #[test]
    fn test_empty_evidence_renders_empty_section() {
        let prompt = build_prompt(&default_template(), &Claim::new("c"), &SearchEvidence::default());
        assert!(prompt.contains("Search Results:\n\n\nBased on the search results"));
    }
}
