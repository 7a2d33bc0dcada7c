//! LLM prompt for claim extraction

use factcheck_domain::PromptTemplate;

/// Version tag of the built-in extraction prompt
pub const EXTRACTION_PROMPT_VERSION: &str = "claims-v1";

pub(crate) const TEXT_PLACEHOLDER: &str = "text";

const EXTRACTION_TEMPLATE: &str = r#"Analyze the following text and extract ONLY verifiable factual claims.

Verifiable claims include:
- Statistics and numerical data
- Dates and historical facts
- Financial figures
- Technical specifications
- Named entities with concrete facts

DO NOT include:
- Opinions
- Predictions
- Subjective statements
- General descriptions

Return a JSON array of claims. Each claim should be a single, concise statement with exact numbers/dates.
Format: {"claims": ["claim1", "claim2", ...]}

Text:
{text}

Return ONLY valid JSON, no additional text."#;

/// The built-in extraction prompt
pub fn default_template() -> PromptTemplate {
    PromptTemplate::new(EXTRACTION_PROMPT_VERSION, EXTRACTION_TEMPLATE)
}

/// Builds prompts for the LLM to extract claims
pub struct PromptBuilder<'a> {
    template: &'a PromptTemplate,
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder over an already truncated text
    pub fn new(template: &'a PromptTemplate, text: &'a str) -> Self {
        Self { template, text }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        self.template.render(&[(TEXT_PLACEHOLDER, self.text)])
    }
}
