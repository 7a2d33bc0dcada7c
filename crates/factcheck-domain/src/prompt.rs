//! Versioned prompt templates
//!
//! Prompt wording is configuration data, not logic. A template names its
//! version (logged with every call) and marks substitution points as
//! `{name}`. Braces that do not enclose a known name are left untouched, so
//! JSON examples inside a template need no escaping.

use serde::{Deserialize, Serialize};

/// A prompt template with a version tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Version tag, e.g. "claims-v1"
    pub version: String,

    /// Template text with `{name}` placeholders
    pub text: String,
}

impl PromptTemplate {
    /// Create a template
    pub fn new(version: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            text: text.into(),
        }
    }

    /// Substitute `vars` into the template in a single pass.
    ///
    /// Substituted values are never rescanned, so a value containing
    /// `{name}` is inserted literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use factcheck_domain::prompt::PromptTemplate;
    ///
    /// let template = PromptTemplate::new("v1", r#"Say {word} as {"json": true}"#);
    /// assert_eq!(
    ///     template.render(&[("word", "{word}")]),
    ///     r#"Say {word} as {"json": true}"#
    /// );
    /// ```
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];

            let substitution = after_open.find('}').and_then(|close| {
                let name = &after_open[..close];
                vars.iter()
                    .find(|(var, _)| *var == name)
                    .map(|(_, value)| (*value, close))
            });

            match substitution {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after_open[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after_open;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Names from `required` that do not appear as `{name}` in the template
    pub fn missing_placeholders<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|name| !self.text.contains(&format!("{{{}}}", name)))
            .copied()
            .collect()
    }
}
