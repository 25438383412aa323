//! Oracle prompt engineering for batched claim verification

use crate::config::ReferenceFacts;
use factgate_domain::Claim;

/// Builds the single batched verification prompt
pub struct PromptBuilder<'a> {
    claims: &'a [Claim],
    article_context: &'a str,
    facts: &'a ReferenceFacts,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder over the claims and (already truncated)
    /// article context
    pub fn new(claims: &'a [Claim], article_context: &'a str, facts: &'a ReferenceFacts) -> Self {
        Self {
            claims,
            article_context,
            facts,
        }
    }

    /// Build the complete verification prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(VERIFICATION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Reference facts (treat these as current and authoritative):\n");
        prompt.push_str(&self.facts.render());
        prompt.push('\n');

        prompt.push_str("Claims to verify:\n");
        for (idx, claim) in self.claims.iter().enumerate() {
            prompt.push_str(&format!("{}. {}\n", idx + 1, claim.as_str()));
        }
        prompt.push('\n');

        if !self.article_context.is_empty() {
            prompt.push_str("Article context:\n");
            prompt.push_str("---\n");
            prompt.push_str(self.article_context);
            prompt.push_str("\n---\n\n");
        }

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const VERIFICATION_INSTRUCTIONS: &str = r#"Verify each claim below against current, publicly known information about the Singapore property market.

For every claim, decide exactly one status:
- "verified": matches current information
- "incorrect": contradicts current information; supply a correction
- "outdated": was correct once but has since changed
- "unverifiable": cannot be checked against any public source

Echo each claim back verbatim. Cite a source where you can. Report your
certainty as a confidence between 0.0 and 1.0."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{
  "verifications": [
    {
      "claim": "exact claim text",
      "status": "verified|incorrect|outdated|unverifiable",
      "source": "optional source name",
      "correction": "optional corrected statement",
      "confidence": 0.0
    }
  ]
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_numbers_claims_in_order() {
        let claims = vec![
            Claim::new("ABSD for foreigners is 60%"),
            Claim::new("District 10 covers Bukit Timah"),
        ];
        let facts = ReferenceFacts::default();
        let prompt = PromptBuilder::new(&claims, "", &facts).build();

        assert!(prompt.contains("1. ABSD for foreigners is 60%"));
        assert!(prompt.contains("2. District 10 covers Bukit Timah"));
    }

    #[test]
    fn test_prompt_embeds_reference_facts() {
        let claims = vec![Claim::new("ABSD for foreigners is 60%")];
        let facts = ReferenceFacts::default();
        let prompt = PromptBuilder::new(&claims, "", &facts).build();

        assert!(prompt.contains("Foreigners: 60%"));
        assert!(prompt.contains("Valid district numbers: 1 to 28"));
    }

    #[test]
    fn test_prompt_includes_context_when_present() {
        let claims = vec![Claim::new("ABSD for foreigners is 60%")];
        let facts = ReferenceFacts::default();
        let prompt = PromptBuilder::new(&claims, "The article discussed cooling measures.", &facts)
            .build();

        assert!(prompt.contains("Article context:"));
        assert!(prompt.contains("cooling measures"));
    }

    #[test]
    fn test_prompt_omits_context_section_when_empty() {
        let claims = vec![Claim::new("ABSD for foreigners is 60%")];
        let facts = ReferenceFacts::default();
        let prompt = PromptBuilder::new(&claims, "", &facts).build();
        assert!(!prompt.contains("Article context:"));
    }

    #[test]
    fn test_prompt_requests_verifications_object() {
        let claims = vec![Claim::new("ABSD for foreigners is 60%")];
        let facts = ReferenceFacts::default();
        let prompt = PromptBuilder::new(&claims, "", &facts).build();
        assert!(prompt.contains("\"verifications\""));
        assert!(prompt.contains("verified|incorrect|outdated|unverifiable"));
    }
}
