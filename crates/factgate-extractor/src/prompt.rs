//! Oracle prompt engineering for claim extraction

/// Builds prompts asking the oracle for verifiable claims
pub struct PromptBuilder {
    text: String,
    title: Option<String>,
    max_claims: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder for the (already truncated) article text
    pub fn new(text: impl Into<String>, max_claims: usize) -> Self {
        Self {
            text: text.into(),
            title: None,
            max_claims,
        }
    }

    /// Attach the article title as extra context
    pub fn with_title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_string);
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Extract up to {} distinct, verifiable factual claims from the article below.\n\n",
            self.max_claims
        ));
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        if let Some(title) = &self.title {
            prompt.push_str(&format!("Article title: {}\n\n", title));
        }

        prompt.push_str("Article text:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Prioritize claims in this order:
1. Stamp duty and tax rates (ABSD, BSD, SSD percentages)
2. Loan-to-value limits and other financing rules
3. Absolute prices, price ranges, and price changes
4. Government policy statements and cooling measures
5. District numbers and boundary descriptions
6. Project, developer, and launch facts
7. Dates and timelines

Rules:
- Each claim must be a single self-contained factual statement
- Quote figures exactly as they appear in the article
- Skip opinions, predictions, and marketing language
- Skip anything that cannot be checked against a public source"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON array of strings only, no additional text):
["claim one", "claim two"]

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text() {
        let prompt = PromptBuilder::new("ABSD for foreigners is 60% as of 2023.", 15).build();
        assert!(prompt.contains("ABSD for foreigners is 60% as of 2023."));
    }

    #[test]
    fn test_prompt_includes_claim_limit() {
        let prompt = PromptBuilder::new("Some text", 15).build();
        assert!(prompt.contains("up to 15 distinct"));
    }

    #[test]
    fn test_prompt_includes_title_when_present() {
        let prompt = PromptBuilder::new("Some text", 15)
            .with_title(Some("District 10 Market Outlook"))
            .build();
        assert!(prompt.contains("Article title: District 10 Market Outlook"));
    }

    #[test]
    fn test_prompt_omits_title_when_absent() {
        let prompt = PromptBuilder::new("Some text", 15).with_title(None).build();
        assert!(!prompt.contains("Article title:"));
    }

    #[test]
    fn test_prompt_includes_priorities_and_format() {
        let prompt = PromptBuilder::new("Some text", 15).build();
        assert!(prompt.contains("Stamp duty and tax rates"));
        assert!(prompt.contains("Loan-to-value limits"));
        assert!(prompt.contains("JSON array of strings"));
    }
}
