//! Deterministic local claim extraction
//!
//! Used when the oracle's extraction response cannot be decoded. Splits the
//! article into sentence-like fragments and keeps the ones that look like
//! checkable property facts. Makes zero oracle calls.

use crate::config::ExtractorConfig;
use factgate_domain::Claim;
use regex::Regex;

/// Fragments must match this to count as a candidate claim: percentages,
/// dollar amounts, regulatory terms, district mentions, or 4-digit years.
const SIGNAL_PATTERN: &str = r"(?ix)
    \d+(?:\.\d+)?\s*%
    | \$\s?[\d,]+(?:\.\d+)?
    | \b(?:absd|bsd|ssd|ltv|tdsr|stamp\ duty|loan-to-value|cooling\ measure)\b
    | \bdistrict\s+\d{1,2}\b
    | \b(?:19|20)\d{2}\b
";

/// Fragment boundary: terminal punctuation followed by whitespace or the end
/// of the text, so decimals like 3.5% survive the split.
const BOUNDARY_PATTERN: &str = r"[.!?]+(?:\s+|$)";

/// Sentence-splitting extractor with a numeric/domain-keyword filter
pub struct FallbackExtractor {
    signal: Regex,
    boundary: Regex,
}

impl FallbackExtractor {
    /// Compile the fragment patterns
    pub fn new() -> Self {
        Self {
            signal: Regex::new(SIGNAL_PATTERN).expect("signal pattern is statically valid"),
            boundary: Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is statically valid"),
        }
    }

    /// Extract claims from article text without the oracle
    pub fn extract(&self, text: &str, config: &ExtractorConfig) -> Vec<Claim> {
        self.boundary
            .split(text)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty() && self.signal.is_match(fragment))
            .map(Claim::new)
            .filter(|claim| claim.len_chars() >= config.min_claim_chars)
            .take(config.max_claims)
            .collect()
    }
}

impl Default for FallbackExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<Claim> {
        FallbackExtractor::new().extract(text, &ExtractorConfig::default())
    }

    #[test]
    fn test_keeps_percentage_sentences() {
        let claims = extract(
            "ABSD for foreigners was raised to 60%. The weather has been lovely lately.",
        );
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].as_str(), "ABSD for foreigners was raised to 60%");
    }

    #[test]
    fn test_decimal_rates_survive_splitting() {
        let claims = extract("The buyer's stamp duty tops out at 6.5% for homes. Nothing else here");
        assert_eq!(claims.len(), 1);
        assert!(claims[0].as_str().contains("6.5%"));
    }

    #[test]
    fn test_keeps_dollar_amounts() {
        let claims = extract("The average launch price hit $2,800 psf last quarter! Nice view though.");
        assert_eq!(claims.len(), 1);
        assert!(claims[0].as_str().contains("$2,800"));
    }

    #[test]
    fn test_keeps_regulatory_terms_and_districts() {
        let claims = extract(
            "The LTV limit stays at 75 for first loans. District 9 remains the priciest area. Buyers love it.",
        );
        assert_eq!(claims.len(), 2);
        assert!(claims[0].as_str().contains("LTV"));
        assert!(claims[1].as_str().contains("District 9"));
    }

    #[test]
    fn test_keeps_year_stamped_sentences() {
        let claims = extract("Cooling measures arrived in April 2023. Some people were surprised.");
        assert_eq!(claims.len(), 1);
        assert!(claims[0].as_str().contains("2023"));
    }

    #[test]
    fn test_drops_short_fragments() {
        let claims = extract("Up 5%. The index rose five percent across 2024 according to the board.");
        // "Up 5%" matches the signal pattern but is under the length floor
        assert_eq!(claims.len(), 1);
        assert!(claims[0].as_str().contains("2024"));
    }

    #[test]
    fn test_caps_at_max_claims() {
        let text = (0..40)
            .map(|i| format!("Launch number {} sold for $1,{}00,000 last month.", i, i % 10))
            .collect::<Vec<_>>()
            .join(" ");
        let claims = extract(&text);
        assert_eq!(claims.len(), 15);
    }

    #[test]
    fn test_no_signal_yields_empty() {
        let claims = extract("Buyers enjoy sea views. Agents recommend visiting show flats early.");
        assert!(claims.is_empty());
    }
}
