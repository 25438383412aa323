//! Parse oracle output into claims

use crate::config::ExtractorConfig;
use factgate_domain::Claim;
use factgate_llm::{decode_json, Decoded};
use tracing::debug;

/// Parse an oracle extraction response into claims
///
/// The oracle is asked for a JSON array of strings. Claims keep their
/// response order; fragments below the minimum length are dropped and the
/// list is capped at the configured maximum. A structurally unusable
/// response is reported as `Degraded` so the caller can switch to the local
/// fallback.
pub fn parse_claim_response(raw: &str, config: &ExtractorConfig) -> Decoded<Vec<Claim>> {
    match decode_json::<Vec<String>>(raw) {
        Decoded::Parsed(candidates) => {
            let total = candidates.len();
            let claims: Vec<Claim> = candidates
                .into_iter()
                .map(Claim::new)
                .filter(|claim| claim.len_chars() >= config.min_claim_chars)
                .take(config.max_claims)
                .collect();
            debug!("Kept {} of {} claim candidates", claims.len(), total);
            Decoded::Parsed(claims)
        }
        Decoded::Degraded(reason) => Decoded::Degraded(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExtractorConfig {
        ExtractorConfig::default()
    }

    #[test]
    fn test_parse_valid_array() {
        let raw = r#"["ABSD for foreigners is 60%", "District 10 covers Bukit Timah"]"#;
        match parse_claim_response(raw, &config()) {
            Decoded::Parsed(claims) => {
                assert_eq!(claims.len(), 2);
                assert_eq!(claims[0].as_str(), "ABSD for foreigners is 60%");
            }
            Decoded::Degraded(reason) => panic!("unexpected degraded: {}", reason),
        }
    }

    #[test]
    fn test_parse_preserves_order() {
        let raw = r#"["first claim about prices", "second claim about prices", "third claim about prices"]"#;
        match parse_claim_response(raw, &config()) {
            Decoded::Parsed(claims) => {
                assert!(claims[0].as_str().starts_with("first"));
                assert!(claims[1].as_str().starts_with("second"));
                assert!(claims[2].as_str().starts_with("third"));
            }
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_drops_short_fragments() {
        let raw = r#"["too short", "this one is long enough to keep"]"#;
        match parse_claim_response(raw, &config()) {
            Decoded::Parsed(claims) => {
                assert_eq!(claims.len(), 1);
                assert_eq!(claims[0].as_str(), "this one is long enough to keep");
            }
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_caps_claim_count() {
        let candidates: Vec<String> = (0..30)
            .map(|i| format!("\"claim number {} with enough length\"", i))
            .collect();
        let raw = format!("[{}]", candidates.join(","));
        match parse_claim_response(&raw, &config()) {
            Decoded::Parsed(claims) => assert_eq!(claims.len(), 15),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_markdown_wrapped_array() {
        let raw = "```json\n[\"a fenced claim that is long enough\"]\n```";
        match parse_claim_response(raw, &config()) {
            Decoded::Parsed(claims) => assert_eq!(claims.len(), 1),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_prose_degrades() {
        let raw = "I'm sorry, I cannot find any factual claims in this article.";
        assert!(parse_claim_response(raw, &config()).is_degraded());
    }

    #[test]
    fn test_parse_wrong_shape_degrades() {
        let raw = r#"{"claims": ["not an array of strings at the top level"]}"#;
        assert!(parse_claim_response(raw, &config()).is_degraded());
    }

    #[test]
    fn test_parse_empty_array_is_parsed() {
        // An empty list is a valid answer, not a degraded one
        match parse_claim_response("[]", &config()) {
            Decoded::Parsed(claims) => assert!(claims.is_empty()),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }
}
