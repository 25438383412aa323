//! Parse oracle output into verification verdicts

use factgate_domain::{VerificationResult, VerificationStatus};
use factgate_llm::{decode_json, Decoded};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Structural shape of the oracle's verification response
#[derive(Deserialize)]
struct VerificationPayload {
    verifications: Vec<Value>,
}

/// Parse an oracle verification response into typed verdicts
///
/// `Degraded` is reported only for structural failure: no JSON payload, or a
/// payload without a `verifications` array. Individual malformed entries
/// (unknown status, missing fields) are skipped with a warning, matching how
/// the extractor treats single bad candidates. Confidence values are clamped
/// into [0, 1].
pub fn parse_verification_response(raw: &str) -> Decoded<Vec<VerificationResult>> {
    let payload = match decode_json::<VerificationPayload>(raw) {
        Decoded::Parsed(payload) => payload,
        Decoded::Degraded(reason) => return Decoded::Degraded(reason),
    };

    let mut results = Vec::new();
    for (idx, entry) in payload.verifications.iter().enumerate() {
        match parse_verification_entry(entry) {
            Ok(result) => results.push(result),
            Err(e) => warn!("Skipping verification {}: {}", idx, e),
        }
    }

    Decoded::Parsed(results)
}

/// Parse a single verification entry
fn parse_verification_entry(entry: &Value) -> Result<VerificationResult, String> {
    let obj = entry
        .as_object()
        .ok_or_else(|| "entry is not a JSON object".to_string())?;

    let claim = obj
        .get("claim")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing or invalid 'claim'".to_string())?
        .to_string();

    let status_str = obj
        .get("status")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "missing or invalid 'status'".to_string())?;
    let status = VerificationStatus::parse(status_str)
        .ok_or_else(|| format!("unknown status '{}'", status_str))?;

    let confidence = obj
        .get("confidence")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "missing or invalid 'confidence'".to_string())?
        .clamp(0.0, 1.0);

    let source = obj
        .get("source")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let correction = obj
        .get("correction")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let result = VerificationResult {
        claim,
        status,
        source,
        correction,
        confidence,
    };
    result.validate()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_response() {
        let raw = r#"{
            "verifications": [
                {
                    "claim": "ABSD for foreigners is 60%",
                    "status": "verified",
                    "source": "IRAS",
                    "confidence": 0.95
                },
                {
                    "claim": "The LTV limit is 90% for first loans",
                    "status": "incorrect",
                    "correction": "The LTV limit is 75% for first housing loans",
                    "confidence": 0.9
                }
            ]
        }"#;

        match parse_verification_response(raw) {
            Decoded::Parsed(results) => {
                assert_eq!(results.len(), 2);
                assert_eq!(results[0].status, VerificationStatus::Verified);
                assert_eq!(results[0].source.as_deref(), Some("IRAS"));
                assert_eq!(results[1].status, VerificationStatus::Incorrect);
                assert!(results[1].correction.as_deref().unwrap().contains("75%"));
            }
            Decoded::Degraded(reason) => panic!("unexpected degraded: {}", reason),
        }
    }

    #[test]
    fn test_parse_markdown_wrapped_response() {
        let raw = "```json\n{\"verifications\": [{\"claim\": \"ABSD is 60%\", \"status\": \"verified\", \"confidence\": 0.8}]}\n```";
        match parse_verification_response(raw) {
            Decoded::Parsed(results) => assert_eq!(results.len(), 1),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_skips_unknown_status() {
        let raw = r#"{
            "verifications": [
                {"claim": "claim with a bad verdict", "status": "mostly-true", "confidence": 0.9},
                {"claim": "claim with a good verdict", "status": "verified", "confidence": 0.9}
            ]
        }"#;

        match parse_verification_response(raw) {
            Decoded::Parsed(results) => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].claim, "claim with a good verdict");
            }
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_skips_missing_confidence() {
        let raw = r#"{
            "verifications": [
                {"claim": "no confidence given here", "status": "verified"}
            ]
        }"#;

        match parse_verification_response(raw) {
            Decoded::Parsed(results) => assert!(results.is_empty()),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_skips_empty_claim() {
        let raw = r#"{
            "verifications": [
                {"claim": "", "status": "verified", "confidence": 0.8}
            ]
        }"#;

        match parse_verification_response(raw) {
            Decoded::Parsed(results) => assert!(results.is_empty()),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_clamps_confidence() {
        let raw = r#"{
            "verifications": [
                {"claim": "overconfident verdict", "status": "verified", "confidence": 1.7},
                {"claim": "underconfident verdict", "status": "verified", "confidence": -0.3}
            ]
        }"#;

        match parse_verification_response(raw) {
            Decoded::Parsed(results) => {
                assert_eq!(results[0].confidence, 1.0);
                assert_eq!(results[1].confidence, 0.0);
            }
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_blank_source_becomes_none() {
        let raw = r#"{
            "verifications": [
                {"claim": "a claim with a blank source", "status": "verified", "source": "  ", "confidence": 0.8}
            ]
        }"#;

        match parse_verification_response(raw) {
            Decoded::Parsed(results) => assert_eq!(results[0].source, None),
            Decoded::Degraded(_) => panic!("expected parsed"),
        }
    }

    #[test]
    fn test_parse_prose_degrades() {
        let raw = "I was unable to verify these claims.";
        assert!(parse_verification_response(raw).is_degraded());
    }

    #[test]
    fn test_parse_missing_verifications_key_degrades() {
        let raw = r#"{"results": []}"#;
        assert!(parse_verification_response(raw).is_degraded());
    }

    #[test]
    fn test_parse_truncated_payload_degrades() {
        let raw = r#"{"verifications": [{"claim": "cut off"#;
        assert!(parse_verification_response(raw).is_degraded());
    }
}
