//! Decode freeform oracle text into typed payloads
//!
//! The oracle is a text generator, not a JSON emitter: responses arrive with
//! markdown fences, surrounding prose, stray control characters, and raw
//! newlines inside string literals. This module owns the raw-text-to-typed
//! boundary and reports the outcome as a tagged value, so the degraded-mode
//! contract can be unit-tested without any network in play.

use serde::de::DeserializeOwned;

/// Outcome of decoding an oracle response
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The response contained a structurally valid payload
    Parsed(T),
    /// The response could not be decoded; the reason is kept for logging
    Degraded(String),
}

impl<T> Decoded<T> {
    /// Whether decoding failed
    pub fn is_degraded(&self) -> bool {
        matches!(self, Decoded::Degraded(_))
    }
}

/// Decode an oracle response into `T`
///
/// Sanitation happens in three steps before structural parsing: stray ASCII
/// control characters are stripped, the JSON block is located inside fences
/// or prose, and literal newlines/carriage returns/tabs inside string
/// literals are re-escaped.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Decoded<T> {
    let stripped = strip_control_chars(raw);
    let block = extract_json_block(&stripped);
    let clean = escape_literal_whitespace(&block);

    match serde_json::from_str(&clean) {
        Ok(value) => Decoded::Parsed(value),
        Err(e) => Decoded::Degraded(format!("JSON parse error: {}", e)),
    }
}

/// Strip ASCII control characters (0x00-0x08, 0x0B, 0x0C, 0x0E-0x1F, 0x7F)
///
/// Tab, newline, and carriage return survive this pass; they are handled by
/// [`escape_literal_whitespace`] instead.
fn strip_control_chars(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_ascii_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Locate the JSON payload inside the response
///
/// Handles markdown code fences and leading/trailing prose. Falls back to the
/// trimmed response when no bracket structure is found; the parse step then
/// reports the failure.
fn extract_json_block(response: &str) -> String {
    let trimmed = response.trim();

    let unfenced = if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return trimmed.to_string();
        }
        // Skip first line (```json or ```) and the closing fence
        lines[1..lines.len().saturating_sub(1)].join("\n")
    } else {
        trimmed.to_string()
    };

    let Some(start) = unfenced.find(['[', '{']) else {
        return unfenced;
    };
    let closer = if unfenced.as_bytes()[start] == b'[' {
        ']'
    } else {
        '}'
    };
    match unfenced.rfind(closer) {
        Some(end) if end > start => unfenced[start..=end].to_string(),
        _ => unfenced,
    }
}

/// Re-escape literal whitespace characters inside JSON string literals
///
/// Raw newlines inside strings are the most common way the oracle breaks
/// byte-exact JSON. Whitespace between tokens is left alone.
fn escape_literal_whitespace(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
            continue;
        }

        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' => {
                out.push(c);
                escaped = true;
            }
            '"' => {
                out.push(c);
                in_string = false;
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_decode_plain_array() {
        let decoded: Decoded<Vec<String>> = decode_json(r#"["claim one", "claim two"]"#);
        assert_eq!(
            decoded,
            Decoded::Parsed(vec!["claim one".to_string(), "claim two".to_string()])
        );
    }

    #[test]
    fn test_decode_markdown_wrapped() {
        let response = "```json\n[\"wrapped claim\"]\n```";
        let decoded: Decoded<Vec<String>> = decode_json(response);
        assert_eq!(decoded, Decoded::Parsed(vec!["wrapped claim".to_string()]));
    }

    #[test]
    fn test_decode_fence_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        let decoded: Decoded<Value> = decode_json(response);
        assert!(matches!(decoded, Decoded::Parsed(_)));
    }

    #[test]
    fn test_decode_payload_surrounded_by_prose() {
        let response = "Here are the claims I found:\n[\"a prose-wrapped claim\"]\nLet me know!";
        let decoded: Decoded<Vec<String>> = decode_json(response);
        assert_eq!(
            decoded,
            Decoded::Parsed(vec!["a prose-wrapped claim".to_string()])
        );
    }

    #[test]
    fn test_decode_strips_control_characters() {
        let response = "[\"control\u{0000}\u{0007} chars\u{007f} removed\"]";
        let decoded: Decoded<Vec<String>> = decode_json(response);
        assert_eq!(
            decoded,
            Decoded::Parsed(vec!["control chars removed".to_string()])
        );
    }

    #[test]
    fn test_decode_escapes_raw_newline_in_string() {
        let response = "[\"line one\nline two\"]";
        let decoded: Decoded<Vec<String>> = decode_json(response);
        assert_eq!(
            decoded,
            Decoded::Parsed(vec!["line one\nline two".to_string()])
        );
    }

    #[test]
    fn test_decode_escapes_raw_tab_in_string() {
        let response = "{\"claim\": \"a\tb\"}";
        let decoded: Decoded<Value> = decode_json(response);
        match decoded {
            Decoded::Parsed(value) => assert_eq!(value["claim"], "a\tb"),
            Decoded::Degraded(reason) => panic!("unexpected degraded: {}", reason),
        }
    }

    #[test]
    fn test_decode_leaves_existing_escapes_alone() {
        let response = r#"["already\nescaped"]"#;
        let decoded: Decoded<Vec<String>> = decode_json(response);
        assert_eq!(
            decoded,
            Decoded::Parsed(vec!["already\nescaped".to_string()])
        );
    }

    #[test]
    fn test_decode_not_json_degrades() {
        let decoded: Decoded<Vec<String>> = decode_json("I could not find any claims, sorry.");
        assert!(decoded.is_degraded());
    }

    #[test]
    fn test_decode_wrong_shape_degrades() {
        // Valid JSON, wrong type for the target
        let decoded: Decoded<Vec<String>> = decode_json(r#"{"claims": []}"#);
        assert!(decoded.is_degraded());
    }

    #[test]
    fn test_decode_truncated_payload_degrades() {
        let decoded: Decoded<Vec<String>> = decode_json(r#"["cut off mid"#);
        assert!(decoded.is_degraded());
    }

    #[test]
    fn test_degraded_reason_is_kept() {
        let decoded: Decoded<Vec<String>> = decode_json("not json at all");
        match decoded {
            Decoded::Degraded(reason) => assert!(reason.contains("JSON parse error")),
            Decoded::Parsed(_) => panic!("expected degraded"),
        }
    }

    #[test]
    fn test_extract_json_block_plain() {
        assert_eq!(extract_json_block(r#"{"key": 1}"#), r#"{"key": 1}"#);
    }

    #[test]
    fn test_extract_json_block_object_in_prose() {
        let block = extract_json_block("Result: {\"verifications\": []} Done.");
        assert_eq!(block, r#"{"verifications": []}"#);
    }
}
