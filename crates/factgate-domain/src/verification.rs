//! Verification verdicts and the article-level fact-check result

use std::fmt;

/// Verdict classification for a single claim
///
/// This is a closed set: the verifier maps anything else the oracle emits to
/// a skipped entry or a degraded result, never to a new variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// The claim matches current, known-good information
    Verified,
    /// The claim contradicts current information
    Incorrect,
    /// The claim was once correct but has since been superseded
    Outdated,
    /// The claim could not be checked against any source
    Unverifiable,
}

impl VerificationStatus {
    /// Canonical wire string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::Incorrect => "incorrect",
            VerificationStatus::Outdated => "outdated",
            VerificationStatus::Unverifiable => "unverifiable",
        }
    }

    /// Parse a wire string, tolerating surrounding whitespace and case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verified" => Some(VerificationStatus::Verified),
            "incorrect" => Some(VerificationStatus::Incorrect),
            "outdated" => Some(VerificationStatus::Outdated),
            "unverifiable" => Some(VerificationStatus::Unverifiable),
            _ => None,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict for a single claim, as produced by the verifier
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    /// The claim text, echoed back verbatim
    pub claim: String,

    /// Verdict classification
    pub status: VerificationStatus,

    /// Source the verdict is based on, when one was cited
    pub source: Option<String>,

    /// Corrected statement, when the claim was found incorrect
    pub correction: Option<String>,

    /// Verifier certainty in the verdict, in [0.0, 1.0]
    pub confidence: f64,
}

impl VerificationResult {
    /// Validate the result's invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.claim.is_empty() {
            return Err("claim is empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "confidence {} out of range [0.0, 1.0]",
                self.confidence
            ));
        }
        Ok(())
    }
}

/// Article-level verdict returned to the publication workflow
///
/// Invariant: `is_accurate == (score >= accuracy threshold)`, with the
/// threshold injected through [`crate::ScoringConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct FactCheckResult {
    /// Whether the article clears the accuracy gate
    pub is_accurate: bool,

    /// Bounded accuracy score in [0, 100]
    pub score: u8,

    /// Human-readable problems found, in claim order
    pub issues: Vec<String>,

    /// Per-claim verdicts, in claim order
    pub verified_facts: Vec<VerificationResult>,

    /// Deduplicated sources cited across all verdicts, first-seen order
    pub sources: Vec<String>,
}
