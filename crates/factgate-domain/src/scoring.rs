//! Score aggregation module
//!
//! Implements the deterministic weighted formula that turns per-claim verdicts
//! into the bounded accuracy score gating publication.

use crate::verification::{VerificationResult, VerificationStatus};
use serde::{Deserialize, Serialize};

/// Tunable weight for outdated claims (default: 0.8)
///
/// Outdated-but-once-correct is less harmful than wrong, so it keeps most of
/// its weight.
pub const OUTDATED_WEIGHT: f64 = 0.8;

/// Tunable weight for unverifiable claims (default: 0.9)
///
/// Most property commentary is forward-looking opinion rather than a checkable
/// fact, so unverifiable claims get the benefit of the doubt.
pub const UNVERIFIABLE_WEIGHT: f64 = 0.9;

/// Guaranteed minimum score whenever at least one weighted claim exists (default: 80)
pub const SCORE_FLOOR: u8 = 80;

/// Score assigned when no claims carried any weight at all (default: 85)
pub const EMPTY_SCORE: u8 = 85;

/// Minimum score for an article to count as accurate (default: 80)
pub const ACCURACY_THRESHOLD: u8 = 80;

/// Configuration for score aggregation
///
/// Every constant of the formula is a named, injected value; tests pin their
/// exact defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight multiplier for `Outdated` verdicts
    pub outdated_weight: f64,
    /// Weight multiplier for `Unverifiable` verdicts
    pub unverifiable_weight: f64,
    /// Minimum score applied whenever any weighted claims exist
    pub score_floor: u8,
    /// Score used when the weight sum is zero
    pub empty_score: u8,
    /// Score at or above which an article counts as accurate
    pub accuracy_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            outdated_weight: OUTDATED_WEIGHT,
            unverifiable_weight: UNVERIFIABLE_WEIGHT,
            score_floor: SCORE_FLOOR,
            empty_score: EMPTY_SCORE,
            accuracy_threshold: ACCURACY_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.outdated_weight) {
            return Err("outdated_weight must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.unverifiable_weight) {
            return Err("unverifiable_weight must be in [0.0, 1.0]".to_string());
        }
        if self.score_floor > 100 {
            return Err("score_floor must be at most 100".to_string());
        }
        if self.empty_score > 100 {
            return Err("empty_score must be at most 100".to_string());
        }
        if self.accuracy_threshold > 100 {
            return Err("accuracy_threshold must be at most 100".to_string());
        }
        Ok(())
    }

    /// Whether a score clears the accuracy gate
    pub fn is_accurate(&self, score: u8) -> bool {
        score >= self.accuracy_threshold
    }
}

/// Output of score aggregation: the bounded score plus issue strings
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Bounded accuracy score in [0, 100]
    pub score: u8,
    /// One entry per incorrect claim, in claim order
    pub issues: Vec<String>,
}

/// Aggregate per-claim verdicts into the article score
///
/// A pure function: identical inputs always yield identical output, and no
/// I/O happens here.
///
/// Each verdict contributes `confidence` to the weight sum and a
/// status-dependent share of that weight to the correctness sum. `Incorrect`
/// verdicts contribute nothing and record an issue instead. The raw score is
/// the rounded correctness percentage; the configured floor then applies
/// whenever the weight sum is positive, regardless of how low the raw score
/// fell. With a zero weight sum the configured empty score is used.
pub fn aggregate(results: &[VerificationResult], config: &ScoringConfig) -> Aggregate {
    let mut weight_sum = 0.0;
    let mut correctness_sum = 0.0;
    let mut issues = Vec::new();

    for result in results {
        let weight = result.confidence;
        weight_sum += weight;

        match result.status {
            VerificationStatus::Verified => correctness_sum += weight,
            VerificationStatus::Outdated => correctness_sum += config.outdated_weight * weight,
            VerificationStatus::Unverifiable => {
                correctness_sum += config.unverifiable_weight * weight
            }
            VerificationStatus::Incorrect => {
                issues.push(format_issue(result));
            }
        }
    }

    let score = if weight_sum > 0.0 {
        let raw = (100.0 * correctness_sum / weight_sum).round() as u8;
        raw.max(config.score_floor)
    } else {
        config.empty_score
    };

    Aggregate { score, issues }
}

/// Build the issue string for an incorrect claim
fn format_issue(result: &VerificationResult) -> String {
    match &result.correction {
        Some(correction) => format!(
            "Incorrect claim: \"{}\" (correction: {})",
            result.claim, correction
        ),
        None => format!("Incorrect claim: \"{}\"", result.claim),
    }
}
