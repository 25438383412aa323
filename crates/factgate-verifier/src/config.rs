//! Configuration and anchor facts for the verifier

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Confidence assigned to every degraded-mode verdict (default: 0.5)
pub const DEGRADED_CONFIDENCE: f64 = 0.5;

/// Source label carried by every degraded-mode verdict
pub const DEGRADED_SOURCE: &str = "verification unavailable";

/// Configuration for the claim verifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Maximum time for the single batched oracle call (seconds)
    pub verification_timeout_secs: u64,

    /// Article context length (characters) embedded in the prompt
    pub max_context_chars: usize,

    /// Confidence for verdicts synthesized in degraded mode
    pub degraded_confidence: f64,

    /// Source label for verdicts synthesized in degraded mode
    pub degraded_source: String,
}

impl VerifierConfig {
    /// Get the verification timeout as a Duration
    pub fn verification_timeout(&self) -> Duration {
        Duration::from_secs(self.verification_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.verification_timeout_secs == 0 {
            return Err("verification_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.degraded_confidence) {
            return Err("degraded_confidence must be in [0.0, 1.0]".to_string());
        }
        if self.degraded_source.is_empty() {
            return Err("degraded_source must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            verification_timeout_secs: 60,
            max_context_chars: 1_500,
            degraded_confidence: DEGRADED_CONFIDENCE,
            degraded_source: DEGRADED_SOURCE.to_string(),
        }
    }
}

/// A named rate in the anchor table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEntry {
    /// Who or what the rate applies to
    pub label: String,
    /// Rate in percent
    pub rate_percent: f64,
}

/// Known-current reference facts embedded in every verification prompt
///
/// Anchoring the oracle on the current rate table and valid numeric ranges
/// keeps it from inventing verdicts about figures it half-remembers. Updated
/// by operators when policy changes; injected, never hard-coded at call
/// sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceFacts {
    /// Current additional buyer's stamp duty table
    pub absd_rates: Vec<RateEntry>,

    /// Lowest valid district number
    pub district_min: u32,

    /// Highest valid district number
    pub district_max: u32,

    /// Maximum loan-to-value for a first housing loan, in percent
    pub max_ltv_percent: f64,
}

impl ReferenceFacts {
    /// Render the facts as prompt-ready lines
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Current ABSD rates:\n");
        for entry in &self.absd_rates {
            out.push_str(&format!("- {}: {}%\n", entry.label, entry.rate_percent));
        }
        out.push_str(&format!(
            "Valid district numbers: {} to {}\n",
            self.district_min, self.district_max
        ));
        out.push_str(&format!(
            "Maximum LTV for a first housing loan: {}%\n",
            self.max_ltv_percent
        ));
        out
    }
}

impl Default for ReferenceFacts {
    fn default() -> Self {
        let rate = |label: &str, rate_percent: f64| RateEntry {
            label: label.to_string(),
            rate_percent,
        };
        Self {
            absd_rates: vec![
                rate("Singapore citizens, first property", 0.0),
                rate("Singapore citizens, second property", 20.0),
                rate("Singapore citizens, third and subsequent", 30.0),
                rate("Permanent residents, first property", 5.0),
                rate("Permanent residents, second property", 30.0),
                rate("Foreigners", 60.0),
                rate("Entities", 65.0),
            ],
            district_min: 1,
            district_max: 28,
            max_ltv_percent: 75.0,
        }
    }
}
