//! Configuration for the claim extractor

use factgate_domain::{MAX_CLAIMS_PER_RUN, MIN_CLAIM_CHARS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the claim extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Article prefix length (characters) sent to the oracle
    pub max_context_chars: usize,

    /// Maximum claims kept per extraction
    pub max_claims: usize,

    /// Minimum claim length (characters, after trimming)
    pub min_claim_chars: usize,

    /// Maximum time for the single oracle call (seconds)
    pub extraction_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_context_chars == 0 {
            return Err("max_context_chars must be greater than 0".to_string());
        }
        if self.max_claims == 0 {
            return Err("max_claims must be greater than 0".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Aggressive preset: smaller context and shorter timeout for cheap runs
    pub fn aggressive() -> Self {
        Self {
            max_context_chars: 1_500,
            max_claims: 10,
            min_claim_chars: MIN_CLAIM_CHARS,
            extraction_timeout_secs: 20,
        }
    }

    /// Lenient preset: larger context and longer timeout for better coverage
    pub fn lenient() -> Self {
        Self {
            max_context_chars: 6_000,
            max_claims: MAX_CLAIMS_PER_RUN,
            min_claim_chars: MIN_CLAIM_CHARS,
            extraction_timeout_secs: 120,
        }
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

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_context_chars: 3_000,
            max_claims: MAX_CLAIMS_PER_RUN,
            min_claim_chars: MIN_CLAIM_CHARS,
            extraction_timeout_secs: 45,
        }
    }
}
