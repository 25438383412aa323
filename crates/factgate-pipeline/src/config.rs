//! Aggregated configuration for one pipeline deployment

use factgate_domain::ScoringConfig;
use factgate_extractor::ExtractorConfig;
use factgate_gatekeeper::RuleConfig;
use factgate_verifier::{ReferenceFacts, VerifierConfig};
use serde::{Deserialize, Serialize};

/// All pipeline settings in one immutable value
///
/// Built once at startup and shared read-only across concurrent invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Claim extraction settings
    pub extractor: ExtractorConfig,

    /// Claim verification settings
    pub verifier: VerifierConfig,

    /// Score aggregation constants
    pub scoring: ScoringConfig,

    /// Domain rule thresholds
    pub rules: RuleConfig,

    /// Anchor facts embedded in verification prompts
    pub reference: ReferenceFacts,
}

impl PipelineConfig {
    /// Validate every component configuration
    pub fn validate(&self) -> Result<(), String> {
        self.extractor.validate()?;
        self.verifier.validate()?;
        self.scoring.validate()?;
        self.rules.validate()?;
        Ok(())
    }

    /// Load configuration from TOML string; missing sections use defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
