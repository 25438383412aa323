//! Configuration for the domain rule checks

use serde::{Deserialize, Serialize};

/// Configuration for the Gatekeeper's rule checks
///
/// Established once at startup and shared read-only; the validator never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Highest plausible stamp-duty rate in percent; higher mentions warn
    pub rate_ceiling_percent: f64,

    /// Lowest valid district number
    pub district_min: u32,

    /// Highest valid district number
    pub district_max: u32,

    /// District numbers inside the range that do not actually exist
    pub reserved_districts: Vec<u32>,

    /// Years strictly below this warn as potentially outdated
    pub current_year: i32,
}

impl RuleConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.rate_ceiling_percent <= 0.0 {
            return Err("rate_ceiling_percent must be positive".to_string());
        }
        if self.district_min > self.district_max {
            return Err("district_min must not exceed district_max".to_string());
        }
        if self.current_year < 1900 {
            return Err("current_year is implausibly old".to_string());
        }
        Ok(())
    }

    /// Whether a district number refers to a real district
    pub fn is_valid_district(&self, district: u32) -> bool {
        (self.district_min..=self.district_max).contains(&district)
            && !self.reserved_districts.contains(&district)
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

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rate_ceiling_percent: 60.0,
            district_min: 1,
            district_max: 28,
            reserved_districts: vec![24],
            current_year: 2025,
        }
    }
}
