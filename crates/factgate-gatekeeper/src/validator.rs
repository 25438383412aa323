//! Domain rule checks over raw article text

use crate::RuleConfig;
use regex::Regex;

/// An advisory finding for editors; never fatal, never scored
pub type ValidationWarning = String;

/// `ABSD ... N%` mentions, capturing the rate
const RATE_PATTERN: &str = r"(?i)\bABSD\b[^%.\n]*?(\d+(?:\.\d+)?)\s*%";

/// `District N` mentions, capturing the number
const DISTRICT_PATTERN: &str = r"(?i)\bdistrict\s+(\d{1,3})\b";

/// Bare 4-digit years
const YEAR_PATTERN: &str = r"\b((?:19|20)\d{2})\b";

/// The Gatekeeper runs deterministic rule checks on article text
pub struct Gatekeeper {
    config: RuleConfig,
    rate_pattern: Regex,
    district_pattern: Regex,
    year_pattern: Regex,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            rate_pattern: Regex::new(RATE_PATTERN).expect("rate pattern is statically valid"),
            district_pattern: Regex::new(DISTRICT_PATTERN)
                .expect("district pattern is statically valid"),
            year_pattern: Regex::new(YEAR_PATTERN).expect("year pattern is statically valid"),
        }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(RuleConfig::default())
    }

    /// Check article text against all domain rules
    ///
    /// Pure function of the text and the injected configuration. Text with no
    /// rule matches yields an empty list; nothing here can fail.
    pub fn validate(&self, article_text: &str) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        self.check_rates(article_text, &mut warnings);
        self.check_districts(article_text, &mut warnings);
        self.check_years(article_text, &mut warnings);
        warnings
    }

    /// Rate sanity: stamp-duty mentions above the ceiling are almost always
    /// typos or stale drafts
    fn check_rates(&self, text: &str, warnings: &mut Vec<ValidationWarning>) {
        for captures in self.rate_pattern.captures_iter(text) {
            let Some(rate) = captures.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
                continue;
            };
            if rate > self.config.rate_ceiling_percent {
                warnings.push(format!(
                    "ABSD rate of {}% exceeds the {}% ceiling, please verify before publishing",
                    rate, self.config.rate_ceiling_percent
                ));
            }
        }
    }

    /// District numbering: one warning per offending number, first-seen order
    fn check_districts(&self, text: &str, warnings: &mut Vec<ValidationWarning>) {
        let mut flagged = Vec::new();
        for captures in self.district_pattern.captures_iter(text) {
            let Some(district) = captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok())
            else {
                continue;
            };
            if !self.config.is_valid_district(district) && !flagged.contains(&district) {
                flagged.push(district);
                warnings.push(format!(
                    "District {} does not exist, valid districts are {} to {}",
                    district, self.config.district_min, self.config.district_max
                ));
            }
        }
    }

    /// Temporal staleness: one warning per distinct past year, first-seen order
    fn check_years(&self, text: &str, warnings: &mut Vec<ValidationWarning>) {
        let mut flagged = Vec::new();
        for captures in self.year_pattern.captures_iter(text) {
            let Some(year) = captures.get(1).and_then(|m| m.as_str().parse::<i32>().ok()) else {
                continue;
            };
            if year < self.config.current_year && !flagged.contains(&year) {
                flagged.push(year);
                warnings.push(format!(
                    "Article mentions {}, content may reference outdated data",
                    year
                ));
            }
        }
    }
}
