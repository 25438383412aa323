//! Claim module - the unit of work flowing through the pipeline

use std::fmt;

/// Maximum number of claims processed for a single article run
///
/// The extractor caps both the oracle request and its local fallback at this
/// many claims; everything downstream can rely on the bound.
pub const MAX_CLAIMS_PER_RUN: usize = 15;

/// Minimum claim length in characters, measured after trimming
///
/// Fragments shorter than this are not worth sending to the oracle; they are
/// almost always sentence shrapnel from the fallback splitter.
pub const MIN_CLAIM_CHARS: usize = 10;

/// A single verifiable factual statement extracted from article text
///
/// Claims are plain text, kept in extraction order. Length and count limits
/// are enforced by the extractor using [`MAX_CLAIMS_PER_RUN`] and
/// [`MIN_CLAIM_CHARS`] as defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim(String);

impl Claim {
    /// Create a claim from raw text, trimming surrounding whitespace
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    /// The claim text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character length of the claim text
    pub fn len_chars(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
