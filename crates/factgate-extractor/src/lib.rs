//! Factgate Claim Extractor
//!
//! Derives a bounded list of verifiable claims from article text. The oracle
//! does the heavy lifting; when its response cannot be decoded, a
//! deterministic local extractor takes over so extraction never fails on a
//! reachable oracle.
//!
//! # Flow
//!
//! 1. Truncate article text to a bounded prefix
//! 2. One oracle call asking for up to `max_claims` claims as a JSON array
//! 3. Decode; on a degraded payload, fall back to sentence-splitting with a
//!    numeric/domain-keyword filter
//!
//! Transport failures propagate; parse failures never do.

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod fallback;
mod parser;
mod prompt;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::ClaimExtractor;
pub use fallback::FallbackExtractor;
pub use parser::parse_claim_response;
pub use prompt::PromptBuilder;
