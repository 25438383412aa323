//! Factgate Claim Verifier
//!
//! Sends extracted claims to the oracle in one batched request and maps the
//! response onto typed per-claim verdicts. The prompt carries a small anchor
//! context of known-current reference facts to reduce hallucinated verdicts.
//!
//! The key failure contract lives here: a response that was received but
//! cannot be decoded never fails the pipeline. Every submitted claim instead
//! gets an `Unverifiable` verdict at the configured degraded confidence, so a
//! reachable oracle always yields a scorable result. Only transport failures
//! propagate.

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod prompt;
mod verifier;

pub use config::{ReferenceFacts, VerifierConfig, DEGRADED_CONFIDENCE, DEGRADED_SOURCE};
pub use error::VerifierError;
pub use parser::parse_verification_response;
pub use prompt::PromptBuilder;
pub use verifier::ClaimVerifier;
