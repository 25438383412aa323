//! Factgate Pipeline
//!
//! The public face of the fact-verification subsystem. Sequences the claim
//! extractor, the batched verifier, and the score aggregator into one call,
//! and exposes the oracle-independent domain rule checks alongside it.
//!
//! # Contract
//!
//! `check_article` either runs end to end and returns a complete
//! [`FactCheckResult`], possibly at degraded confidence, or it fails entirely
//! on a transport/configuration error. There are no partial results, and a
//! reachable oracle always yields a scorable verdict.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use factgate_llm::MockProvider;
//! use factgate_pipeline::{FactChecker, PipelineConfig};
//!
//! # async fn demo() {
//! let provider = Arc::new(MockProvider::new("[]"));
//! let checker = FactChecker::new(provider, PipelineConfig::default()).unwrap();
//! let result = checker.check_article("Article text", None).await.unwrap();
//! assert!(result.is_accurate);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;

pub use config::PipelineConfig;
pub use error::{PipelineError, Stage};
pub use orchestrator::FactChecker;

// Re-exports so callers need only this crate
pub use factgate_domain::{FactCheckResult, VerificationResult, VerificationStatus};
pub use factgate_gatekeeper::ValidationWarning;
