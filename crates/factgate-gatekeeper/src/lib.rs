//! Factgate Gatekeeper
//!
//! Deterministic, oracle-independent rule checks over raw article text:
//! tax-rate sanity, district numbering, and temporal staleness.
//!
//! Findings are advisory warnings for editors. They never feed the accuracy
//! score and never fail a pipeline run; text with no matches simply yields an
//! empty list.
//!
//! # Examples
//!
//! ```
//! use factgate_gatekeeper::Gatekeeper;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let warnings = gatekeeper.validate("Prices in District 24 keep climbing.");
//! assert_eq!(warnings.len(), 1);
//! ```

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::RuleConfig;
pub use validator::{Gatekeeper, ValidationWarning};
