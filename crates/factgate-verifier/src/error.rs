//! Error types for the verifier

use thiserror::Error;

/// Errors that can occur during verification
///
/// Only transport-class failures appear here. A received-but-undecodable
/// response is handled by degraded mode and never becomes an error.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Oracle call could not be completed
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// Verification timed out waiting on the oracle
    #[error("Verification timeout")]
    Timeout,
}
