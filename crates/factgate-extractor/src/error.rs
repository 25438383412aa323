//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Only transport-class failures appear here. An unparseable oracle response
/// is not an error; it routes through the local fallback instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Oracle call could not be completed
    #[error("Oracle error: {0}")]
    Oracle(String),

    /// Extraction timed out waiting on the oracle
    #[error("Extraction timeout")]
    Timeout,
}
