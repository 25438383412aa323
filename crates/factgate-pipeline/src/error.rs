//! Error types for the pipeline

use std::fmt;
use thiserror::Error;

/// Pipeline stage, used for logging and failure context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Deriving claims from article text
    Extracting,
    /// Classifying claims against the oracle
    Verifying,
    /// Aggregating verdicts into the score
    Scoring,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extracting => "extracting",
            Stage::Verifying => "verifying",
            Stage::Scoring => "scoring",
        };
        write!(f, "{}", name)
    }
}

/// Errors that fail a whole `check_article` call
///
/// Parse problems never appear here; they are absorbed by the extractor's
/// local fallback and the verifier's degraded mode. A caller seeing this type
/// knows the pipeline could not run, as opposed to having run degraded.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Oracle credentials or component configuration unusable; raised before
    /// any call is attempted
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Oracle transport failure; the invocation is lost
    #[error("Oracle transport failure while {stage}: {message}")]
    Transport {
        /// Stage that was in flight when the failure happened
        stage: Stage,
        /// Underlying failure description
        message: String,
    },
}

impl PipelineError {
    /// Build a transport error from any displayable failure
    pub(crate) fn transport(stage: Stage, err: impl fmt::Display) -> Self {
        PipelineError::Transport {
            stage,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_names_stage() {
        let err = PipelineError::transport(Stage::Verifying, "connection refused");
        assert_eq!(
            err.to_string(),
            "Oracle transport failure while verifying: connection refused"
        );
    }
}
