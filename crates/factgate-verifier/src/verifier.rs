//! Core ClaimVerifier implementation

use crate::config::{ReferenceFacts, VerifierConfig};
use crate::error::VerifierError;
use crate::parser::parse_verification_response;
use crate::prompt::PromptBuilder;
use factgate_domain::traits::LlmProvider;
use factgate_domain::{Claim, VerificationResult, VerificationStatus};
use factgate_llm::Decoded;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The ClaimVerifier classifies claims against the oracle
pub struct ClaimVerifier<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: VerifierConfig,
    reference: ReferenceFacts,
}

impl<L> ClaimVerifier<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new ClaimVerifier
    pub fn new(provider: Arc<L>, config: VerifierConfig, reference: ReferenceFacts) -> Self {
        Self {
            provider,
            config,
            reference,
        }
    }

    /// Verify all claims in one batched oracle call
    ///
    /// An empty claim list short-circuits with no oracle call. A transport
    /// failure or timeout is returned as an error. A received-but-undecodable
    /// response synthesizes one `Unverifiable` verdict per claim instead of
    /// failing.
    pub async fn verify(
        &self,
        claims: &[Claim],
        article_context: &str,
    ) -> Result<Vec<VerificationResult>, VerifierError> {
        if claims.is_empty() {
            debug!("No claims to verify, skipping oracle call");
            return Ok(Vec::new());
        }

        info!("Verifying {} claims in one batched call", claims.len());

        let context = truncate_chars(article_context, self.config.max_context_chars);
        let prompt = PromptBuilder::new(claims, context, &self.reference).build();

        debug!("Prompt length: {} chars", prompt.len());

        let raw = timeout(
            self.config.verification_timeout(),
            self.call_oracle(&prompt),
        )
        .await
        .map_err(|_| VerifierError::Timeout)??;

        debug!("Oracle response length: {} chars", raw.len());

        match parse_verification_response(&raw) {
            Decoded::Parsed(results) => {
                info!("Oracle returned {} verdicts", results.len());
                Ok(results)
            }
            Decoded::Degraded(reason) => {
                warn!(
                    "Verification response unusable ({}), marking all {} claims unverifiable",
                    reason,
                    claims.len()
                );
                Ok(self.degraded_results(claims))
            }
        }
    }

    /// One `Unverifiable` verdict per claim, used when the response was
    /// received but could not be decoded
    fn degraded_results(&self, claims: &[Claim]) -> Vec<VerificationResult> {
        claims
            .iter()
            .map(|claim| VerificationResult {
                claim: claim.as_str().to_string(),
                status: VerificationStatus::Unverifiable,
                source: Some(self.config.degraded_source.clone()),
                correction: None,
                confidence: self.config.degraded_confidence,
            })
            .collect()
    }

    /// Call the oracle provider
    async fn call_oracle(&self, prompt: &str) -> Result<String, VerifierError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // The provider trait is synchronous; run it off the async worker
        tokio::task::spawn_blocking(move || {
            provider
                .generate(&prompt)
                .map_err(|e| VerifierError::Oracle(e.to_string()))
        })
        .await
        .map_err(|e| VerifierError::Oracle(format!("Task join error: {}", e)))?
    }
}

/// Truncate to a character-bounded prefix without splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
