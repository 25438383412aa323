//! Core ClaimExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fallback::FallbackExtractor;
use crate::parser::parse_claim_response;
use crate::prompt::PromptBuilder;
use factgate_domain::traits::LlmProvider;
use factgate_domain::Claim;
use factgate_llm::Decoded;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The ClaimExtractor derives verifiable claims from article text
pub struct ClaimExtractor<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    fallback: FallbackExtractor,
    config: ExtractorConfig,
}

impl<L> ClaimExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new ClaimExtractor
    pub fn new(provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self {
            provider,
            fallback: FallbackExtractor::new(),
            config,
        }
    }

    /// Extract claims from article text
    ///
    /// Makes exactly one oracle call attempt. A transport failure or timeout
    /// is returned as an error; an undecodable response switches to the local
    /// fallback with no further calls.
    pub async fn extract(
        &self,
        article_text: &str,
        title: Option<&str>,
    ) -> Result<Vec<Claim>, ExtractorError> {
        let context = truncate_chars(article_text, self.config.max_context_chars);

        info!(
            "Starting extraction, article length {} chars, context {} chars",
            article_text.chars().count(),
            context.chars().count()
        );

        let prompt = PromptBuilder::new(context, self.config.max_claims)
            .with_title(title)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let raw = timeout(self.config.extraction_timeout(), self.call_oracle(&prompt))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        debug!("Oracle response length: {} chars", raw.len());

        match parse_claim_response(&raw, &self.config) {
            Decoded::Parsed(claims) => {
                info!("Extracted {} claims from oracle response", claims.len());
                Ok(claims)
            }
            Decoded::Degraded(reason) => {
                warn!(
                    "Extraction response unusable ({}), using local fallback",
                    reason
                );
                let claims = self.fallback.extract(article_text, &self.config);
                info!("Local fallback produced {} claims", claims.len());
                Ok(claims)
            }
        }
    }

    /// Call the oracle provider
    async fn call_oracle(&self, prompt: &str) -> Result<String, ExtractorError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // The provider trait is synchronous; run it off the async worker
        tokio::task::spawn_blocking(move || {
            provider
                .generate(&prompt)
                .map_err(|e| ExtractorError::Oracle(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Oracle(format!("Task join error: {}", e)))?
    }
}

/// Truncate to a character-bounded prefix without splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
