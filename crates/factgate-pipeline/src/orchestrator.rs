//! Core FactChecker implementation

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Stage};
use factgate_domain::traits::LlmProvider;
use factgate_domain::{aggregate, FactCheckResult, ScoringConfig, VerificationResult};
use factgate_extractor::ClaimExtractor;
use factgate_gatekeeper::{Gatekeeper, ValidationWarning};
use factgate_verifier::ClaimVerifier;
use std::sync::Arc;
use tracing::{debug, info};

/// The FactChecker sequences extraction, verification, and scoring
///
/// One value serves many concurrent invocations: all state is immutable
/// configuration, and every call owns its claims and verdicts end to end.
pub struct FactChecker<L>
where
    L: LlmProvider,
{
    extractor: ClaimExtractor<L>,
    verifier: ClaimVerifier<L>,
    gatekeeper: Gatekeeper,
    scoring: ScoringConfig,
}

impl<L> FactChecker<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new FactChecker over a shared oracle provider
    ///
    /// Fails fast with [`PipelineError::Configuration`] when any component
    /// configuration is invalid, before any oracle call is possible.
    pub fn new(provider: Arc<L>, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Configuration)?;

        Ok(Self {
            extractor: ClaimExtractor::new(Arc::clone(&provider), config.extractor),
            verifier: ClaimVerifier::new(provider, config.verifier, config.reference),
            gatekeeper: Gatekeeper::new(config.rules),
            scoring: config.scoring,
        })
    }

    /// Run the full pipeline over one article
    ///
    /// Stages run strictly in sequence, with at most two oracle suspension
    /// points (extraction and verification; the fallback paths make none).
    /// Either every stage completes and a full result is returned, or a
    /// transport failure ends the call with no partial result.
    pub async fn check_article(
        &self,
        article_text: &str,
        title: Option<&str>,
    ) -> Result<FactCheckResult, PipelineError> {
        debug!("Stage: {}", Stage::Extracting);
        let claims = self
            .extractor
            .extract(article_text, title)
            .await
            .map_err(|e| PipelineError::transport(Stage::Extracting, e))?;

        debug!("Stage: {}", Stage::Verifying);
        let verified_facts = self
            .verifier
            .verify(&claims, article_text)
            .await
            .map_err(|e| PipelineError::transport(Stage::Verifying, e))?;

        debug!("Stage: {}", Stage::Scoring);
        let aggregate = aggregate(&verified_facts, &self.scoring);
        let sources = collect_sources(&verified_facts);

        let result = FactCheckResult {
            is_accurate: self.scoring.is_accurate(aggregate.score),
            score: aggregate.score,
            issues: aggregate.issues,
            verified_facts,
            sources,
        };

        info!(
            "Fact check complete: score {}, accurate {}, {} issues",
            result.score,
            result.is_accurate,
            result.issues.len()
        );

        Ok(result)
    }

    /// Run only the deterministic domain rules over article text
    ///
    /// Independent of the pipeline stages and of the oracle; findings are
    /// advisory and never touch the score.
    pub fn validate_domain_facts(&self, article_text: &str) -> Vec<ValidationWarning> {
        self.gatekeeper.validate(article_text)
    }
}

/// Deduplicated non-empty sources across all verdicts, first-seen order
fn collect_sources(results: &[VerificationResult]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for result in results {
        if let Some(source) = &result.source {
            if !source.is_empty() && !sources.iter().any(|s| s == source) {
                sources.push(source.clone());
            }
        }
    }
    sources
}
