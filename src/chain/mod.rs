//! Two-stage review pipeline: style extraction, then conditioned generation.

mod extractor;
mod generator;
mod types;

pub use extractor::StyleExtractor;
pub use generator::ReviewGenerator;
pub use types::{ChainOutput, GeneratedReview, ReviewRequest, StyleProfile};

use crate::config::{Config, StageSettings};
use crate::corpus::ReferenceCorpus;
use crate::error::ScriptError;
use crate::llm::{Provider, create_provider};
use crate::prompt::{TeraEngine, default_engine};

/// Fixed sequence of [`StyleExtractor`] then [`ReviewGenerator`].
///
/// Holds no per-request state; every call to [`ReviewChain::run`] is
/// independent of the ones before it.
pub struct ReviewChain {
    prompts: TeraEngine,
    extractor: StyleExtractor,
    generator: ReviewGenerator,
}

impl ReviewChain {
    pub fn new(extractor: StyleExtractor, generator: ReviewGenerator) -> Result<Self, ScriptError> {
        Ok(Self {
            prompts: default_engine()?,
            extractor,
            generator,
        })
    }

    /// Build both stages from their configured providers.
    pub fn from_config(config: &Config) -> Result<Self, ScriptError> {
        let style = config.style_stage();
        let review = config.review_stage();
        let extractor = StyleExtractor::new(stage_provider(&style)?, style.params());
        let generator = ReviewGenerator::new(stage_provider(&review)?, review.params());
        Self::new(extractor, generator)
    }

    pub fn prompts(&self) -> &TeraEngine {
        &self.prompts
    }

    /// Run stage one alone.
    pub async fn extract_style(&self, corpus: &ReferenceCorpus) -> anyhow::Result<StyleProfile> {
        self.extractor.extract(&self.prompts, corpus).await
    }

    /// Run stage two alone against an existing profile.
    pub async fn generate(
        &self,
        style_profile: &StyleProfile,
        request: &ReviewRequest,
    ) -> anyhow::Result<GeneratedReview> {
        self.generator
            .generate(&self.prompts, style_profile, request)
            .await
    }

    /// Extract a profile from `corpus`, then write the review for `request`.
    ///
    /// Exactly two provider calls on success. A failure in either stage is
    /// returned as-is and nothing from the run is kept; stage two never
    /// starts if stage one failed.
    pub async fn run(
        &self,
        corpus: &ReferenceCorpus,
        request: &ReviewRequest,
    ) -> anyhow::Result<ChainOutput> {
        let style_profile = self
            .extract_style(corpus)
            .await
            .inspect_err(|e| tracing::error!("Style extraction failed: {e}"))?;

        let review = self
            .generate(&style_profile, request)
            .await
            .inspect_err(|e| tracing::error!("Review generation failed: {e}"))?;

        Ok(ChainOutput {
            style_profile,
            review,
        })
    }
}

fn stage_provider(stage: &StageSettings) -> anyhow::Result<Box<dyn Provider>> {
    create_provider(
        &stage.provider,
        stage.api_key.as_deref(),
        stage.base_url.as_deref(),
    )
}
