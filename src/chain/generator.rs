use super::types::{GeneratedReview, ReviewRequest, StyleProfile};
use crate::llm::{CompletionParams, Provider};
use crate::prompt::{TeraEngine, build_review_prompt};

/// Stage two: write a review in the extracted style.
pub struct ReviewGenerator {
    provider: Box<dyn Provider>,
    params: CompletionParams,
}

impl ReviewGenerator {
    pub fn new(provider: Box<dyn Provider>, params: CompletionParams) -> Self {
        Self { provider, params }
    }

    pub async fn generate(
        &self,
        prompts: &TeraEngine,
        style_profile: &StyleProfile,
        request: &ReviewRequest,
    ) -> anyhow::Result<GeneratedReview> {
        let prompt = build_review_prompt(prompts, style_profile.as_str(), request)?;

        tracing::info!(
            provider = self.provider.name(),
            model = %self.params.model,
            restaurant = %request.restaurant_name,
            prompt_chars = prompt.len(),
            "Generating review"
        );
        tracing::debug!(%prompt, "Review generation prompt");

        let response = self
            .provider
            .complete(&prompt, &self.params)
            .await?;

        if response.was_truncated() {
            tracing::warn!(
                max_tokens = self.params.max_tokens,
                "Review hit the output token limit"
            );
        }
        tracing::info!(
            chars = response.text.len(),
            model = response.model.as_deref().unwrap_or(&self.params.model),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Review received"
        );

        Ok(GeneratedReview::new(response.text))
    }
}
