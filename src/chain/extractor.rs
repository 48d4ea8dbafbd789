use super::types::StyleProfile;
use crate::corpus::ReferenceCorpus;
use crate::llm::{CompletionParams, Provider};
use crate::prompt::{TeraEngine, build_style_extraction_prompt};

/// Stage one: turn the reference corpus into a style profile.
pub struct StyleExtractor {
    provider: Box<dyn Provider>,
    params: CompletionParams,
}

impl StyleExtractor {
    pub fn new(provider: Box<dyn Provider>, params: CompletionParams) -> Self {
        Self { provider, params }
    }

    /// Send one completion request built from every reference script and
    /// return the reply untouched. An empty corpus still produces a call.
    pub async fn extract(
        &self,
        prompts: &TeraEngine,
        corpus: &ReferenceCorpus,
    ) -> anyhow::Result<StyleProfile> {
        if corpus.is_empty() {
            tracing::warn!("Reference corpus is empty; extracting style from an empty fragment");
        }
        let prompt = build_style_extraction_prompt(prompts, &corpus.render_fragment())?;

        tracing::info!(
            provider = self.provider.name(),
            model = %self.params.model,
            scripts = corpus.len(),
            prompt_chars = prompt.len(),
            "Extracting style profile"
        );
        tracing::debug!(%prompt, "Style extraction prompt");

        let response = self
            .provider
            .complete(&prompt, &self.params)
            .await?;

        if response.was_truncated() {
            tracing::warn!(
                max_tokens = self.params.max_tokens,
                "Style profile hit the output token limit"
            );
        }
        tracing::info!(
            chars = response.text.len(),
            model = response.model.as_deref().unwrap_or(&self.params.model),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Style profile received"
        );

        Ok(StyleProfile::new(response.text))
    }
}
