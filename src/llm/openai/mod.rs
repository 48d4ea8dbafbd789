pub(super) mod types;

use crate::llm::{
    CompletionParams, ProviderResponse, StopReason, api_error, build_provider_client,
    traits::Provider,
};
use anyhow::Context;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use types::{ChatRequest, ChatResponse, Message};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI chat completions, or any endpoint speaking the same wire format.
pub struct OpenAiProvider {
    /// Display name used in errors and logs ("OpenAI", "Custom", ...).
    display_name: String,
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    cached_completions_url: String,
    client: Client,
}

impl OpenAiProvider {
    pub fn with_base_url(api_key: Option<&str>, base_url: Option<&str>) -> Self {
        Self::compatible("OpenAI", base_url.unwrap_or(OPENAI_BASE_URL), api_key)
    }

    /// An OpenAI-compatible endpoint; `base_url` is everything before
    /// `/chat/completions`.
    pub fn compatible(display_name: &str, base_url: &str, api_key: Option<&str>) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            display_name: display_name.to_string(),
            cached_auth_header: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(|k| format!("Bearer {k}")),
            cached_completions_url: format!("{base}/chat/completions"),
            client: build_provider_client(),
        }
    }

    fn build_request(prompt: &str, params: &CompletionParams) -> ChatRequest {
        ChatRequest {
            model: params.model.clone(),
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
        }
    }

    fn map_finish_reason(finish_reason: Option<&str>) -> Option<StopReason> {
        finish_reason.map(|reason| match reason {
            "stop" => StopReason::EndTurn,
            "length" => StopReason::MaxTokens,
            _ => StopReason::Error,
        })
    }

    fn build_provider_response(
        &self,
        chat_response: ChatResponse,
    ) -> anyhow::Result<ProviderResponse> {
        let ChatResponse {
            choices,
            usage,
            model,
        } = chat_response;

        let choice = choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No response from {}", self.display_name))?;
        let stop_reason = Self::map_finish_reason(choice.finish_reason.as_deref());
        // A null `content` is an empty reply, not a failure.
        let text = choice.message.content.unwrap_or_default();

        let mut response = match usage {
            Some(usage) => {
                ProviderResponse::with_usage(text, usage.prompt_tokens, usage.completion_tokens)
            }
            None => ProviderResponse::text_only(text),
        };
        if let Some(api_model) = model {
            response = response.with_model(api_model);
        }
        Ok(response.with_stop_reason(stop_reason))
    }

    async fn call_api(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let auth_header = self.cached_auth_header.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "{} API key not set. Set OPENAI_API_KEY or add api_key to config.toml.",
                self.display_name
            )
        })?;

        let response = self
            .client
            .post(&self.cached_completions_url)
            .header("Authorization", auth_header)
            .json(request)
            .send()
            .await
            .with_context(|| format!("{} request failed", self.display_name))?;

        if !response.status().is_success() {
            return Err(api_error(&self.display_name, response).await);
        }

        response
            .json()
            .await
            .with_context(|| format!("{} response JSON decode failed", self.display_name))
    }
}

impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        params: &'a CompletionParams,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ProviderResponse>> + Send + 'a>> {
        Box::pin(async move {
            let request = Self::build_request(prompt, params);
            let chat_response = self.call_api(&request).await?;
            self.build_provider_response(chat_response)
        })
    }
}
