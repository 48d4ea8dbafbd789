mod types;

use crate::llm::{
    CompletionParams, ProviderResponse, StopReason, api_error, build_provider_client,
    traits::Provider,
};
use anyhow::Context;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use types::{ChatRequest, ChatResponse, Message, ResponseContentBlock};

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    /// Pre-computed auth: `("Authorization", "Bearer <token>")` or `("x-api-key", "<key>")`.
    cached_auth: Option<(&'static str, String)>,
    cached_messages_url: String,
    client: Client,
}

impl AnthropicProvider {
    pub fn with_base_url(api_key: Option<&str>, base_url: Option<&str>) -> Self {
        let base = base_url
            .map_or(ANTHROPIC_BASE_URL, |u| u.trim_end_matches('/'))
            .to_string();
        let cached_messages_url = format!("{base}/v1/messages");
        let cached_auth = api_key.map(str::trim).filter(|k| !k.is_empty()).map(|k| {
            if Self::is_setup_token(k) {
                ("Authorization", format!("Bearer {k}"))
            } else {
                ("x-api-key", k.to_string())
            }
        });
        Self {
            cached_auth,
            cached_messages_url,
            client: build_provider_client(),
        }
    }

    fn is_setup_token(token: &str) -> bool {
        token.starts_with("sk-ant-oat01-")
    }

    fn build_request(prompt: &str, params: &CompletionParams) -> ChatRequest {
        ChatRequest {
            model: params.model.clone(),
            max_tokens: params.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: params.temperature,
            top_p: params.top_p,
        }
    }

    fn map_stop_reason(stop_reason: Option<&str>) -> Option<StopReason> {
        stop_reason.map(|reason| match reason {
            "end_turn" | "stop_sequence" => StopReason::EndTurn,
            "max_tokens" => StopReason::MaxTokens,
            _ => StopReason::Error,
        })
    }

    /// Join the text blocks of a reply. A reply with no text blocks is an
    /// empty string.
    fn extract_text(chat_response: &ChatResponse) -> String {
        chat_response
            .content
            .iter()
            .filter_map(|block| match block {
                ResponseContentBlock::Text { text } => Some(text.as_str()),
                ResponseContentBlock::Unsupported => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn call_api(&self, request: &ChatRequest) -> anyhow::Result<ChatResponse> {
        let (auth_name, auth_value) = self.cached_auth.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "Anthropic credentials not set. Set ANTHROPIC_API_KEY or ANTHROPIC_OAUTH_TOKEN (setup-token)."
            )
        })?;

        let response = self
            .client
            .post(&self.cached_messages_url)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .header(*auth_name, auth_value)
            .json(request)
            .send()
            .await
            .context("Anthropic request failed")?;

        if !response.status().is_success() {
            return Err(api_error("Anthropic", response).await);
        }

        response
            .json()
            .await
            .context("Anthropic response JSON decode failed")
    }
}

impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "Anthropic"
    }

    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        params: &'a CompletionParams,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ProviderResponse>> + Send + 'a>> {
        Box::pin(async move {
            let request = Self::build_request(prompt, params);
            let chat_response = self.call_api(&request).await?;
            let text = Self::extract_text(&chat_response);

            let mut provider_response = if let Some(usage) = &chat_response.usage {
                ProviderResponse::with_usage(text, usage.input_tokens, usage.output_tokens)
            } else {
                ProviderResponse::text_only(text)
            };
            if let Some(api_model) = chat_response.model {
                provider_response = provider_response.with_model(api_model);
            }
            Ok(provider_response.with_stop_reason(Self::map_stop_reason(
                chat_response.stop_reason.as_deref(),
            )))
        })
    }
}
