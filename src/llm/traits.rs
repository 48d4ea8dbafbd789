use super::types::{CompletionParams, ProviderResponse};
use std::future::Future;
use std::pin::Pin;

/// A hosted text-completion service.
///
/// Implementations send exactly one HTTP request per call and never retry;
/// any transport or API failure is returned to the caller.
pub trait Provider: Send + Sync {
    /// Display name used in logs and errors (e.g. "Anthropic", "OpenAI").
    fn name(&self) -> &str;

    /// Send `prompt` as a single user message. The reply text is returned
    /// as-is, including when it is empty.
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        params: &'a CompletionParams,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ProviderResponse>> + Send + 'a>>;
}
