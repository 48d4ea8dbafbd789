// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;
pub mod types;

// ── Factory ─────────────────────────────────────────────────────────────────
pub mod factory;

// ── Provider implementations ────────────────────────────────────────────────
pub mod anthropic;
pub mod openai;

// ── Infrastructure re-exports ───────────────────────────────────────────────
pub use http_client::build_provider_client;
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use traits::Provider;
pub use types::{CompletionParams, ProviderResponse, StopReason};

// ── Provider + factory re-exports ───────────────────────────────────────────
pub use anthropic::AnthropicProvider;
pub use factory::{create_provider, resolve_api_key};
pub use openai::OpenAiProvider;
