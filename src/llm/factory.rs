use super::anthropic::AnthropicProvider;
use super::openai::OpenAiProvider;
use super::traits::Provider;

/// Resolve API key for a provider from config and environment variables.
///
/// Resolution order:
/// 1. Explicitly provided `api_key` parameter (trimmed, filtered if empty)
/// 2. Provider-specific environment variable (`OPENAI_API_KEY`,
///    `ANTHROPIC_OAUTH_TOKEN`, `ANTHROPIC_API_KEY`)
/// 3. Generic fallback variables (`SCRIPTSMITH_API_KEY`, `API_KEY`)
pub fn resolve_api_key(name: &str, explicit_api_key: Option<&str>) -> Option<String> {
    resolve_api_key_with(name, explicit_api_key, |var| std::env::var(var).ok())
}

pub(crate) fn resolve_api_key_with<F>(
    name: &str,
    explicit_api_key: Option<&str>,
    env: F,
) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = explicit_api_key.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }

    let provider_env_candidates: &[&str] = match name {
        "anthropic" => &["ANTHROPIC_OAUTH_TOKEN", "ANTHROPIC_API_KEY"],
        "openai" => &["OPENAI_API_KEY"],
        name if name.starts_with("anthropic-custom:") => &["ANTHROPIC_API_KEY"],
        _ => &[],
    };

    provider_env_candidates
        .iter()
        .chain(["SCRIPTSMITH_API_KEY", "API_KEY"].iter())
        .filter_map(|&var| env(var))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Build a provider by name.
///
/// `base_url` replaces the default endpoint of `openai` and `anthropic`;
/// the `custom:` and `anthropic-custom:` forms carry their own URL.
pub fn create_provider(
    name: &str,
    api_key: Option<&str>,
    base_url: Option<&str>,
) -> anyhow::Result<Box<dyn Provider>> {
    let resolved_key = resolve_api_key(name, api_key);
    let api_key = resolved_key.as_deref();
    match name {
        "openai" => Ok(Box::new(OpenAiProvider::with_base_url(api_key, base_url))),
        "anthropic" => Ok(Box::new(AnthropicProvider::with_base_url(api_key, base_url))),

        // ── Bring Your Own Provider (custom URL) ───────────
        name if name.starts_with("custom:") => {
            let url = name.strip_prefix("custom:").unwrap_or("");
            if url.is_empty() {
                anyhow::bail!("Custom provider requires a URL. Format: custom:https://your-api.com/v1");
            }
            Ok(Box::new(OpenAiProvider::compatible("Custom", url, api_key)))
        }

        // ── Anthropic-compatible custom endpoints ───────────
        name if name.starts_with("anthropic-custom:") => {
            let url = name.strip_prefix("anthropic-custom:").unwrap_or("");
            if url.is_empty() {
                anyhow::bail!(
                    "Anthropic-custom provider requires a URL. Format: anthropic-custom:https://your-api.com"
                );
            }
            Ok(Box::new(AnthropicProvider::with_base_url(api_key, Some(url))))
        }

        _ => anyhow::bail!(
            "Unknown provider: {name}. Supported: openai, anthropic, custom:<url>, anthropic-custom:<url>."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn factory_known_providers() {
        assert!(create_provider("openai", Some("sk-test"), None).is_ok());
        assert!(create_provider("anthropic", Some("sk-ant-test"), None).is_ok());
        assert!(create_provider("openai", Some("sk-test"), Some("http://127.0.0.1:9")).is_ok());
    }

    #[test]
    fn factory_custom_endpoints() {
        let p = create_provider("custom:https://llm.example.com/v1", Some("k"), None).unwrap();
        assert_eq!(p.name(), "Custom");
        let p = create_provider("anthropic-custom:https://proxy.example.com", Some("k"), None)
            .unwrap();
        assert_eq!(p.name(), "Anthropic");
    }

    #[test]
    fn factory_custom_requires_url() {
        let err = create_provider("custom:", Some("k"), None).err().unwrap();
        assert!(err.to_string().contains("requires a URL"));
        assert!(create_provider("anthropic-custom:", Some("k"), None).is_err());
    }

    #[test]
    fn factory_unknown_provider_errors() {
        let err = create_provider("nonexistent", None, None).err().unwrap();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn explicit_key_wins_over_environment() {
        let env = env_of(&[("OPENAI_API_KEY", "from-env")]);
        assert_eq!(
            resolve_api_key_with("openai", Some("  explicit  "), env).as_deref(),
            Some("explicit")
        );
    }

    #[test]
    fn provider_specific_variable_precedes_generic() {
        let env = env_of(&[
            ("ANTHROPIC_API_KEY", "anthropic-key"),
            ("SCRIPTSMITH_API_KEY", "generic"),
        ]);
        assert_eq!(
            resolve_api_key_with("anthropic", None, env).as_deref(),
            Some("anthropic-key")
        );
    }

    #[test]
    fn oauth_token_precedes_api_key_for_anthropic() {
        let env = env_of(&[
            ("ANTHROPIC_OAUTH_TOKEN", "sk-ant-oat01-x"),
            ("ANTHROPIC_API_KEY", "anthropic-key"),
        ]);
        assert_eq!(
            resolve_api_key_with("anthropic", None, env).as_deref(),
            Some("sk-ant-oat01-x")
        );
    }

    #[test]
    fn blank_variables_are_skipped() {
        let env = env_of(&[("OPENAI_API_KEY", "   "), ("API_KEY", "fallback")]);
        assert_eq!(
            resolve_api_key_with("openai", Some(""), env).as_deref(),
            Some("fallback")
        );
    }

    #[test]
    fn no_key_anywhere_resolves_to_none() {
        assert!(resolve_api_key_with("custom:https://x", None, env_of(&[])).is_none());
    }
}
