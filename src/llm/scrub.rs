use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Key prefixes issued by the completion services this crate talks to.
const KEY_PREFIXES: [&str; 3] = ["sk-", "sess-", "eyJ"];

/// Places where a credential shows up when a provider echoes the request back.
const CREDENTIAL_MARKERS: [&str; 9] = [
    "Authorization: Bearer ",
    "authorization: bearer ",
    "\"authorization\":\"Bearer ",
    "x-api-key: ",
    "\"x-api-key\":\"",
    "api_key=",
    "\"api_key\":\"",
    "access_token=",
    "\"access_token\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !is_secret_char(c))
        .map_or(input.len(), |(i, _)| from + i)
}

/// A key prefix only counts at the start of a word, so `risk-free` stays.
fn starts_word(input: &str, at: usize) -> bool {
    input[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'))
}

fn scrub_after_marker(scrubbed: &mut String, marker: &str, word_start: bool) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let content_start = start + marker.len();

        if word_start && !starts_word(scrubbed, start) {
            search_from = content_start;
            continue;
        }

        let end = token_end(scrubbed, content_start);

        // Bare marker with nothing after it.
        if end == content_start {
            search_from = content_start;
            continue;
        }

        scrubbed.replace_range(start..end, REDACTED);
        search_from = start + REDACTED.len();
    }
}

fn needs_scrubbing(input: &str) -> bool {
    KEY_PREFIXES
        .iter()
        .chain(CREDENTIAL_MARKERS.iter())
        .any(|pattern| input.contains(pattern))
}

/// Scrub credential-like tokens from provider error strings.
///
/// Redacts bare API keys (`sk-...`, `sk-ant-...`) as well as keys that follow
/// a header, query or JSON marker such as `x-api-key: ...` or `"api_key":"..."`.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    if !needs_scrubbing(input) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in CREDENTIAL_MARKERS {
        scrub_after_marker(&mut scrubbed, marker, false);
    }
    for prefix in KEY_PREFIXES {
        scrub_after_marker(&mut scrubbed, prefix, true);
    }

    Cow::Owned(scrubbed)
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        Some((end, _)) => format!("{}...", &scrubbed[..end]),
        None => scrubbed.into_owned(),
    }
}

/// Build a sanitized provider error from a failed HTTP response.
pub async fn api_error(provider: &str, response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read provider error body>".to_string());
    let sanitized = sanitize_api_error(&body);
    anyhow::anyhow!("{provider} API error ({status}): {sanitized}")
}
