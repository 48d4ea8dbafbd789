use std::path::PathBuf;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `scriptsmith`.
///
/// Startup failures (config, corpus, templates) are typed so library callers
/// can tell them apart. Model calls stay on `anyhow::Error` and reach the
/// caller exactly as the provider layer produced them.
#[derive(Debug, Error)]
pub enum ScriptError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Reference corpus ────────────────────────────────────────────────
    #[error("corpus: {0}")]
    Corpus(#[from] CorpusError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Corpus errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("column `{column}` not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

// ─── Prompt errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template `{name}` failed to compile: {source}")]
    Compile {
        name: &'static str,
        #[source]
        source: tera::Error,
    },

    #[error("template `{name}` failed to render: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: tera::Error,
    },
}

pub type Result<T, E = ScriptError> = std::result::Result<T, E>;
