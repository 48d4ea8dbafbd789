use crate::corpus::{CorpusColumns, DEFAULT_LOCATION_COLUMN, DEFAULT_SCRIPT_COLUMN};
use crate::error::ConfigError;
use crate::llm::CompletionParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - computed, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
    #[serde(default = "default_location_column")]
    pub location_column: String,
    #[serde(default = "default_script_column")]
    pub script_column: String,

    /// Style extraction stage.
    #[serde(default)]
    pub style: StageConfig,

    /// Review generation stage.
    #[serde(default)]
    pub review: StageConfig,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("reference_scripts.csv")
}

fn default_location_column() -> String {
    DEFAULT_LOCATION_COLUMN.into()
}

fn default_script_column() -> String {
    DEFAULT_SCRIPT_COLUMN.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            corpus_path: default_corpus_path(),
            location_column: default_location_column(),
            script_column: default_script_column(),
            style: StageConfig::default(),
            review: StageConfig::default(),
        }
    }
}

/// Per-stage overrides. Anything left unset falls back to the stage's
/// built-in default when resolved into [`StageSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Built-in defaults for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageDefaults {
    pub provider: &'static str,
    pub model: &'static str,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: Option<f64>,
}

pub const STYLE_STAGE_DEFAULTS: StageDefaults = StageDefaults {
    provider: "openai",
    model: "gpt-4o",
    temperature: 0.8,
    max_tokens: 3000,
    top_p: Some(1.0),
};

pub const REVIEW_STAGE_DEFAULTS: StageDefaults = StageDefaults {
    provider: "anthropic",
    model: "claude-3-5-sonnet-20240620",
    temperature: 1.0,
    max_tokens: 1024,
    top_p: None,
};

/// Fully resolved settings for one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSettings {
    pub provider: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: Option<f64>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl StageConfig {
    pub fn resolve(&self, defaults: &StageDefaults) -> StageSettings {
        StageSettings {
            provider: self
                .provider
                .clone()
                .unwrap_or_else(|| defaults.provider.to_string()),
            model: self
                .model
                .clone()
                .unwrap_or_else(|| defaults.model.to_string()),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            top_p: self.top_p.or(defaults.top_p),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl StageSettings {
    pub fn params(&self) -> CompletionParams {
        CompletionParams {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
        }
    }

    fn validate(&self, stage: &str) -> Result<(), ConfigError> {
        if self.provider.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{stage}.provider is empty")));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{stage}.model is empty")));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "{stage}.temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Validation(format!(
                "{stage}.max_tokens must be greater than zero"
            )));
        }
        if let Some(top_p) = self.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(ConfigError::Validation(format!(
                    "{stage}.top_p must be within 0.0..=1.0, got {top_p}"
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn style_stage(&self) -> StageSettings {
        self.style.resolve(&STYLE_STAGE_DEFAULTS)
    }

    pub fn review_stage(&self) -> StageSettings {
        self.review.resolve(&REVIEW_STAGE_DEFAULTS)
    }

    pub fn corpus_columns(&self) -> CorpusColumns {
        CorpusColumns {
            location: self.location_column.clone(),
            script: self.script_column.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style_stage().validate("style")?;
        self.review_stage().validate("review")?;
        if self.location_column.trim().is_empty() || self.script_column.trim().is_empty() {
            return Err(ConfigError::Validation(
                "corpus column names must not be empty".into(),
            ));
        }
        Ok(())
    }
}
