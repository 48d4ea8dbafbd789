pub mod schema;

pub use schema::{
    Config, REVIEW_STAGE_DEFAULTS, STYLE_STAGE_DEFAULTS, StageConfig, StageDefaults,
    StageSettings,
};

use crate::error::ConfigError;
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".scriptsmith";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Default location: `~/.scriptsmith/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .ok_or_else(|| ConfigError::Load("Could not find home directory".into()))?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file, then apply environment overrides and validate.
    ///
    /// An explicit path must exist. When no path is given and the default
    /// file is absent, built-in defaults are used and nothing is written.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Load(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                Self::read_from(path)?
            }
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::read_from(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "No config file; using defaults");
                    Self {
                        config_path: path,
                        ..Self::default()
                    }
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.config_path = path.to_path_buf();
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides_from(&mut self, env: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        if let Some(corpus) = non_empty("SCRIPTSMITH_CORPUS") {
            self.corpus_path = PathBuf::from(corpus);
        }
        if let Some(provider) = non_empty("SCRIPTSMITH_STYLE_PROVIDER") {
            self.style.provider = Some(provider);
        }
        if let Some(model) = non_empty("SCRIPTSMITH_STYLE_MODEL") {
            self.style.model = Some(model);
        }
        if let Some(provider) = non_empty("SCRIPTSMITH_REVIEW_PROVIDER") {
            self.review.provider = Some(provider);
        }
        if let Some(model) = non_empty("SCRIPTSMITH_REVIEW_MODEL") {
            self.review.model = Some(model);
        }

        if let Some(temp_str) = non_empty("SCRIPTSMITH_TEMPERATURE") {
            match temp_str.trim().parse::<f64>() {
                Ok(temp) if (0.0..=2.0).contains(&temp) => {
                    self.style.temperature = Some(temp);
                    self.review.temperature = Some(temp);
                }
                _ => tracing::warn!(value = %temp_str, "Ignoring invalid SCRIPTSMITH_TEMPERATURE"),
            }
        }
    }
}
