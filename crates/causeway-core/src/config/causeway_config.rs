//! Top-level Causeway configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, DisplayConfig, LlmConfig, OutputFormat};
use crate::constants::API_KEY_ENV;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CAUSEWAY_*`)
/// 3. Project config (`causeway.toml` in the working directory)
/// 4. User config (`~/.causeway/config.toml`)
/// 5. Compiled defaults
///
/// The API key is read separately from `OPENAI_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CausewayConfig {
    pub llm: LlmConfig,
    pub display: DisplayConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
}

impl CausewayConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. A broken user file is fatal, a missing one is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.llm.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self::validate(&config)?;
        tracing::debug!(
            model = config.llm.effective_model(),
            endpoint = config.llm.effective_endpoint(),
            has_api_key = config.llm.api_key.is_some(),
            "config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (no env or file layers).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML. The API key is never included.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// The API key, or the fatal configuration error shown before any session starts.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.llm
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey {
                env_var: API_KEY_ENV.to_string(),
            })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausewayConfig) -> Result<(), ConfigError> {
        if config.llm.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "llm.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(temperature) = config.llm.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::ValidationFailed {
                    field: "llm.temperature".to_string(),
                    message: "must be between 0.0 and 2.0".to_string(),
                });
            }
        }
        if let Some(ref model) = config.llm.model {
            if model.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "llm.model".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref format) = config.display.format {
            format.parse::<OutputFormat>()?;
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(defaults::USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CausewayConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CausewayConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut CausewayConfig, other: &CausewayConfig) {
        // LLM
        if other.llm.model.is_some() {
            base.llm.model = other.llm.model.clone();
        }
        if other.llm.endpoint.is_some() {
            base.llm.endpoint = other.llm.endpoint.clone();
        }
        if other.llm.timeout_secs.is_some() {
            base.llm.timeout_secs = other.llm.timeout_secs;
        }
        if other.llm.max_retries.is_some() {
            base.llm.max_retries = other.llm.max_retries;
        }
        if other.llm.initial_backoff_ms.is_some() {
            base.llm.initial_backoff_ms = other.llm.initial_backoff_ms;
        }
        if other.llm.temperature.is_some() {
            base.llm.temperature = other.llm.temperature;
        }

        // Display
        if other.display.format.is_some() {
            base.display.format = other.display.format.clone();
        }
        if other.display.show_scores.is_some() {
            base.display.show_scores = other.display.show_scores;
        }
        if other.display.title_case_names.is_some() {
            base.display.title_case_names = other.display.title_case_names;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CAUSEWAY_LLM_MODEL`, `CAUSEWAY_DISPLAY_FORMAT`, etc.
    fn apply_env_overrides(config: &mut CausewayConfig) {
        if let Ok(val) = std::env::var("CAUSEWAY_LLM_MODEL") {
            config.llm.model = Some(val);
        }
        if let Ok(val) = std::env::var("CAUSEWAY_LLM_ENDPOINT") {
            config.llm.endpoint = Some(val);
        }
        if let Ok(val) = std::env::var("CAUSEWAY_LLM_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.llm.timeout_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSEWAY_LLM_MAX_RETRIES") {
            if let Ok(v) = val.parse::<u32>() {
                config.llm.max_retries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSEWAY_DISPLAY_FORMAT") {
            config.display.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CausewayConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.model {
            config.llm.model = Some(v.clone());
        }
        if let Some(ref v) = cli.endpoint {
            config.llm.endpoint = Some(v.clone());
        }
        if let Some(v) = cli.timeout_secs {
            config.llm.timeout_secs = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.display.format = Some(v.clone());
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
