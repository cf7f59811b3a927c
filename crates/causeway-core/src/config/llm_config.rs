//! LLM backend configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the chat-completions backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LlmConfig {
    /// Model name sent with every request. Default: "gpt-4".
    pub model: Option<String>,
    /// Chat-completions endpoint URL.
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds. Default: 60.
    pub timeout_secs: Option<u64>,
    /// Retry attempts after a failed call. Default: 0 (no automatic retry).
    pub max_retries: Option<u32>,
    /// Backoff before the first retry, doubled on each further retry.
    pub initial_backoff_ms: Option<u64>,
    /// Sampling temperature. Default: 0.0.
    pub temperature: Option<f64>,
    /// API credential. Read from the environment, never written to disk.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl LlmConfig {
    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or(defaults::DEFAULT_MODEL)
    }

    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(defaults::DEFAULT_ENDPOINT)
    }

    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS)
    }

    pub fn effective_max_retries(&self) -> u32 {
        self.max_retries.unwrap_or(defaults::DEFAULT_MAX_RETRIES)
    }

    pub fn effective_initial_backoff_ms(&self) -> u64 {
        self.initial_backoff_ms
            .unwrap_or(defaults::DEFAULT_INITIAL_BACKOFF_MS)
    }

    pub fn effective_temperature(&self) -> f64 {
        self.temperature.unwrap_or(defaults::DEFAULT_TEMPERATURE)
    }
}
