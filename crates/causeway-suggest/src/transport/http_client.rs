//! Blocking HTTP client with timeout, bearer auth, gzip, and opt-in retry.

use std::time::Duration;

use causeway_core::config::LlmConfig;
use causeway_core::errors::SuggestError;

use super::protocol::{ChatRequest, ChatResponse};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Full chat-completions URL.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Retry attempts after the first failure. Zero means a single attempt.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl HttpClientConfig {
    pub fn from_llm_config(llm: &LlmConfig) -> Self {
        Self {
            endpoint: llm.effective_endpoint().to_string(),
            timeout: Duration::from_secs(llm.effective_timeout_secs()),
            max_retries: llm.effective_max_retries(),
            initial_backoff: Duration::from_millis(llm.effective_initial_backoff_ms()),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_llm_config(&LlmConfig::default())
    }
}

/// HTTP transport client.
#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig, api_key: String) -> Result<Self, SuggestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| SuggestError::Http {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// POST a chat request. Server errors and transport failures are retried
    /// up to `max_retries` times; client errors are returned at once.
    pub fn post_chat(&self, request: &ChatRequest) -> Result<ChatResponse, SuggestError> {
        let mut backoff = self.config.initial_backoff;
        let mut last_err = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "llm: retry attempt {}/{} after {:?}",
                    attempt,
                    self.config.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let sent = self
                .client
                .post(&self.config.endpoint)
                .bearer_auth(&self.api_key)
                .json(request)
                .send();

            match sent {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<ChatResponse>().map_err(|e| {
                            SuggestError::MalformedResponse {
                                reason: format!("deserialization failed: {e}"),
                            }
                        });
                    }
                    let body = resp.text().unwrap_or_default();
                    let err = SuggestError::ApiStatus {
                        status: status.as_u16(),
                        body: truncate(&body, 500),
                    };
                    if status.is_client_error() {
                        return Err(err);
                    }
                    tracing::warn!(attempt, status = status.as_u16(), "llm request failed");
                    last_err = Some(err);
                }
                Err(e) => {
                    let reason = if e.is_timeout() {
                        format!("timed out after {:?}", self.config.timeout)
                    } else {
                        e.to_string()
                    };
                    tracing::warn!(attempt, error = %reason, "llm request failed");
                    last_err = Some(SuggestError::Http {
                        endpoint: self.config.endpoint.clone(),
                        reason,
                    });
                }
            }
        }

        Err(last_err.unwrap_or_else(|| SuggestError::Http {
            endpoint: self.config.endpoint.clone(),
            reason: "no attempt was made".to_string(),
        }))
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_never_retry() {
        let config = HttpClientConfig::default();
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("héllo", 2), "hé...");
        assert_eq!(truncate("hi", 5), "hi");
    }

    #[test]
    fn unreachable_endpoint_is_http_error() {
        let config = HttpClientConfig {
            endpoint: "http://127.0.0.1:9/v1/chat/completions".into(),
            timeout: Duration::from_secs(2),
            ..HttpClientConfig::default()
        };
        let client = HttpClient::new(config, "test-key".into()).unwrap();
        let request = ChatRequest {
            model: "gpt-4".into(),
            messages: Vec::new(),
            temperature: 0.0,
        };
        let err = client.post_chat(&request).unwrap_err();
        assert!(matches!(err, SuggestError::Http { .. }), "{err}");
    }
}
