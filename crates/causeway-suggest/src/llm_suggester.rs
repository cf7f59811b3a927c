//! `ICausalSuggester` over an OpenAI-compatible chat-completions endpoint.

use causeway_core::errors::{CausewayResult, SuggestError};
use causeway_core::models::SuggestionRequest;
use causeway_core::traits::ICausalSuggester;
use causeway_core::CausewayConfig;
use serde_json::Value;
use tracing::{debug, info};

use crate::prompts;
use crate::response::extract_value;
use crate::transport::{ChatRequest, HttpClient, HttpClientConfig};

/// Production suggester: one chat call per request, no caching.
#[derive(Debug)]
pub struct LlmSuggester {
    client: HttpClient,
    model: String,
    temperature: f64,
}

impl LlmSuggester {
    pub fn new(client: HttpClient, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    /// Build from loaded config. Fails if no API key is configured.
    pub fn from_config(config: &CausewayConfig) -> CausewayResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        let client = HttpClient::new(HttpClientConfig::from_llm_config(&config.llm), api_key)?;
        Ok(Self::new(
            client,
            config.llm.effective_model(),
            config.llm.effective_temperature(),
        ))
    }

    /// Switch the model used for subsequent calls.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ICausalSuggester for LlmSuggester {
    fn suggest(&self, request: &SuggestionRequest) -> CausewayResult<Value> {
        let span = tracing::info_span!(
            "causeway.suggest",
            kind = %request.kind,
            model = %self.model,
        );
        let _guard = span.enter();

        check_request(request)?;
        let chat = ChatRequest {
            model: self.model.clone(),
            messages: prompts::build_messages(request),
            temperature: self.temperature,
        };
        debug!(endpoint = %self.client.config().endpoint, "sending chat request");
        let response = self.client.post_chat(&chat)?;
        let content = response.first_content().ok_or(SuggestError::EmptyResponse)?;
        let value = extract_value(content)?;
        info!(chars = content.len(), "suggestion received");
        Ok(value)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// Inputs every request needs before a call is worth making.
pub(crate) fn check_request(request: &SuggestionRequest) -> Result<(), SuggestError> {
    if request.factors.is_empty() {
        return Err(SuggestError::MissingInput {
            what: "factors".to_string(),
        });
    }
    if request.kind.needs_treatment_outcome() {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        if blank(&request.treatment) || blank(&request.outcome) {
            return Err(SuggestError::MissingInput {
                what: "treatment and outcome".to_string(),
            });
        }
    }
    if request.kind.yields_relationships() && request.graph.as_ref().is_some_and(|g| g.is_empty())
    {
        return Err(SuggestError::MissingInput {
            what: "DAG".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_core::models::SuggestionKind;

    #[test]
    fn missing_treatment_is_rejected_before_any_call() {
        let req = SuggestionRequest {
            treatment: Some("  ".into()),
            ..SuggestionRequest::treatment_outcome(
                SuggestionKind::MediatorSet,
                "",
                "lung cancer",
                &["smoking".into()],
                &[],
            )
        };
        assert!(matches!(
            check_request(&req),
            Err(SuggestError::MissingInput { .. })
        ));
    }

    #[test]
    fn expertise_request_only_needs_factors() {
        assert!(check_request(&SuggestionRequest::domain_expertises(&["a".into()])).is_ok());
        assert!(check_request(&SuggestionRequest::domain_expertises(&[])).is_err());
    }
}
