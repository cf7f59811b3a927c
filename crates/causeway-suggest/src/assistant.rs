//! One user-triggered action against a session: check prerequisites, make at
//! most one suggester call, normalize, report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use causeway_core::constants::{
    MISSING_CONTEXT_WARNING, MISSING_CRITIQUE_CONTEXT_WARNING, MISSING_FACTORS_WARNING, RETRY_HINT,
};
use causeway_core::models::{
    NormalizedOutput, RelationshipStrategy, SessionContext, SuggestionKind, SuggestionRequest,
};
use causeway_core::traits::ICausalSuggester;
use causeway_graph::{build_report, normalize, validate_dag_text, NormalizeMode, RenderOptions, SuggestionReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    /// Nothing was committed; the user should fix input or retry.
    Warning,
    /// The suggester call failed.
    Error,
}

/// Tri-state result of one action. Never an `Err`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub kind: SuggestionKind,
    pub status: ActionStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<NormalizedOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SuggestionReport>,
    /// Reply as received, kept when it could not be normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
    pub completed_at: DateTime<Utc>,
}

impl ActionOutcome {
    fn new(kind: SuggestionKind, status: ActionStatus, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            output: None,
            report: None,
            raw: None,
            completed_at: Utc::now(),
        }
    }

    fn warning(kind: SuggestionKind, message: impl Into<String>) -> Self {
        Self::new(kind, ActionStatus::Warning, message)
    }

    pub fn is_success(&self) -> bool {
        self.status == ActionStatus::Success
    }
}

/// Runs suggestion actions for a session.
pub struct CausalAssistant<S> {
    suggester: S,
    render: RenderOptions,
    strategy: RelationshipStrategy,
}

impl<S: ICausalSuggester> CausalAssistant<S> {
    pub fn new(suggester: S) -> Self {
        Self {
            suggester,
            render: RenderOptions::default(),
            strategy: RelationshipStrategy::default(),
        }
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_strategy(mut self, strategy: RelationshipStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn suggester(&self) -> &S {
        &self.suggester
    }

    pub fn suggester_mut(&mut self) -> &mut S {
        &mut self.suggester
    }

    /// Run `kind` against `session`.
    ///
    /// The session is only written on success of the domain-expertise action.
    pub fn run(&self, session: &mut SessionContext, kind: SuggestionKind) -> ActionOutcome {
        let span = tracing::info_span!(
            "causeway.action",
            session_id = %session.session_id,
            kind = %kind,
            model = %session.model,
        );
        let _guard = span.enter();

        let mut cycle_note = None;
        let request = match self.prepare(session, kind, &mut cycle_note) {
            Ok(request) => request,
            Err(outcome) => {
                warn!(message = %outcome.message, "prerequisites not met");
                return outcome;
            }
        };

        let raw = match self.suggester.suggest(&request) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, suggester = self.suggester.name(), "suggestion call failed");
                return ActionOutcome::new(
                    kind,
                    ActionStatus::Error,
                    format!("{} failed: {e}. {RETRY_HINT}", kind.title()),
                );
            }
        };

        let output = match normalize(&raw, NormalizeMode::for_kind(kind)) {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "reply matched no known shape");
                let mut outcome =
                    ActionOutcome::warning(kind, format!("No usable result: {e}. {RETRY_HINT}"));
                outcome.raw = Some(raw);
                return outcome;
            }
        };

        if kind == SuggestionKind::DomainExpertises {
            session.set_domain_expertises(output.variable_names());
        }

        let report = build_report(kind, &output, &self.render);
        let message = match cycle_note {
            Some(note) => format!("{} {note}", report.summary),
            None => report.summary.clone(),
        };
        info!(records = output.len(), "action completed");

        ActionOutcome {
            output: Some(output),
            report: Some(report),
            raw: Some(raw),
            ..ActionOutcome::new(kind, ActionStatus::Success, message)
        }
    }

    /// Prerequisite checks, then the request for `kind`.
    fn prepare(
        &self,
        session: &SessionContext,
        kind: SuggestionKind,
        cycle_note: &mut Option<String>,
    ) -> Result<SuggestionRequest, ActionOutcome> {
        let expertises = session.domain_expertises.as_deref().unwrap_or_default();
        match kind {
            SuggestionKind::DomainExpertises => {
                if !session.has_factors() {
                    return Err(ActionOutcome::warning(kind, MISSING_FACTORS_WARNING));
                }
                Ok(SuggestionRequest::domain_expertises(&session.factors))
            }
            SuggestionKind::CritiqueGraph => {
                let validation = validate_dag_text(&session.dag_text);
                if !validation.is_valid {
                    return Err(ActionOutcome::warning(
                        kind,
                        format!("Invalid DAG: {}", validation.message),
                    ));
                }
                if !session.has_factors() || !session.has_domain_expertises() {
                    return Err(ActionOutcome::warning(kind, MISSING_CRITIQUE_CONTEXT_WARNING));
                }
                *cycle_note = validation.cycle_warning();
                Ok(SuggestionRequest::critique_graph(
                    &session.factors,
                    &validation.graph,
                    expertises,
                    self.strategy,
                ))
            }
            SuggestionKind::PairwiseRelationships => {
                self.require_context(session, kind)?;
                Ok(SuggestionRequest::relationships(
                    &session.treatment,
                    &session.outcome,
                    &session.factors,
                    expertises,
                    self.strategy,
                ))
            }
            _ => {
                self.require_context(session, kind)?;
                Ok(SuggestionRequest::treatment_outcome(
                    kind,
                    &session.treatment,
                    &session.outcome,
                    &session.factors,
                    expertises,
                ))
            }
        }
    }

    fn require_context(
        &self,
        session: &SessionContext,
        kind: SuggestionKind,
    ) -> Result<(), ActionOutcome> {
        if session.has_treatment_and_outcome()
            && session.has_factors()
            && session.has_domain_expertises()
        {
            Ok(())
        } else {
            Err(ActionOutcome::warning(kind, MISSING_CONTEXT_WARNING))
        }
    }
}
