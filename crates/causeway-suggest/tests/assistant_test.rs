//! CausalAssistant against a scripted suggester: prerequisite warnings,
//! session writes, error and shape-failure outcomes.

use std::cell::RefCell;

use causeway_core::constants::{
    MISSING_CONTEXT_WARNING, MISSING_CRITIQUE_CONTEXT_WARNING, MISSING_FACTORS_WARNING, RETRY_HINT,
};
use causeway_core::errors::{CausewayResult, SuggestError};
use causeway_core::models::{ConfidenceBand, SessionContext, SuggestionKind, SuggestionRequest};
use causeway_core::traits::ICausalSuggester;
use causeway_suggest::{
    ActionStatus, CausalAssistant, IdentificationSuggester, ModelSuggester, ValidationSuggester,
};
use serde_json::{json, Value};

/// Returns queued replies in order and records every request.
struct ScriptedSuggester {
    replies: RefCell<Vec<CausewayResult<Value>>>,
    seen: RefCell<Vec<SuggestionRequest>>,
}

impl ScriptedSuggester {
    fn new(replies: Vec<CausewayResult<Value>>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().rev().collect()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl ICausalSuggester for ScriptedSuggester {
    fn suggest(&self, request: &SuggestionRequest) -> CausewayResult<Value> {
        self.seen.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(SuggestError::EmptyResponse.into()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn ready_session() -> SessionContext {
    let mut session = SessionContext::default();
    session.set_treatment("smoking");
    session.set_outcome("lung cancer");
    session.set_domain_expertises(vec!["epidemiology".into()]);
    session
}

#[test]
fn expertise_action_needs_factors() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![]));
    let mut session = SessionContext::default();
    session.set_factors_from_text(" , ,");
    let outcome = assistant.run(&mut session, SuggestionKind::DomainExpertises);
    assert_eq!(outcome.status, ActionStatus::Warning);
    assert_eq!(outcome.message, MISSING_FACTORS_WARNING);
    assert_eq!(assistant.suggester().calls(), 0);
}

#[test]
fn expertise_success_is_stored_in_session() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![Ok(json!([
        "epidemiology",
        "pulmonology",
        "epidemiology"
    ]))]));
    let mut session = SessionContext::default();
    assert!(!session.has_domain_expertises());
    let outcome = assistant.run(&mut session, SuggestionKind::DomainExpertises);
    assert!(outcome.is_success(), "{}", outcome.message);
    assert_eq!(
        session.domain_expertises.as_deref(),
        Some(&["epidemiology".to_string(), "pulmonology".to_string()][..])
    );
    let report = outcome.report.unwrap();
    assert_eq!(report.title, "Suggested Domain Expertises");
}

#[test]
fn other_actions_need_full_context() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![]));
    let mut session = SessionContext::default();
    session.set_treatment("smoking");
    session.set_outcome("lung cancer");
    for kind in [
        SuggestionKind::Confounders,
        SuggestionKind::PairwiseRelationships,
        SuggestionKind::BackdoorSet,
        SuggestionKind::MediatorSet,
        SuggestionKind::InstrumentalVariables,
        SuggestionKind::LatentConfounders,
        SuggestionKind::NegativeControls,
    ] {
        let outcome = assistant.run(&mut session, kind);
        assert_eq!(outcome.status, ActionStatus::Warning, "{kind}");
        assert_eq!(outcome.message, MISSING_CONTEXT_WARNING);
    }
    assert_eq!(assistant.suggester().calls(), 0);
}

#[test]
fn relationships_are_banded_in_the_report() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![Ok(json!([
        ["smoking", "lung cancer", 0.92],
        ["air pollution exposure", "lung cancer", 0.55]
    ]))]));
    let mut session = ready_session();
    let outcome = assistant.run(&mut session, SuggestionKind::PairwiseRelationships);
    assert!(outcome.is_success());
    let output = outcome.output.unwrap();
    assert_eq!(output.relationships[0].band(), ConfidenceBand::High);
    assert_eq!(output.relationships[1].band(), ConfidenceBand::Medium);

    let seen = assistant.suggester().seen.borrow();
    assert_eq!(seen[0].treatment.as_deref(), Some("smoking"));
    assert_eq!(seen[0].domain_expertises, vec!["epidemiology".to_string()]);
    assert!(seen[0].strategy.is_some());
}

#[test]
fn call_failure_is_an_error_with_retry_hint() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![Err(SuggestError::ApiStatus {
        status: 503,
        body: "overloaded".into(),
    }
    .into())]));
    let mut session = ready_session();
    let before = session.clone();
    let outcome = assistant.run(&mut session, SuggestionKind::BackdoorSet);
    assert_eq!(outcome.status, ActionStatus::Error);
    assert!(outcome.message.contains("503"));
    assert!(outcome.message.ends_with(RETRY_HINT));
    assert_eq!(session, before);
}

#[test]
fn unknown_shape_is_a_warning_keeping_raw() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![Ok(json!([[
        "a", "b", "c", "d"
    ]]))]));
    let mut session = ready_session();
    let outcome = assistant.run(&mut session, SuggestionKind::Confounders);
    assert_eq!(outcome.status, ActionStatus::Warning);
    assert!(outcome.message.starts_with("No usable result"));
    assert!(outcome.raw.is_some());
    assert!(outcome.report.is_none());
}

#[test]
fn critique_validates_dag_first() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![]));
    let mut session = ready_session();

    session.set_dag_text("{'smoking': [lung cancer]}");
    let outcome = assistant.run(&mut session, SuggestionKind::CritiqueGraph);
    assert_eq!(outcome.status, ActionStatus::Warning);
    assert!(outcome.message.starts_with("Invalid DAG"));

    // Default "{}" means no structure was entered.
    session.set_dag_text("{}");
    let outcome = assistant.run(&mut session, SuggestionKind::CritiqueGraph);
    assert!(outcome.message.contains("no structure provided"));

    session.set_dag_text("{'smoking': ['lung cancer']}");
    session.domain_expertises = None;
    let outcome = assistant.run(&mut session, SuggestionKind::CritiqueGraph);
    assert_eq!(outcome.message, MISSING_CRITIQUE_CONTEXT_WARNING);
    assert_eq!(assistant.suggester().calls(), 0);
}

#[test]
fn critique_sends_graph_and_notes_cycles() {
    let assistant = CausalAssistant::new(ScriptedSuggester::new(vec![Ok(json!({
        "smoking": {"lung cancer": 0.9},
        "stress": ["smoking"]
    }))]));
    let mut session = ready_session();
    session.set_dag_text(r#"{"smoking": ["stress"], "stress": ["smoking"]}"#);
    let outcome = assistant.run(&mut session, SuggestionKind::CritiqueGraph);
    assert!(outcome.is_success(), "{}", outcome.message);
    assert!(outcome.message.contains("not acyclic"));
    assert_eq!(outcome.output.unwrap().relationships.len(), 2);

    let seen = assistant.suggester().seen.borrow();
    assert_eq!(seen[0].graph.as_ref().unwrap().edge_count(), 2);
}

#[test]
fn facades_normalize_replies() {
    let modeler = ModelSuggester::new(ScriptedSuggester::new(vec![Ok(json!({
        "experts": ["epidemiology", "toxicology"]
    }))]));
    let expertises = modeler
        .suggest_domain_expertises(&["smoking".into()])
        .unwrap();
    assert_eq!(expertises, ["epidemiology", "toxicology"]);

    let validator = ValidationSuggester::new(ScriptedSuggester::new(vec![Ok(json!("sunburn"))]));
    let output = validator
        .suggest_negative_controls("smoking", "lung cancer", &["smoking".into()], &[])
        .unwrap();
    assert_eq!(output.variables[0].name, "sunburn");
}

#[test]
fn identification_facade_sends_one_request_per_action() {
    let scripted = ScriptedSuggester::new(vec![
        Ok(json!({"confounders": ["age", "income"]})),
        Ok(json!([{"name": "tar deposits", "score": 0.9}])),
        Ok(json!({"cigarette tax": {"impact": "shifts smoking rates", "confidence": 0.3}})),
    ]);
    let identifier = IdentificationSuggester::new(&scripted);
    let factors = vec!["smoking".to_string(), "lung cancer".to_string()];
    let expertises = vec!["epidemiology".to_string()];

    let backdoor = identifier
        .suggest_backdoor("smoking", "lung cancer", &factors, &expertises)
        .unwrap();
    let names: Vec<_> = backdoor.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["age", "income"]);
    assert!(backdoor
        .variables
        .iter()
        .all(|v| v.category.as_deref() == Some("confounders")));

    let mediators = identifier
        .suggest_mediators("smoking", "lung cancer", &factors, &expertises)
        .unwrap();
    assert_eq!(mediators.variables[0].name, "tar deposits");
    assert_eq!(mediators.variables[0].band, ConfidenceBand::High);

    let ivs = identifier
        .suggest_ivs("smoking", "lung cancer", &factors, &expertises)
        .unwrap();
    assert_eq!(ivs.variables[0].name, "cigarette tax");
    assert_eq!(ivs.variables[0].impact.as_deref(), Some("shifts smoking rates"));
    assert_eq!(ivs.variables[0].band, ConfidenceBand::Low);

    let seen = scripted.seen.borrow();
    let kinds: Vec<_> = seen.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        [
            SuggestionKind::BackdoorSet,
            SuggestionKind::MediatorSet,
            SuggestionKind::InstrumentalVariables,
        ]
    );
    assert!(seen
        .iter()
        .all(|r| r.treatment.as_deref() == Some("smoking") && r.outcome.as_deref() == Some("lung cancer")));
}
