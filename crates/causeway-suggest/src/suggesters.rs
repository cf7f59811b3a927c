//! Step-level facades: one type per analysis step, one method per action.
//!
//! Each method builds the request, makes exactly one suggester call, and
//! normalizes the reply. Prerequisite checks live in `CausalAssistant`.

use causeway_core::errors::CausewayResult;
use causeway_core::models::{
    CausalGraph, NormalizedOutput, RelationshipStrategy, SuggestionKind, SuggestionRequest,
};
use causeway_core::traits::ICausalSuggester;
use causeway_graph::{normalize, NormalizeMode};

fn run<S: ICausalSuggester>(suggester: &S, request: &SuggestionRequest) -> CausewayResult<NormalizedOutput> {
    let raw = suggester.suggest(request)?;
    Ok(normalize(&raw, NormalizeMode::for_kind(request.kind))?)
}

/// Model suggestion: expertises, confounders, pair-wise relationships.
pub struct ModelSuggester<S> {
    suggester: S,
}

impl<S: ICausalSuggester> ModelSuggester<S> {
    pub fn new(suggester: S) -> Self {
        Self { suggester }
    }

    /// Domain expertises as plain names, in reply order.
    pub fn suggest_domain_expertises(&self, factors: &[String]) -> CausewayResult<Vec<String>> {
        let output = run(&self.suggester, &SuggestionRequest::domain_expertises(factors))?;
        Ok(output.variable_names())
    }

    pub fn suggest_confounders(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        let request = SuggestionRequest::treatment_outcome(
            SuggestionKind::Confounders,
            treatment,
            outcome,
            factors,
            domain_expertises,
        );
        run(&self.suggester, &request)
    }

    pub fn suggest_relationships(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
        strategy: RelationshipStrategy,
    ) -> CausewayResult<NormalizedOutput> {
        let request = SuggestionRequest::relationships(
            treatment,
            outcome,
            factors,
            domain_expertises,
            strategy,
        );
        run(&self.suggester, &request)
    }
}

/// Identification: backdoor set, mediators, instruments.
pub struct IdentificationSuggester<S> {
    suggester: S,
}

impl<S: ICausalSuggester> IdentificationSuggester<S> {
    pub fn new(suggester: S) -> Self {
        Self { suggester }
    }

    fn ask(
        &self,
        kind: SuggestionKind,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        let request =
            SuggestionRequest::treatment_outcome(kind, treatment, outcome, factors, domain_expertises);
        run(&self.suggester, &request)
    }

    pub fn suggest_backdoor(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        self.ask(SuggestionKind::BackdoorSet, treatment, outcome, factors, domain_expertises)
    }

    pub fn suggest_mediators(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        self.ask(SuggestionKind::MediatorSet, treatment, outcome, factors, domain_expertises)
    }

    pub fn suggest_ivs(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        self.ask(
            SuggestionKind::InstrumentalVariables,
            treatment,
            outcome,
            factors,
            domain_expertises,
        )
    }
}

/// Validation: critique, latent confounders, negative controls.
pub struct ValidationSuggester<S> {
    suggester: S,
}

impl<S: ICausalSuggester> ValidationSuggester<S> {
    pub fn new(suggester: S) -> Self {
        Self { suggester }
    }

    pub fn critique_graph(
        &self,
        factors: &[String],
        graph: &CausalGraph,
        domain_expertises: &[String],
        strategy: RelationshipStrategy,
    ) -> CausewayResult<NormalizedOutput> {
        let request = SuggestionRequest::critique_graph(factors, graph, domain_expertises, strategy);
        run(&self.suggester, &request)
    }

    pub fn suggest_latent_confounders(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        let request = SuggestionRequest::treatment_outcome(
            SuggestionKind::LatentConfounders,
            treatment,
            outcome,
            factors,
            domain_expertises,
        );
        run(&self.suggester, &request)
    }

    pub fn suggest_negative_controls(
        &self,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> CausewayResult<NormalizedOutput> {
        let request = SuggestionRequest::treatment_outcome(
            SuggestionKind::NegativeControls,
            treatment,
            outcome,
            factors,
            domain_expertises,
        );
        run(&self.suggester, &request)
    }
}
