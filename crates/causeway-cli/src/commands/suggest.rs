use anyhow::Result;
use causeway_core::models::{parse_factors, RelationshipStrategy, SessionContext, SuggestionKind};
use causeway_core::CausewayConfig;
use causeway_graph::RenderOptions;
use causeway_suggest::{CausalAssistant, LlmSuggester};

use crate::output::render_outcome;

pub struct SuggestArgs {
    pub kind: SuggestionKind,
    pub factors: Option<String>,
    pub treatment: Option<String>,
    pub outcome: Option<String>,
    pub expertises: Option<String>,
    pub dag: Option<String>,
    pub strategy: RelationshipStrategy,
}

pub fn run(config: &CausewayConfig, args: SuggestArgs) -> Result<bool> {
    // Fails here, before any input is processed, when no key is configured.
    let suggester = LlmSuggester::from_config(config)?;
    let assistant = CausalAssistant::new(suggester)
        .with_render_options(RenderOptions::from(&config.display))
        .with_strategy(args.strategy);

    let mut session = session_from_args(config, &args);
    let outcome = assistant.run(&mut session, args.kind);
    print!("{}", render_outcome(&outcome, config.display.effective_format())?);
    Ok(outcome.is_success())
}

fn session_from_args(config: &CausewayConfig, args: &SuggestArgs) -> SessionContext {
    let mut session = SessionContext::new(config.llm.effective_model());
    if let Some(factors) = &args.factors {
        session.set_factors_from_text(factors);
    }
    if let Some(treatment) = &args.treatment {
        session.set_treatment(treatment);
    }
    if let Some(outcome) = &args.outcome {
        session.set_outcome(outcome);
    }
    if let Some(expertises) = &args.expertises {
        session.set_domain_expertises(parse_factors(expertises));
    }
    if let Some(dag) = &args.dag {
        session.set_dag_text(dag);
    }
    session
}
