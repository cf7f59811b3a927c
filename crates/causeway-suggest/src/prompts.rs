//! Prompt construction per suggestion kind.
//!
//! Every prompt asks for a single JSON value in one of the shapes the
//! normalizer accepts, so no kind depends on a fixed schema.

use causeway_core::models::{RelationshipStrategy, SuggestionKind, SuggestionRequest};

use crate::transport::ChatMessage;

pub const SYSTEM_PROMPT: &str = "You are an expert in causal inference assisting an analyst. \
Answer with a single JSON value and nothing else. Use the exact variable names you are given \
where possible. Confidence scores are numbers between 0 and 1.";

/// System and user messages for one request.
pub fn build_messages(request: &SuggestionRequest) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt(request))]
}

/// The user turn: context block, then the task, then the expected shape.
pub fn user_prompt(request: &SuggestionRequest) -> String {
    let mut prompt = context_block(request);
    prompt.push('\n');
    prompt.push_str(&task(request));
    prompt.push_str("\n\n");
    prompt.push_str(expected_shape(request.kind));
    prompt
}

fn context_block(request: &SuggestionRequest) -> String {
    let mut lines = vec![format!("Factors: {}", quoted_list(&request.factors))];
    if let Some(treatment) = &request.treatment {
        lines.push(format!("Treatment: \"{treatment}\""));
    }
    if let Some(outcome) = &request.outcome {
        lines.push(format!("Outcome: \"{outcome}\""));
    }
    if !request.domain_expertises.is_empty() {
        lines.push(format!(
            "Answer from the perspective of experts in: {}",
            request.domain_expertises.join(", ")
        ));
    }
    if let Some(graph) = &request.graph {
        let edges: Vec<String> = graph
            .edges()
            .map(|(s, t)| format!("\"{s}\" -> \"{t}\""))
            .collect();
        lines.push(format!("Proposed DAG edges: {}", edges.join(", ")));
    }
    lines.join("\n")
}

fn task(request: &SuggestionRequest) -> String {
    let t = request.treatment.as_deref().unwrap_or("the treatment");
    let o = request.outcome.as_deref().unwrap_or("the outcome");
    match request.kind {
        SuggestionKind::DomainExpertises => {
            "Which domains of expertise are needed to reason about causal relationships \
             among these factors?"
                .to_string()
        }
        SuggestionKind::Confounders => format!(
            "Which variables are potential confounders of the effect of \"{t}\" on \"{o}\"? \
             Include relevant variables that are not in the factor list."
        ),
        SuggestionKind::PairwiseRelationships => format!(
            "{} Consider the effect of \"{t}\" on \"{o}\" in particular.",
            strategy_task(request.strategy.unwrap_or_default())
        ),
        SuggestionKind::BackdoorSet => format!(
            "Which variables form a backdoor adjustment set for estimating the effect of \
             \"{t}\" on \"{o}\"?"
        ),
        SuggestionKind::MediatorSet => format!(
            "Which variables mediate the effect of \"{t}\" on \"{o}\"?"
        ),
        SuggestionKind::InstrumentalVariables => format!(
            "Which variables are valid instrumental variables for the effect of \"{t}\" on \
             \"{o}\": they affect \"{t}\" and reach \"{o}\" only through \"{t}\"?"
        ),
        SuggestionKind::CritiqueGraph => format!(
            "Critique each proposed edge. {} Keep the edges you agree with, reverse or drop \
             the ones you do not, and add missing edges.",
            strategy_task(request.strategy.unwrap_or_default())
        ),
        SuggestionKind::LatentConfounders => format!(
            "Which unobserved (latent) variables could confound the effect of \"{t}\" on \
             \"{o}\"? Exclude the listed factors."
        ),
        SuggestionKind::NegativeControls => format!(
            "Which variables are suitable negative controls for the effect of \"{t}\" on \
             \"{o}\": variables with no causal link to \"{o}\" through \"{t}\"?"
        ),
    }
}

fn strategy_task(strategy: RelationshipStrategy) -> &'static str {
    match strategy {
        RelationshipStrategy::Pairwise => {
            "For every ordered pair of factors, decide whether the first directly causes the second."
        }
        RelationshipStrategy::Parent => "For each factor, list the factors that directly cause it.",
        RelationshipStrategy::Child => {
            "For each factor, list the factors it directly causes."
        }
        RelationshipStrategy::Confounder => {
            "For each pair of factors, identify common causes and express them as edges."
        }
    }
}

fn expected_shape(kind: SuggestionKind) -> &'static str {
    if kind.yields_relationships() {
        "Respond with a JSON list of [source, target, confidence] triples, for example \
         [[\"smoking\", \"lung cancer\", 0.9]]."
    } else if kind == SuggestionKind::DomainExpertises {
        "Respond with a JSON list of strings, for example [\"epidemiology\", \"pulmonology\"]."
    } else {
        "Respond with a JSON object mapping each variable name to an object with \"impact\" \
         (one sentence), \"recommendation\" (one sentence) and \"confidence\" (0 to 1)."
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("\"{i}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
