use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CausalGraph;

/// The three analysis steps the assistant walks a user through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStep {
    ModelSuggestion,
    IdentificationSuggestion,
    ValidationSuggestion,
}

impl AnalysisStep {
    pub const ALL: [AnalysisStep; 3] = [
        Self::ModelSuggestion,
        Self::IdentificationSuggestion,
        Self::ValidationSuggestion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ModelSuggestion => "Model Suggestion",
            Self::IdentificationSuggestion => "Identification Suggestion",
            Self::ValidationSuggestion => "Validation Suggestion",
        }
    }

    /// Actions offered under this step, in display order.
    pub fn kinds(&self) -> &'static [SuggestionKind] {
        match self {
            Self::ModelSuggestion => &[
                SuggestionKind::DomainExpertises,
                SuggestionKind::Confounders,
                SuggestionKind::PairwiseRelationships,
            ],
            Self::IdentificationSuggestion => &[
                SuggestionKind::BackdoorSet,
                SuggestionKind::MediatorSet,
                SuggestionKind::InstrumentalVariables,
            ],
            Self::ValidationSuggestion => &[
                SuggestionKind::CritiqueGraph,
                SuggestionKind::LatentConfounders,
                SuggestionKind::NegativeControls,
            ],
        }
    }
}

/// One user-triggered suggestion action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    DomainExpertises,
    Confounders,
    PairwiseRelationships,
    BackdoorSet,
    MediatorSet,
    InstrumentalVariables,
    CritiqueGraph,
    LatentConfounders,
    NegativeControls,
}

impl SuggestionKind {
    pub const ALL: [SuggestionKind; 9] = [
        Self::DomainExpertises,
        Self::Confounders,
        Self::PairwiseRelationships,
        Self::BackdoorSet,
        Self::MediatorSet,
        Self::InstrumentalVariables,
        Self::CritiqueGraph,
        Self::LatentConfounders,
        Self::NegativeControls,
    ];

    pub fn step(&self) -> AnalysisStep {
        match self {
            Self::DomainExpertises | Self::Confounders | Self::PairwiseRelationships => {
                AnalysisStep::ModelSuggestion
            }
            Self::BackdoorSet | Self::MediatorSet | Self::InstrumentalVariables => {
                AnalysisStep::IdentificationSuggestion
            }
            Self::CritiqueGraph | Self::LatentConfounders | Self::NegativeControls => {
                AnalysisStep::ValidationSuggestion
            }
        }
    }

    /// Heading shown above the rendered result.
    pub fn title(&self) -> &'static str {
        match self {
            Self::DomainExpertises => "Suggested Domain Expertises",
            Self::Confounders => "Suggested Potential Confounders",
            Self::PairwiseRelationships => "Suggested Pair-wise Relationships (Potential DAG Edges)",
            Self::BackdoorSet => "Suggested Backdoor Set",
            Self::MediatorSet => "Suggested Mediator Set",
            Self::InstrumentalVariables => "Suggested Instrumental Variables (IVs)",
            Self::CritiqueGraph => "Critique of the DAG Edges",
            Self::LatentConfounders => "Suggested Latent Confounders",
            Self::NegativeControls => "Suggested Negative Controls",
        }
    }

    /// Whether results are edges (as opposed to a set of variables).
    pub fn yields_relationships(&self) -> bool {
        matches!(self, Self::PairwiseRelationships | Self::CritiqueGraph)
    }

    /// Whether the action needs treatment and outcome.
    pub fn needs_treatment_outcome(&self) -> bool {
        !matches!(self, Self::DomainExpertises | Self::CritiqueGraph)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DomainExpertises => "domain_expertises",
            Self::Confounders => "confounders",
            Self::PairwiseRelationships => "pairwise_relationships",
            Self::BackdoorSet => "backdoor_set",
            Self::MediatorSet => "mediator_set",
            Self::InstrumentalVariables => "instrumental_variables",
            Self::CritiqueGraph => "critique_graph",
            Self::LatentConfounders => "latent_confounders",
            Self::NegativeControls => "negative_controls",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionKind {
    type Err = String;

    /// Accepts the snake_case name, kebab-case, or a short alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let kind = match key.as_str() {
            "domain_expertises" | "expertises" | "expertise" => Self::DomainExpertises,
            "confounders" => Self::Confounders,
            "pairwise_relationships" | "relationships" | "dag" => Self::PairwiseRelationships,
            "backdoor_set" | "backdoor" => Self::BackdoorSet,
            "mediator_set" | "mediators" => Self::MediatorSet,
            "instrumental_variables" | "ivs" => Self::InstrumentalVariables,
            "critique_graph" | "critique" => Self::CritiqueGraph,
            "latent_confounders" | "latent" => Self::LatentConfounders,
            "negative_controls" | "negative" => Self::NegativeControls,
            _ => return Err(format!("unknown suggestion kind {s:?}")),
        };
        Ok(kind)
    }
}

/// How candidate edges are enumerated when asking for relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStrategy {
    /// Ask about every ordered pair of factors.
    #[default]
    Pairwise,
    /// Ask for the parents of each factor.
    Parent,
    /// Ask for the children of each factor.
    Child,
    /// Ask for confounders of each pair.
    Confounder,
}

impl RelationshipStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Confounder => "confounder",
        }
    }
}

impl FromStr for RelationshipStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pairwise" => Ok(Self::Pairwise),
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            "confounder" => Ok(Self::Confounder),
            other => Err(format!("unknown relationship strategy {other:?}")),
        }
    }
}

/// Everything the suggestion collaborator receives for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub kind: SuggestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub factors: Vec<String>,
    #[serde(default)]
    pub domain_expertises: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<RelationshipStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<CausalGraph>,
}

impl SuggestionRequest {
    fn base(kind: SuggestionKind, factors: &[String]) -> Self {
        Self {
            kind,
            treatment: None,
            outcome: None,
            factors: factors.to_vec(),
            domain_expertises: Vec::new(),
            strategy: None,
            graph: None,
        }
    }

    pub fn domain_expertises(factors: &[String]) -> Self {
        Self::base(SuggestionKind::DomainExpertises, factors)
    }

    /// A treatment/outcome question: confounders, backdoor, mediators, IVs,
    /// latent confounders, or negative controls.
    pub fn treatment_outcome(
        kind: SuggestionKind,
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
    ) -> Self {
        Self {
            treatment: Some(treatment.to_string()),
            outcome: Some(outcome.to_string()),
            domain_expertises: domain_expertises.to_vec(),
            ..Self::base(kind, factors)
        }
    }

    pub fn relationships(
        treatment: &str,
        outcome: &str,
        factors: &[String],
        domain_expertises: &[String],
        strategy: RelationshipStrategy,
    ) -> Self {
        Self {
            strategy: Some(strategy),
            ..Self::treatment_outcome(
                SuggestionKind::PairwiseRelationships,
                treatment,
                outcome,
                factors,
                domain_expertises,
            )
        }
    }

    pub fn critique_graph(
        factors: &[String],
        graph: &CausalGraph,
        domain_expertises: &[String],
        strategy: RelationshipStrategy,
    ) -> Self {
        Self {
            domain_expertises: domain_expertises.to_vec(),
            strategy: Some(strategy),
            graph: Some(graph.clone()),
            ..Self::base(SuggestionKind::CritiqueGraph, factors)
        }
    }
}
