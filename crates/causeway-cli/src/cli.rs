//! Command-line structure.

use std::path::PathBuf;

use causeway_core::config::OutputFormat;
use causeway_core::models::{RelationshipStrategy, SuggestionKind};
use clap::{Parser, Subcommand, ValueEnum};

/// Causeway - LLM-assisted causal analysis
///
/// Validate DAG text, normalize LLM output, and run suggestion actions
/// (domain expertises, confounders, relationships, identification sets,
/// critique) against an OpenAI-compatible backend.
#[derive(Parser, Debug)]
#[command(name = "causeway")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format; overrides config
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Project directory containing causeway.toml
    #[arg(long, global = true, default_value = ".")]
    pub project: PathBuf,

    /// LLM model; overrides config
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Chat-completions endpoint URL; overrides config
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds; overrides config
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate DAG text and print its edges or a diagram
    Validate {
        /// DAG text, e.g. "{'smoking': ['lung cancer']}"
        text: Option<String>,
        /// Read DAG text from a file ("-" for stdin)
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print a diagram instead of the edge list
        #[arg(long)]
        diagram: Option<DiagramArg>,
    },

    /// Normalize a raw LLM reply (JSON or literal) into records
    Normalize {
        /// File with the reply ("-" for stdin)
        file: PathBuf,
        /// Suggestion kind the reply answers; selects how keys are read
        #[arg(short, long, value_enum, default_value_t = KindArg::PairwiseRelationships)]
        kind: KindArg,
        /// Print proposed edges as a diagram
        #[arg(long)]
        diagram: Option<DiagramArg>,
    },

    /// Run one suggestion action
    Suggest {
        /// Action to run
        #[arg(value_enum)]
        kind: KindArg,
        /// Comma-separated factors
        #[arg(long)]
        factors: Option<String>,
        #[arg(long)]
        treatment: Option<String>,
        #[arg(long)]
        outcome: Option<String>,
        /// Comma-separated domain expertises from an earlier run
        #[arg(long)]
        expertises: Option<String>,
        /// DAG text for critique_graph
        #[arg(long)]
        dag: Option<String>,
        /// Relationship strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Pairwise)]
        strategy: StrategyArg,
    },

    /// Interactive session that keeps factors, treatment, outcome,
    /// expertises, and DAG text across actions
    Session {
        /// Relationship strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::Pairwise)]
        strategy: StrategyArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DiagramArg {
    Dot,
    Mermaid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum KindArg {
    #[value(aliases = ["expertises", "expertise"])]
    DomainExpertises,
    Confounders,
    #[value(aliases = ["relationships", "dag"])]
    PairwiseRelationships,
    #[value(alias = "backdoor")]
    BackdoorSet,
    #[value(alias = "mediators")]
    MediatorSet,
    #[value(alias = "ivs")]
    InstrumentalVariables,
    #[value(alias = "critique")]
    CritiqueGraph,
    #[value(alias = "latent")]
    LatentConfounders,
    #[value(alias = "negative")]
    NegativeControls,
}

impl From<KindArg> for SuggestionKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::DomainExpertises => Self::DomainExpertises,
            KindArg::Confounders => Self::Confounders,
            KindArg::PairwiseRelationships => Self::PairwiseRelationships,
            KindArg::BackdoorSet => Self::BackdoorSet,
            KindArg::MediatorSet => Self::MediatorSet,
            KindArg::InstrumentalVariables => Self::InstrumentalVariables,
            KindArg::CritiqueGraph => Self::CritiqueGraph,
            KindArg::LatentConfounders => Self::LatentConfounders,
            KindArg::NegativeControls => Self::NegativeControls,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Pairwise,
    Parent,
    Child,
    Confounder,
}

impl From<StrategyArg> for RelationshipStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Pairwise => Self::Pairwise,
            StrategyArg::Parent => Self::Parent,
            StrategyArg::Child => Self::Child,
            StrategyArg::Confounder => Self::Confounder,
        }
    }
}
