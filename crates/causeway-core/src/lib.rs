//! # causeway-core
//!
//! Foundation crate for the Causeway causal-analysis assistant.
//! Defines the causal graph and record models, errors, config, constants,
//! tracing setup, and the suggester trait. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausewayConfig;
pub use errors::{CausewayError, CausewayResult};
pub use models::{
    CausalGraph, ConfidenceBand, RelationshipRecord, Score, SessionContext, SuggestionKind,
    VariableRecord,
};
pub use traits::ICausalSuggester;
