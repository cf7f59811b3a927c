//! # causeway-suggest
//!
//! The suggestion side of Causeway: an OpenAI-compatible chat client behind
//! `ICausalSuggester`, per-kind prompts, response extraction, the three
//! step-level suggester facades, and `CausalAssistant`, which runs one
//! user-triggered action against a `SessionContext`.

pub mod assistant;
pub mod llm_suggester;
pub mod prompts;
pub mod response;
pub mod suggesters;
pub mod transport;

pub use assistant::{ActionOutcome, ActionStatus, CausalAssistant};
pub use llm_suggester::LlmSuggester;
pub use suggesters::{IdentificationSuggester, ModelSuggester, ValidationSuggester};
