//! Data model: causal graphs, normalized records, confidence, and session state.

pub mod causal_graph;
pub mod confidence;
pub mod normalized;
pub mod relationship;
pub mod session;
pub mod suggestion;
pub mod variable;

pub use causal_graph::CausalGraph;
pub use confidence::{ConfidenceBand, Score};
pub use normalized::NormalizedOutput;
pub use relationship::RelationshipRecord;
pub use session::{parse_factors, SessionContext};
pub use suggestion::{AnalysisStep, RelationshipStrategy, SuggestionKind, SuggestionRequest};
pub use variable::VariableRecord;
