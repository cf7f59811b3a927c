//! # causeway-graph
//!
//! Turns untrusted text and untyped LLM output into validated, uniform data.
//! DAG text validation, output-shape normalization, cycle reporting over a
//! `petgraph` index, and text/HTML/diagram rendering.

pub mod dag;
pub mod graph;
pub mod render;
pub mod shape;

pub use dag::{parse_dag_text, validate_dag_text, DagValidation};
pub use graph::IndexedGraph;
pub use render::{build_report, RenderOptions, SuggestionReport};
pub use shape::{display_name, normalize, NormalizeMode};
