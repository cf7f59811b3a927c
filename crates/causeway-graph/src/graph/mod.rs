//! petgraph index over validated graphs and proposed edges.

pub mod cycles;
pub mod indexed;

pub use cycles::{find_cycles, is_acyclic};
pub use indexed::{CausalEdge, IndexedGraph, VariableNode};
