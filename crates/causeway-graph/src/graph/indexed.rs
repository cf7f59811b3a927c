//! petgraph::StableGraph wrapper keyed by variable name.

use std::collections::HashMap;

use causeway_core::models::CausalGraph;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

/// A node in the graph: one named variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableNode {
    pub name: String,
}

/// Weight on an edge. Asserted edges carry no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CausalEdge;

/// The underlying directed graph type.
pub type CausalStableGraph = StableGraph<VariableNode, CausalEdge, Directed>;

/// Wrapper providing indexed access to the graph.
pub struct IndexedGraph {
    pub graph: CausalStableGraph,
    /// Map from variable name → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Index a validated graph. Sources with no targets still get a node.
    pub fn from_causal_graph(causal: &CausalGraph) -> Self {
        let mut indexed = Self::new();
        for source in causal.sources() {
            indexed.ensure_node(source);
        }
        for (source, target) in causal.edges() {
            indexed.add_edge(source, target);
        }
        indexed
    }

    /// Get or create a node for the given variable.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(VariableNode {
            name: name.to_string(),
        });
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Add an edge; a repeated edge is stored once.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let src = self.ensure_node(source);
        let tgt = self.ensure_node(target);
        if self.graph.find_edge(src, tgt).is_none() {
            self.graph.add_edge(src, tgt, CausalEdge);
        }
    }

    pub fn name_of(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.name.as_str())
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}
