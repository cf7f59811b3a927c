//! Cycle reporting with Tarjan's SCC.
//!
//! Cycles are surfaced to the user, never repaired or rejected.

use petgraph::algo::{is_cyclic_directed, tarjan_scc};

use super::IndexedGraph;

/// Every cycle in the graph as a list of variable names.
///
/// Multi-node SCCs are reported with names in sorted order; self-loops are
/// reported as single-name cycles.
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| {
            scc.len() > 1 || graph.graph.find_edge(scc[0], scc[0]).is_some()
        })
        .map(|scc| {
            let mut names: Vec<String> = scc
                .into_iter()
                .filter_map(|idx| graph.name_of(idx).map(str::to_string))
                .collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();
    cycles
}

pub fn is_acyclic(graph: &IndexedGraph) -> bool {
    !is_cyclic_directed(&graph.graph)
}
