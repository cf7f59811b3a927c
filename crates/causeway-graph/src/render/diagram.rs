//! DOT and Mermaid exports for validated graphs and proposed edges.

use std::collections::BTreeMap;

use causeway_core::constants::NO_DATA_PLACEHOLDER;
use causeway_core::models::{CausalGraph, ConfidenceBand, RelationshipRecord};

use super::RenderOptions;

/// Graphviz DOT for a validated graph.
pub fn graph_to_dot(graph: &CausalGraph, opts: &RenderOptions) -> String {
    let records = graph.to_relationships();
    let mut dot = dot_header();
    if graph.is_empty() {
        dot.push_str(&format!("    // {NO_DATA_PLACEHOLDER}\n"));
    }
    // Sources with no targets still get a node.
    for name in graph.variables() {
        dot.push_str(&format!("    \"{}\";\n", escape_dot(&opts.name(name))));
    }
    for rec in &records {
        dot.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape_dot(&opts.name(&rec.source)),
            escape_dot(&opts.name(&rec.target))
        ));
    }
    dot.push_str("}\n");
    dot
}

/// Graphviz DOT for proposed edges, styled by confidence band.
pub fn relationships_to_dot(records: &[RelationshipRecord], opts: &RenderOptions) -> String {
    let mut dot = dot_header();
    if records.is_empty() {
        dot.push_str(&format!("    // {NO_DATA_PLACEHOLDER}\n"));
    }
    for rec in records {
        let label = match rec.score {
            Some(score) if opts.show_scores => format!("{} {score}", rec.band()),
            _ => rec.band().to_string(),
        };
        dot.push_str(&format!(
            "    \"{}\" -> \"{}\" [label=\"{}\", {}];\n",
            escape_dot(&opts.name(&rec.source)),
            escape_dot(&opts.name(&rec.target)),
            label,
            band_dot_style(rec.band())
        ));
    }
    dot.push_str("}\n");
    dot
}

/// Mermaid flowchart for a validated graph.
pub fn graph_to_mermaid(graph: &CausalGraph, opts: &RenderOptions) -> String {
    let records = graph.to_relationships();
    let names: Vec<&str> = graph.variables().into_iter().collect();
    mermaid(&names, &records, opts, false)
}

/// Mermaid flowchart for proposed edges, labelled by band.
pub fn relationships_to_mermaid(records: &[RelationshipRecord], opts: &RenderOptions) -> String {
    let mut names: Vec<&str> = Vec::new();
    for rec in records {
        for name in [rec.source.as_str(), rec.target.as_str()] {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    mermaid(&names, records, opts, true)
}

fn mermaid(
    names: &[&str],
    records: &[RelationshipRecord],
    opts: &RenderOptions,
    label_edges: bool,
) -> String {
    let mut out = String::from("flowchart LR\n");
    if names.is_empty() {
        out.push_str(&format!("    %% {NO_DATA_PLACEHOLDER}\n"));
        return out;
    }
    // Mermaid ids must be plain identifiers; names go in the label.
    let ids: BTreeMap<&str, String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, format!("n{i}")))
        .collect();
    for name in names {
        out.push_str(&format!(
            "    {}[\"{}\"]\n",
            ids[name],
            escape_mermaid(&opts.name(name))
        ));
    }
    for rec in records {
        let (Some(from), Some(to)) = (ids.get(rec.source.as_str()), ids.get(rec.target.as_str()))
        else {
            continue;
        };
        if label_edges {
            out.push_str(&format!("    {from} -->|{}| {to}\n", rec.band()));
        } else {
            out.push_str(&format!("    {from} --> {to}\n"));
        }
    }
    out
}

fn dot_header() -> String {
    let mut dot = String::from("digraph causal {\n");
    dot.push_str("    rankdir=LR;\n");
    dot.push_str("    node [shape=box, fontname=\"Helvetica\"];\n");
    dot
}

fn band_dot_style(band: ConfidenceBand) -> &'static str {
    match band {
        ConfidenceBand::High => "color=\"#1a7f37\", penwidth=2",
        ConfidenceBand::Medium => "color=\"#9a6700\"",
        ConfidenceBand::Low => "color=\"#cf222e\", style=dashed",
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn escape_mermaid(s: &str) -> String {
    s.replace('"', "#quot;")
}
