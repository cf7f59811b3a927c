//! Renderers: placeholder on empty input, band labels, escaping, diagrams.

use causeway_core::constants::NO_DATA_PLACEHOLDER;
use causeway_core::models::{NormalizedOutput, RelationshipRecord, SuggestionKind, VariableRecord};
use causeway_graph::render::{
    format_relationships, format_value, format_variables, graph_to_dot, graph_to_mermaid,
    relationships_to_dot, relationships_to_mermaid, render_html, render_text,
};
use causeway_graph::{build_report, parse_dag_text, NormalizeMode, RenderOptions};
use serde_json::json;

fn opts() -> RenderOptions {
    RenderOptions::default()
}

#[test]
fn every_formatter_shows_placeholder_for_empty_input() {
    for value in [json!({}), json!([]), json!("")] {
        for mode in [NormalizeMode::Relationships, NormalizeMode::Variables] {
            assert_eq!(format_value(&value, mode, &opts()).unwrap(), NO_DATA_PLACEHOLDER);
        }
    }
    assert_eq!(format_relationships(&[], &opts()), NO_DATA_PLACEHOLDER);
    assert_eq!(format_variables(&[], &opts()), NO_DATA_PLACEHOLDER);

    let report = build_report(SuggestionKind::Confounders, &NormalizedOutput::default(), &opts());
    assert!(render_text(&report).contains(NO_DATA_PLACEHOLDER));
    assert!(render_html(&report).contains(NO_DATA_PLACEHOLDER));
    assert!(relationships_to_dot(&[], &opts()).contains(NO_DATA_PLACEHOLDER));
    assert!(relationships_to_mermaid(&[], &opts()).contains(NO_DATA_PLACEHOLDER));
}

#[test]
fn relationship_lines_show_band_and_score() {
    let records = vec![
        RelationshipRecord::new("smoking", "lung_cancer", Some(0.85)),
        RelationshipRecord::new("stress", "smoking", None),
    ];
    let text = format_relationships(&records, &opts());
    assert_eq!(
        text,
        "Smoking -> Lung Cancer (high, 0.85)\nStress -> Smoking (medium)"
    );

    let raw = RenderOptions {
        show_scores: false,
        title_case_names: false,
    };
    assert_eq!(
        format_relationships(&records[..1], &raw),
        "smoking -> lung_cancer (high)"
    );
}

#[test]
fn variable_lines_carry_category_and_detail() {
    let records = vec![VariableRecord::new("genetics")
        .with_category("biological")
        .with_impact("Raises risk.")
        .with_score(0.3)];
    assert_eq!(
        format_variables(&records, &opts()),
        "[Biological] Genetics (low, 0.30): Raises risk."
    );
}

#[test]
fn text_report_lists_sections() {
    let output = NormalizedOutput {
        relationships: vec![
            RelationshipRecord::new("a", "b", Some(0.9)),
            RelationshipRecord::new("b", "c", Some(0.1)),
        ],
        variables: Vec::new(),
    };
    let report = build_report(SuggestionKind::PairwiseRelationships, &output, &opts());
    let text = render_text(&report);
    assert!(text.starts_with("Suggested Pair-wise Relationships (Potential DAG Edges)\n"));
    assert!(text.contains("High confidence:\n  - A -> B (high, 0.90)"));
    assert!(text.contains("Low confidence:\n  - B -> C (low, 0.10)"));
}

#[test]
fn html_escapes_names() {
    let output = NormalizedOutput {
        relationships: Vec::new(),
        variables: vec![VariableRecord::new("<script>").with_impact("a & b")],
    };
    let html = render_html(&build_report(SuggestionKind::LatentConfounders, &output, &opts()));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;Script&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(html.contains("band-medium"));
}

#[test]
fn validated_graph_diagrams() {
    let graph = parse_dag_text(r#"{"smoking": ["lung cancer"], "exercise habits": ["lung cancer"]}"#)
        .unwrap();
    let dot = graph_to_dot(&graph, &opts());
    assert!(dot.starts_with("digraph causal {"));
    assert!(dot.contains("\"Smoking\" -> \"Lung Cancer\";"));
    assert!(dot.contains("\"Exercise Habits\" -> \"Lung Cancer\";"));

    let mermaid = graph_to_mermaid(&graph, &opts());
    assert!(mermaid.starts_with("flowchart LR"));
    assert_eq!(mermaid.matches("-->").count(), 2);
    assert!(mermaid.contains("[\"Lung Cancer\"]"));
}

#[test]
fn proposed_edges_are_styled_by_band() {
    let records = vec![
        RelationshipRecord::new("a", "b", Some(0.9)),
        RelationshipRecord::new("a", "c", Some(0.2)),
    ];
    let dot = relationships_to_dot(&records, &opts());
    assert!(dot.contains("label=\"high 0.90\""));
    assert!(dot.contains("style=dashed"));
    let mermaid = relationships_to_mermaid(&records, &opts());
    assert!(mermaid.contains("n0 -->|high| n1"));
    assert!(mermaid.contains("n0 -->|low| n2"));
}
