use std::collections::BTreeMap;

use causeway_core::models::session::parse_factors;
use causeway_core::models::*;

#[test]
fn relationship_record_clamps_and_bands() {
    let high = RelationshipRecord::new("x", "y", Some(0.85));
    assert_eq!(high.band(), ConfidenceBand::High);
    assert_eq!(high.score_value(), Some(0.85));

    assert_eq!(RelationshipRecord::new("x", "y", Some(1.5)).score_value(), Some(1.0));
    assert_eq!(RelationshipRecord::new("x", "y", Some(-0.2)).score_value(), Some(0.0));
    assert_eq!(RelationshipRecord::new("x", "y", None).band(), ConfidenceBand::Medium);
}

#[test]
fn relationship_record_deserialization_clamps() {
    let rec: RelationshipRecord =
        serde_json::from_str(r#"{"source":"a","target":"b","score":3.0}"#).unwrap();
    assert_eq!(rec.score_value(), Some(1.0));
}

#[test]
fn variable_record_builder_derives_band_from_score() {
    let var = VariableRecord::new("age").with_score(0.2).with_impact("older people smoke more");
    assert_eq!(var.band, ConfidenceBand::Low);
    assert_eq!(var.impact.as_deref(), Some("older people smoke more"));
    assert_eq!(VariableRecord::new("genetics").band, ConfidenceBand::Medium);
}

#[test]
fn variable_record_deserialization_derives_missing_band() {
    let scored: VariableRecord = serde_json::from_str(r#"{"name":"age","score":0.9}"#).unwrap();
    assert_eq!(scored.band, ConfidenceBand::High);

    let clamped: VariableRecord = serde_json::from_str(r#"{"name":"age","score":-1}"#).unwrap();
    assert_eq!(clamped.band, ConfidenceBand::Low);

    let unscored: VariableRecord = serde_json::from_str(r#"{"name":"age"}"#).unwrap();
    assert_eq!(unscored.band, ConfidenceBand::Medium);

    // An explicit band wins over the score.
    let explicit: VariableRecord =
        serde_json::from_str(r#"{"name":"age","score":0.9,"band":"low"}"#).unwrap();
    assert_eq!(explicit.band, ConfidenceBand::Low);
}

#[test]
fn causal_graph_edges_and_variables() {
    let mut map = BTreeMap::new();
    map.insert("smoking".to_string(), vec!["lung cancer".to_string()]);
    map.insert("exercise habits".to_string(), vec!["lung cancer".to_string()]);
    let graph = CausalGraph::from(map);

    let edges: Vec<(&str, &str)> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![("exercise habits", "lung cancer"), ("smoking", "lung cancer")]
    );
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.variables().len(), 3);
    assert_eq!(graph.to_relationships().len(), 2);
}

#[test]
fn causal_graph_serializes_as_plain_mapping() {
    let graph: CausalGraph = [("a".to_string(), vec!["b".to_string()])].into_iter().collect();
    assert_eq!(serde_json::to_string(&graph).unwrap(), r#"{"a":["b"]}"#);
}

#[test]
fn factors_are_trimmed_and_empties_dropped() {
    assert_eq!(
        parse_factors(" smoking, lung cancer ,, "),
        vec!["smoking".to_string(), "lung cancer".to_string()]
    );
    assert!(parse_factors("").is_empty());
}

#[test]
fn new_session_has_default_factors_and_no_expertise() {
    let session = SessionContext::default();
    assert_eq!(session.model, "gpt-4");
    assert_eq!(session.factors.len(), 4);
    assert!(!session.has_domain_expertises());
    assert!(!session.has_treatment_and_outcome());
    assert_eq!(session.dag_text, "{}");
}

#[test]
fn suggestion_kind_parses_aliases_and_maps_to_steps() {
    assert_eq!("ivs".parse::<SuggestionKind>().unwrap(), SuggestionKind::InstrumentalVariables);
    assert_eq!(
        "negative-controls".parse::<SuggestionKind>().unwrap(),
        SuggestionKind::NegativeControls
    );
    assert!("astrology".parse::<SuggestionKind>().is_err());
    for step in AnalysisStep::ALL {
        for kind in step.kinds() {
            assert_eq!(kind.step(), step);
        }
    }
}

#[test]
fn critique_request_carries_graph_and_strategy() {
    let graph: CausalGraph = [("a".to_string(), vec!["b".to_string()])].into_iter().collect();
    let req = SuggestionRequest::critique_graph(
        &["a".to_string(), "b".to_string()],
        &graph,
        &["epidemiology".to_string()],
        RelationshipStrategy::Pairwise,
    );
    assert_eq!(req.kind, SuggestionKind::CritiqueGraph);
    assert_eq!(req.graph.as_ref(), Some(&graph));
    assert_eq!(req.strategy, Some(RelationshipStrategy::Pairwise));
    assert!(req.treatment.is_none());
}

mod band_properties {
    use causeway_core::models::{ConfidenceBand, Score};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_is_always_in_unit_range(raw in proptest::num::f64::ANY) {
            let score = Score::new(raw).value();
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn band_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |band: ConfidenceBand| match band {
                ConfidenceBand::Low => 0,
                ConfidenceBand::Medium => 1,
                ConfidenceBand::High => 2,
            };
            prop_assert!(rank(ConfidenceBand::from_score(lo)) <= rank(ConfidenceBand::from_score(hi)));
        }
    }
}
