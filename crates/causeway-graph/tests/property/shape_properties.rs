//! Property tests for DAG validation and shape normalization.

use std::collections::BTreeMap;

use proptest::prelude::*;

use causeway_core::models::{ConfidenceBand, NormalizedOutput, RelationshipRecord, Score};
use causeway_graph::{normalize, validate_dag_text, NormalizeMode};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z _]{0,11}[a-z]"
}

fn adjacency_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<String>>> {
    prop::collection::btree_map(
        name_strategy(),
        prop::collection::vec(name_strategy(), 0..5),
        1..8,
    )
}

// Scores with two decimals survive a JSON round trip exactly.
fn score_strategy() -> impl Strategy<Value = Option<f64>> {
    prop::option::of((0u32..=100).prop_map(|n| f64::from(n) / 100.0))
}

fn records_strategy() -> impl Strategy<Value = Vec<RelationshipRecord>> {
    prop::collection::vec(
        (name_strategy(), name_strategy(), score_strategy())
            .prop_map(|(s, t, score)| RelationshipRecord::new(s, t, score)),
        0..12,
    )
}

proptest! {
    #[test]
    fn valid_json_mapping_validates_to_equal_mapping(adjacency in adjacency_strategy()) {
        let text = serde_json::to_string(&adjacency).unwrap();
        let v = validate_dag_text(&text);
        prop_assert!(v.is_valid, "{}", v.message);
        prop_assert_eq!(v.graph.as_map(), &adjacency);
    }

    #[test]
    fn normalizer_is_idempotent(records in records_strategy()) {
        let value = serde_json::to_value(&records).unwrap();
        let once = normalize(&value, NormalizeMode::Relationships).unwrap();
        prop_assert_eq!(&once.relationships, &records);

        let again = normalize(&serde_json::to_value(&once).unwrap(), NormalizeMode::Variables).unwrap();
        prop_assert_eq!(again, once);
    }

    #[test]
    fn triple_scores_are_clamped(score in -10.0f64..10.0) {
        let value = serde_json::json!([["x", "y", score]]);
        let out: NormalizedOutput = normalize(&value, NormalizeMode::Relationships).unwrap();
        let got = out.relationships[0].score_value().unwrap();
        prop_assert!((0.0..=1.0).contains(&got));
        prop_assert_eq!(out.relationships[0].band(), ConfidenceBand::from_score(Score::new(score).value()));
    }

    #[test]
    fn non_mapping_top_level_never_validates(items in prop::collection::vec(name_strategy(), 0..5)) {
        let text = serde_json::to_string(&items).unwrap();
        let v = validate_dag_text(&text);
        prop_assert!(!v.is_valid);
        prop_assert!(v.graph.is_empty());
    }
}
