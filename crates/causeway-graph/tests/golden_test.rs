//! Golden dataset tests: DAG inputs and LLM output shapes under
//! `test-fixtures/golden/`.

use causeway_core::models::{CausalGraph, NormalizedOutput};
use causeway_graph::{normalize, validate_dag_text, NormalizeMode};
use test_fixtures::{load_all, DagCase, ShapeCase};

#[test]
fn golden_dag_cases() {
    let cases: Vec<(String, DagCase)> = load_all("golden/dag");
    assert!(!cases.is_empty(), "no DAG fixtures found");

    for (file, case) in cases {
        let v = validate_dag_text(&case.input);
        assert_eq!(v.is_valid, case.expect_valid, "{file}: {}", v.message);
        if let Some(expected) = case.expected_graph {
            let expected: CausalGraph = serde_json::from_value(expected).unwrap();
            assert_eq!(v.graph, expected, "{file}: {}", case.description);
        }
        if let Some(fragment) = case.expected_message {
            assert!(
                v.message.contains(&fragment),
                "{file}: {:?} does not contain {fragment:?}",
                v.message
            );
        }
        assert_eq!(v.has_cycles(), case.expect_cycles, "{file}");
    }
}

#[test]
fn golden_shape_cases() {
    let cases: Vec<(String, ShapeCase)> = load_all("golden/shapes");
    assert!(!cases.is_empty(), "no shape fixtures found");

    for (file, case) in cases {
        let mode = match case.mode.as_str() {
            "relationships" => NormalizeMode::Relationships,
            "variables" => NormalizeMode::Variables,
            other => panic!("{file}: unknown mode {other}"),
        };
        let result = normalize(&case.input, mode);
        match (case.expected, case.expected_error_path) {
            (Some(expected), _) => {
                let expected: NormalizedOutput = serde_json::from_value(expected).unwrap();
                assert_eq!(result.unwrap(), expected, "{file}: {}", case.description);
            }
            (None, Some(path)) => {
                let err = result.expect_err(&file);
                assert_eq!(err.path(), path, "{file}: {err}");
            }
            (None, None) => panic!("{file}: fixture has no expectation"),
        }
    }
}
