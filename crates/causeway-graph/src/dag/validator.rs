//! DAG text validation: parse, check the rules in order, fail fast.

use causeway_core::errors::DagError;
use causeway_core::models::CausalGraph;
use tracing::debug;

use super::literal::parse_literal;
use super::DagValue;
use crate::graph::{find_cycles, is_acyclic, IndexedGraph};

/// Tri-state result for callers that must not see an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub struct DagValidation {
    pub is_valid: bool,
    /// Empty unless `is_valid`.
    pub graph: CausalGraph,
    /// Success summary or the exact rule violation.
    pub message: String,
    /// Cycles found in a valid graph, by variable name. Reported, not rejected.
    pub cycles: Vec<Vec<String>>,
}

impl DagValidation {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Human-readable warning listing each cycle, if any.
    pub fn cycle_warning(&self) -> Option<String> {
        if self.cycles.is_empty() {
            return None;
        }
        let listed: Vec<String> = self
            .cycles
            .iter()
            .map(|cycle| {
                let mut path = cycle.clone();
                if let Some(first) = cycle.first() {
                    path.push(first.clone());
                }
                path.join(" -> ")
            })
            .collect();
        Some(format!(
            "Graph is not acyclic: {} cycle(s) found ({}).",
            self.cycles.len(),
            listed.join("; ")
        ))
    }
}

/// Validate DAG text, never failing past this boundary.
pub fn validate_dag_text(text: &str) -> DagValidation {
    let span = tracing::info_span!("causeway.validate", input_len = text.len());
    let _guard = span.enter();

    match parse_dag_text(text) {
        Ok(graph) => {
            let indexed = IndexedGraph::from_causal_graph(&graph);
            let cycles = if is_acyclic(&indexed) {
                Vec::new()
            } else {
                find_cycles(&indexed)
            };
            let message = format!(
                "Valid DAG: {} source(s), {} edge(s).",
                graph.len(),
                graph.edge_count()
            );
            debug!(sources = graph.len(), edges = graph.edge_count(), cycles = cycles.len(), "DAG accepted");
            DagValidation {
                is_valid: true,
                graph,
                message,
                cycles,
            }
        }
        Err(e) => {
            debug!(error = %e, "DAG rejected");
            DagValidation {
                is_valid: false,
                graph: CausalGraph::new(),
                message: e.to_string(),
                cycles: Vec::new(),
            }
        }
    }
}

/// Parse and validate DAG text.
///
/// Strict JSON is tried first; if it fails, the literal grammar gets a second
/// attempt. A syntax error reports both failures.
pub fn parse_dag_text(text: &str) -> Result<CausalGraph, DagError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DagError::EmptyInput);
    }
    let value = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(json) => DagValue::from(json),
        Err(json_err) => {
            debug!(error = %json_err, "DAG text is not JSON, trying literal grammar");
            parse_literal(trimmed).map_err(|lit_err| DagError::Syntax {
                json: json_err.to_string(),
                literal: lit_err.to_string(),
            })?
        }
    };
    validate_dag_value(value)
}

/// Apply the validation rules to an already-parsed value.
///
/// Rules, in order: non-empty; top level is a mapping; every key is a
/// non-empty string; every value is a string or a list of non-empty strings.
pub fn validate_dag_value(value: DagValue) -> Result<CausalGraph, DagError> {
    let entries = match value {
        DagValue::Null => return Err(DagError::EmptyInput),
        DagValue::Map(entries) => entries,
        other => {
            return Err(DagError::NotAMapping {
                found: other.kind().to_string(),
            })
        }
    };
    if entries.is_empty() {
        return Err(DagError::EmptyInput);
    }

    let mut keyed = Vec::with_capacity(entries.len());
    for (key, targets) in entries {
        match key {
            DagValue::Str(source) if source.trim().is_empty() => return Err(DagError::EmptyKey),
            DagValue::Str(source) => keyed.push((source, targets)),
            other => return Err(DagError::NonStringKey { key: other.repr() }),
        }
    }

    let mut graph = CausalGraph::new();
    for (source, targets) in keyed {
        let targets = match targets {
            DagValue::Str(target) => vec![target],
            DagValue::List(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        DagValue::Str(target) => names.push(target),
                        other => {
                            return Err(DagError::NonStringTarget {
                                source_name: source,
                                value: other.repr(),
                            })
                        }
                    }
                }
                names
            }
            other => {
                return Err(DagError::InvalidTargets {
                    source_name: source,
                    found: other.kind().to_string(),
                })
            }
        };
        if targets.iter().any(|t| t.trim().is_empty()) {
            return Err(DagError::EmptyTarget {
                source_name: source,
            });
        }
        graph.insert(source, targets);
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_value_is_promoted() {
        let graph = parse_dag_text(r#"{"a": "b"}"#).unwrap();
        assert_eq!(graph.targets("a"), Some(&["b".to_string()][..]));
    }

    #[test]
    fn empty_and_placeholder_inputs_prompt_for_structure() {
        for text in ["", "   ", "{}", "null", "None", "{ }"] {
            assert_eq!(parse_dag_text(text), Err(DagError::EmptyInput), "input {text:?}");
        }
    }

    #[test]
    fn keys_are_checked_before_values() {
        // Bad value under the first key, bad key second: the key rule fires first.
        let err = parse_dag_text("{'a': 5, 7: ['b']}").unwrap_err();
        assert_eq!(err, DagError::NonStringKey { key: "7".into() });
    }

    #[test]
    fn mapping_value_is_invalid_targets() {
        let err = parse_dag_text(r#"{"a": {"b": 1}}"#).unwrap_err();
        assert!(matches!(err, DagError::InvalidTargets { .. }));
    }

    #[test]
    fn empty_names_are_rejected() {
        assert_eq!(parse_dag_text(r#"{"": ["b"]}"#), Err(DagError::EmptyKey));
        assert!(matches!(
            parse_dag_text(r#"{"a": ["b", " "]}"#),
            Err(DagError::EmptyTarget { .. })
        ));
    }

    #[test]
    fn empty_target_list_is_allowed() {
        let graph = parse_dag_text(r#"{"a": []}"#).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn syntax_error_reports_both_parsers() {
        let err = parse_dag_text("{'a': [b]}").unwrap_err();
        match err {
            DagError::Syntax { json, literal } => {
                assert!(!json.is_empty());
                assert!(literal.contains("bare name"));
            }
            other => panic!("expected Syntax, got {other:?}"),
        }
    }

    #[test]
    fn failed_validation_has_empty_graph() {
        let v = validate_dag_text(r#"["a", "b"]"#);
        assert!(!v.is_valid);
        assert!(v.graph.is_empty());
        assert!(v.message.contains("must be a mapping"));
    }

    #[test]
    fn cycles_are_flagged_but_valid() {
        let v = validate_dag_text(r#"{"a": ["b"], "b": ["a"]}"#);
        assert!(v.is_valid);
        assert!(v.has_cycles());
        let warning = v.cycle_warning().unwrap();
        assert!(warning.contains("a"));
        assert!(warning.contains("b"));
    }
}
