//! RawShape → NormalizedOutput.

use causeway_core::errors::ShapeError;
use causeway_core::models::{
    ConfidenceBand, NormalizedOutput, RelationshipRecord, SuggestionKind, VariableRecord,
};
use serde_json::{Map, Value};
use tracing::debug;

use super::decode::{decode, Entry, Item, RawShape, Scalar};

/// How mapping keys are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Keys are edge sources.
    Relationships,
    /// Keys are variable categories.
    Variables,
}

impl NormalizeMode {
    pub fn for_kind(kind: SuggestionKind) -> Self {
        if kind.yields_relationships() {
            Self::Relationships
        } else {
            Self::Variables
        }
    }
}

/// Normalize one raw LLM response.
///
/// Already-normalized output (a serialized `NormalizedOutput`, a record
/// object, or a list of records) comes back unchanged.
pub fn normalize(value: &Value, mode: NormalizeMode) -> Result<NormalizedOutput, ShapeError> {
    let shape = decode(value)?;
    let mut out = NormalizedOutput::default();
    match shape {
        RawShape::Empty => {}
        RawShape::Normalized(output) => out = output,
        RawShape::Scalar(s) => out.variables.push(VariableRecord::new(s.into_name())),
        RawShape::Record(item) => push_item(&mut out, item),
        RawShape::List(items) => {
            for item in items {
                push_item(&mut out, item);
            }
        }
        RawShape::Mapping(entries) => {
            for (key, entry) in entries {
                let path = format!("$.{key}");
                match mode {
                    NormalizeMode::Relationships => source_entry(&mut out, &key, entry, &path)?,
                    NormalizeMode::Variables => category_entry(&mut out, &key, entry, &path)?,
                }
            }
        }
    }
    debug!(
        ?mode,
        relationships = out.relationships.len(),
        variables = out.variables.len(),
        "normalized LLM output"
    );
    Ok(out)
}

/// List elements outside a mapping: names are variables, sequences are edges.
fn push_item(out: &mut NormalizedOutput, item: Item) {
    match item {
        Item::Name(name) => out.variables.push(VariableRecord::new(name.into_name())),
        Item::Pair(source, target) => out.relationships.push(RelationshipRecord::new(
            source.into_name(),
            target.into_name(),
            None,
        )),
        Item::Scored(source, target, score) => out.relationships.push(RelationshipRecord::new(
            source.into_name(),
            target.into_name(),
            Some(score),
        )),
        Item::Relationship(rec) => out.relationships.push(rec),
        Item::Variable(rec) => out.variables.push(rec),
    }
}

/// Mapping entry read as `source → targets`.
fn source_entry(
    out: &mut NormalizedOutput,
    source: &str,
    entry: Entry,
    path: &str,
) -> Result<(), ShapeError> {
    match entry {
        Entry::Null => out.variables.push(VariableRecord::new(source)),
        Entry::Scalar(Scalar::Text(target)) => {
            out.relationships
                .push(RelationshipRecord::new(source, target, None));
        }
        Entry::Scalar(Scalar::Number(score)) => {
            out.variables.push(VariableRecord::new(source).with_score(score));
        }
        Entry::List(items) => {
            for item in items {
                match item {
                    Item::Name(target) => out.relationships.push(RelationshipRecord::new(
                        source,
                        target.into_name(),
                        None,
                    )),
                    Item::Pair(target, Scalar::Number(score)) => {
                        out.relationships.push(RelationshipRecord::new(
                            source,
                            target.into_name(),
                            Some(score),
                        ))
                    }
                    other => push_item(out, other),
                }
            }
        }
        Entry::Nested(targets) => {
            for (target, score) in targets {
                let score = match score {
                    Value::Null => None,
                    Value::Number(n) => n.as_f64(),
                    other => {
                        return Err(ShapeError::NonNumericScore {
                            path: format!("{path}.{target}"),
                            found: kind_of(&other).to_string(),
                        })
                    }
                };
                out.relationships
                    .push(RelationshipRecord::new(source, target, score));
            }
        }
    }
    Ok(())
}

/// Mapping entry read as `category → variables`.
fn category_entry(
    out: &mut NormalizedOutput,
    category: &str,
    entry: Entry,
    path: &str,
) -> Result<(), ShapeError> {
    match entry {
        Entry::Null => out.variables.push(VariableRecord::new(category)),
        Entry::Scalar(Scalar::Text(name)) => {
            out.variables
                .push(VariableRecord::new(name).with_category(category));
        }
        Entry::Scalar(Scalar::Number(score)) => {
            out.variables.push(VariableRecord::new(category).with_score(score));
        }
        Entry::List(items) => {
            for item in items {
                match item {
                    Item::Name(name) => out
                        .variables
                        .push(VariableRecord::new(name.into_name()).with_category(category)),
                    Item::Pair(name, Scalar::Number(score)) => out.variables.push(
                        VariableRecord::new(name.into_name())
                            .with_category(category)
                            .with_score(score),
                    ),
                    Item::Pair(name, Scalar::Text(impact)) => out.variables.push(
                        VariableRecord::new(name.into_name())
                            .with_category(category)
                            .with_impact(impact),
                    ),
                    Item::Variable(mut rec) => {
                        if rec.category.is_none() {
                            rec.category = Some(category.to_string());
                        }
                        out.variables.push(rec);
                    }
                    other => push_item(out, other),
                }
            }
        }
        Entry::Nested(bag) => out.variables.push(attribute_bag(category, &bag, path)?),
    }
    Ok(())
}

const IMPACT_KEYS: [&str; 5] = ["impact", "reason", "explanation", "rationale", "description"];
const RECOMMENDATION_KEYS: [&str; 3] = ["recommendation", "suggestion", "action"];
const CONFIDENCE_KEYS: [&str; 3] = ["confidence", "score", "strength"];

/// `{"impact": ..., "recommendation": ..., "confidence": ...}` under a variable name.
fn attribute_bag(
    name: &str,
    bag: &Map<String, Value>,
    path: &str,
) -> Result<VariableRecord, ShapeError> {
    let mut record = VariableRecord::new(name);
    for (key, value) in bag {
        let field_path = format!("{path}.{key}");
        let lowered = key.to_ascii_lowercase();
        let known = IMPACT_KEYS.contains(&lowered.as_str())
            || RECOMMENDATION_KEYS.contains(&lowered.as_str())
            || CONFIDENCE_KEYS.contains(&lowered.as_str());
        if !known {
            debug!(path = %field_path, "ignoring unknown variable attribute");
            continue;
        }
        if let Value::Array(_) | Value::Object(_) = value {
            return Err(ShapeError::Unsupported {
                path: field_path,
                description: format!("nested {} under a variable attribute", kind_of(value)),
            });
        }
        if IMPACT_KEYS.contains(&lowered.as_str()) {
            if let Some(text) = value.as_str() {
                record = record.with_impact(text);
            }
        } else if RECOMMENDATION_KEYS.contains(&lowered.as_str()) {
            if let Some(text) = value.as_str() {
                record = record.with_recommendation(text);
            }
        } else {
            record = match value {
                Value::Number(n) => match n.as_f64() {
                    Some(score) => record.with_score(score),
                    None => record,
                },
                Value::String(text) => {
                    let band = text.parse::<ConfidenceBand>().map_err(|_| {
                        ShapeError::NonNumericScore {
                            path: field_path.clone(),
                            found: format!("string {text:?}"),
                        }
                    })?;
                    record.with_band(band)
                }
                Value::Null => record,
                other => {
                    return Err(ShapeError::NonNumericScore {
                        path: field_path,
                        found: kind_of(other).to_string(),
                    })
                }
            };
        }
    }
    Ok(record)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn triple_scores_are_banded() {
        let out = normalize(
            &json!([["x", "y", 0.85], ["x", "z", 0.5], ["y", "z", 0.1]]),
            NormalizeMode::Relationships,
        )
        .unwrap();
        let bands: Vec<_> = out.relationships.iter().map(|r| r.band()).collect();
        assert_eq!(
            bands,
            vec![ConfidenceBand::High, ConfidenceBand::Medium, ConfidenceBand::Low]
        );
    }

    #[test]
    fn mode_follows_kind() {
        assert_eq!(
            NormalizeMode::for_kind(SuggestionKind::CritiqueGraph),
            NormalizeMode::Relationships
        );
        assert_eq!(
            NormalizeMode::for_kind(SuggestionKind::BackdoorSet),
            NormalizeMode::Variables
        );
    }

    #[test]
    fn attribute_bag_accepts_band_text() {
        let out = normalize(
            &json!({"genetics": {"impact": "raises risk", "confidence": "high"}}),
            NormalizeMode::Variables,
        )
        .unwrap();
        let var = &out.variables[0];
        assert_eq!(var.name, "genetics");
        assert_eq!(var.impact.as_deref(), Some("raises risk"));
        assert_eq!(var.band, ConfidenceBand::High);
        assert!(var.score.is_none());
    }
}
