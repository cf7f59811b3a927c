//! Explicit shape discriminators for raw LLM output.
//!
//! Every accepted shape has a variant here; anything else is a `ShapeError`.

use causeway_core::errors::ShapeError;
use causeway_core::models::{NormalizedOutput, RelationshipRecord, VariableRecord};
use serde_json::{Map, Value};

/// A scalar usable as a name or a score.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    /// The scalar as a variable name; numbers are printed as-is.
    pub fn into_name(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => format_number(n),
        }
    }
}

/// One element of a list (or of a mapping's list value).
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A bare name.
    Name(Scalar),
    /// Arity-2 sequence.
    Pair(Scalar, Scalar),
    /// Arity-3 sequence with a numeric third element.
    Scored(Scalar, Scalar, f64),
    /// A relationship record as serialized by this crate.
    Relationship(RelationshipRecord),
    /// A variable record as serialized by this crate.
    Variable(VariableRecord),
}

/// The value under one mapping key.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Null,
    Scalar(Scalar),
    List(Vec<Item>),
    /// Nested mapping, kept raw; its reading depends on the normalize mode.
    Nested(Map<String, Value>),
}

/// Top-level shape of one LLM response.
#[derive(Debug, Clone, PartialEq)]
pub enum RawShape {
    /// `null`, `""`, `[]`, `{}`.
    Empty,
    /// A bare scalar.
    Scalar(Scalar),
    /// A list of items.
    List(Vec<Item>),
    /// A single serialized record object.
    Record(Item),
    /// A serialized `NormalizedOutput`.
    Normalized(NormalizedOutput),
    /// Key → entry, in the order the keys were written.
    Mapping(Vec<(String, Entry)>),
}

/// Decode `value` into a `RawShape`, rejecting unknown shapes.
pub fn decode(value: &Value) -> Result<RawShape, ShapeError> {
    let path = "$";
    match value {
        Value::Null => Ok(RawShape::Empty),
        Value::String(s) if s.trim().is_empty() => Ok(RawShape::Empty),
        Value::Array(items) if items.is_empty() => Ok(RawShape::Empty),
        Value::Object(map) if map.is_empty() => Ok(RawShape::Empty),
        Value::String(_) | Value::Number(_) => Ok(RawShape::Scalar(scalar(value, path)?)),
        Value::Bool(_) => Err(unsupported(path, value)),
        Value::Array(items) => decode_items(items, path).map(RawShape::List),
        Value::Object(map) => {
            // A record set that fails to deserialize is read as a plain mapping.
            if is_normalized_output(map) {
                if let Ok(output) = serde_json::from_value::<NormalizedOutput>(value.clone()) {
                    return Ok(RawShape::Normalized(output));
                }
            }
            // Likewise a mapping whose keys happen to be `source`/`target` or `name`.
            if let Ok(Some(item)) = record_object(map, path) {
                return Ok(RawShape::Record(item));
            }
            let mut entries = Vec::with_capacity(map.len());
            for (key, entry) in map {
                let entry_path = format!("{path}.{key}");
                entries.push((key.clone(), decode_entry(entry, &entry_path)?));
            }
            Ok(RawShape::Mapping(entries))
        }
    }
}

fn decode_entry(value: &Value, path: &str) -> Result<Entry, ShapeError> {
    match value {
        Value::Null => Ok(Entry::Null),
        Value::String(_) | Value::Number(_) => Ok(Entry::Scalar(scalar(value, path)?)),
        Value::Array(items) => decode_items(items, path).map(Entry::List),
        Value::Object(map) => Ok(Entry::Nested(map.clone())),
        Value::Bool(_) => Err(unsupported(path, value)),
    }
}

fn decode_items(items: &[Value], path: &str) -> Result<Vec<Item>, ShapeError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_item(item, &format!("{path}[{i}]")))
        .collect()
}

fn decode_item(value: &Value, path: &str) -> Result<Item, ShapeError> {
    match value {
        Value::String(_) | Value::Number(_) => Ok(Item::Name(scalar(value, path)?)),
        Value::Array(seq) => match seq.as_slice() {
            [a, b] => Ok(Item::Pair(
                scalar(a, &format!("{path}[0]"))?,
                scalar(b, &format!("{path}[1]"))?,
            )),
            [a, b, score] => {
                let score = score.as_f64().ok_or_else(|| ShapeError::NonNumericScore {
                    path: path.to_string(),
                    found: describe(score),
                })?;
                Ok(Item::Scored(
                    scalar(a, &format!("{path}[0]"))?,
                    scalar(b, &format!("{path}[1]"))?,
                    score,
                ))
            }
            other => Err(ShapeError::BadArity {
                path: path.to_string(),
                len: other.len(),
            }),
        },
        Value::Object(map) => record_object(map, path)?.ok_or_else(|| unsupported(path, value)),
        Value::Null | Value::Bool(_) => Err(unsupported(path, value)),
    }
}

/// A string (non-empty) or number usable as a name.
fn scalar(value: &Value, path: &str) -> Result<Scalar, ShapeError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(Scalar::Text(s.clone())),
        Value::Number(n) => n
            .as_f64()
            .map(Scalar::Number)
            .ok_or_else(|| unsupported(path, value)),
        _ => Err(unsupported(path, value)),
    }
}

/// Recognize a serialized record: `source`+`target` or `name`.
fn record_object(map: &Map<String, Value>, path: &str) -> Result<Option<Item>, ShapeError> {
    let malformed = |e: serde_json::Error| ShapeError::Unsupported {
        path: path.to_string(),
        description: format!("malformed record: {e}"),
    };
    let object = Value::Object(map.clone());
    if map.contains_key("source") && map.contains_key("target") {
        let rec: RelationshipRecord = serde_json::from_value(object).map_err(malformed)?;
        return Ok(Some(Item::Relationship(rec)));
    }
    if map.contains_key("name") {
        let rec: VariableRecord = serde_json::from_value(object).map_err(malformed)?;
        return Ok(Some(Item::Variable(rec)));
    }
    Ok(None)
}

fn is_normalized_output(map: &Map<String, Value>) -> bool {
    map.keys()
        .all(|k| k == "relationships" || k == "variables")
        && map.values().all(Value::is_array)
}

fn unsupported(path: &str, value: &Value) -> ShapeError {
    ShapeError::Unsupported {
        path: path.to_string(),
        description: describe(value),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.trim().is_empty() => "empty string".to_string(),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("list of {} element(s)", items.len()),
        Value::Object(map) => format!("mapping with {} key(s)", map.len()),
    }
}

/// Integers print without a fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
