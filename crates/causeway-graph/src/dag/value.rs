use std::fmt::Write as _;

/// Parsed but not yet validated DAG input.
///
/// Wider than JSON: mapping keys may be any value, so a non-string key can be
/// reported instead of silently stringified.
#[derive(Debug, Clone, PartialEq)]
pub enum DagValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<DagValue>),
    /// Entries in source order; later duplicates win on validation.
    Map(Vec<(DagValue, DagValue)>),
}

impl DagValue {
    /// Short description of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "a boolean",
            Self::Int(_) => "an integer",
            Self::Float(_) => "a number",
            Self::Str(_) => "a string",
            Self::List(_) => "a list",
            Self::Map(_) => "a mapping",
        }
    }

    /// Compact source-like rendering of the value.
    pub fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out);
        out
    }

    fn write_repr(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Self::Float(f) => {
                let _ = write!(out, "{f:?}");
            }
            Self::Str(s) => {
                let _ = write!(out, "{s:?}");
            }
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_repr(out);
                }
                out.push(']');
            }
            Self::Map(entries) => {
                out.push('{');
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    k.write_repr(out);
                    out.push_str(": ");
                    v.write_repr(out);
                }
                out.push('}');
            }
        }
    }
}

impl From<serde_json::Value> for DagValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(k, v)| (Self::Str(k), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<DagValue> for serde_json::Value {
    /// Lossy for non-string keys, which are rendered with `repr`.
    fn from(value: DagValue) -> Self {
        use serde_json::Value;
        match value {
            DagValue::Null => Value::Null,
            DagValue::Bool(b) => Value::Bool(b),
            DagValue::Int(i) => Value::from(i),
            DagValue::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
            DagValue::Str(s) => Value::String(s),
            DagValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            DagValue::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| {
                        let key = match k {
                            DagValue::Str(s) => s,
                            other => other.repr(),
                        };
                        (key, Value::from(v))
                    })
                    .collect(),
            ),
        }
    }
}
