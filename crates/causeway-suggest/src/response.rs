//! Pull a structured value out of free-form LLM text.

use std::sync::LazyLock;

use causeway_core::errors::SuggestError;
use causeway_graph::dag::parse_literal;
use regex::Regex;
use serde_json::Value;

static CODE_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```").ok());

/// Extract one JSON value from the content of an LLM reply.
///
/// Order: strip a Markdown code fence if present, parse as JSON, parse with
/// the literal grammar, then retry both on the outermost bracketed span
/// (replies often wrap the value in prose).
pub fn extract_value(content: &str) -> Result<Value, SuggestError> {
    let body = strip_code_fence(content).trim();
    if body.is_empty() {
        return Err(SuggestError::EmptyResponse);
    }
    if let Some(value) = parse_structured(body) {
        return Ok(value);
    }
    if let Some(span) = bracketed_span(body) {
        if let Some(value) = parse_structured(span) {
            tracing::debug!("extracted structured value from surrounding prose");
            return Ok(value);
        }
    }
    Err(SuggestError::MalformedResponse {
        reason: format!("no JSON or literal value found in {:?}", preview(body)),
    })
}

/// The first fenced block's body, or the input unchanged.
pub fn strip_code_fence(content: &str) -> &str {
    CODE_FENCE
        .as_ref()
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map_or(content, |m| m.as_str())
}

fn parse_structured(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Some(value),
        Err(_) => parse_literal(text).ok().map(Value::from),
    }
}

/// From the first `[` or `{` to the last `]` or `}`.
fn bracketed_span(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c == '[' || c == '{')?;
    let end = text.rfind(|c: char| c == ']' || c == '}')?;
    (end > start).then(|| &text[start..=end])
}

fn preview(text: &str) -> String {
    text.chars().take(80).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json() {
        assert_eq!(extract_value(r#"["a", "b"]"#).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn fenced_json() {
        let content = "Here you go:\n```json\n[[\"smoking\", \"lung cancer\", 0.9]]\n```\nThanks.";
        assert_eq!(
            extract_value(content).unwrap(),
            json!([["smoking", "lung cancer", 0.9]])
        );
    }

    #[test]
    fn literal_fallback() {
        assert_eq!(
            extract_value("{'age': None, 'income': 0.5}").unwrap(),
            json!({"age": null, "income": 0.5})
        );
    }

    #[test]
    fn value_inside_prose() {
        assert_eq!(
            extract_value("The confounders are ['age', 'genetics'] in my view.").unwrap(),
            json!(["age", "genetics"])
        );
    }

    #[test]
    fn empty_and_garbage() {
        assert!(matches!(extract_value("  "), Err(SuggestError::EmptyResponse)));
        assert!(matches!(extract_value("```\n```"), Err(SuggestError::EmptyResponse)));
        assert!(matches!(
            extract_value("I cannot help with that."),
            Err(SuggestError::MalformedResponse { .. })
        ));
    }
}
