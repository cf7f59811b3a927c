//! Plain-text formatters.

use causeway_core::constants::NO_DATA_PLACEHOLDER;
use causeway_core::errors::ShapeError;
use causeway_core::models::{RelationshipRecord, VariableRecord};
use serde_json::Value;

use super::report::SuggestionReport;
use super::templates;
use super::RenderOptions;
use crate::shape::{normalize, NormalizeMode};

/// Title, summary, then each section as a bulleted list.
pub fn render_text(report: &SuggestionReport) -> String {
    let mut out = String::new();
    out.push_str(&report.title);
    out.push('\n');
    out.push_str(&"=".repeat(report.title.chars().count()));
    out.push('\n');
    out.push_str(&report.summary);
    out.push('\n');
    for section in &report.sections {
        out.push('\n');
        out.push_str(&section.title);
        out.push_str(":\n");
        for entry in &section.entries {
            out.push_str("  - ");
            out.push_str(&entry.text);
            out.push('\n');
            if let Some(detail) = &entry.detail {
                out.push_str("      ");
                out.push_str(detail);
                out.push('\n');
            }
        }
    }
    out
}

/// One line per edge, or the placeholder.
pub fn format_relationships(records: &[RelationshipRecord], opts: &RenderOptions) -> String {
    if records.is_empty() {
        return NO_DATA_PLACEHOLDER.to_string();
    }
    records
        .iter()
        .map(|r| templates::relationship_line(r, opts))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per variable (plus its detail), or the placeholder.
pub fn format_variables(records: &[VariableRecord], opts: &RenderOptions) -> String {
    if records.is_empty() {
        return NO_DATA_PLACEHOLDER.to_string();
    }
    let mut lines = Vec::with_capacity(records.len());
    for rec in records {
        let mut line = templates::variable_line(rec, opts);
        if let Some(category) = &rec.category {
            line = format!("[{}] {line}", opts.name(category));
        }
        if let Some(detail) = templates::variable_detail(rec) {
            line.push_str(": ");
            line.push_str(&detail);
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Normalize a raw value and format whatever it contains.
pub fn format_value(
    value: &Value,
    mode: NormalizeMode,
    opts: &RenderOptions,
) -> Result<String, ShapeError> {
    let output = normalize(value, mode)?;
    let parts: Vec<String> = [
        (!output.relationships.is_empty())
            .then(|| format_relationships(&output.relationships, opts)),
        (!output.variables.is_empty()).then(|| format_variables(&output.variables, opts)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        return Ok(NO_DATA_PLACEHOLDER.to_string());
    }
    Ok(parts.join("\n"))
}
