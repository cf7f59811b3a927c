//! Titled per-action reports with band and category sections.

use causeway_core::constants::NO_DATA_PLACEHOLDER;
use causeway_core::models::{ConfidenceBand, NormalizedOutput, SuggestionKind};
use serde::Serialize;

use super::templates;
use super::RenderOptions;

/// One rendered suggestion result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub kind: SuggestionKind,
    pub title: String,
    pub summary: String,
    pub sections: Vec<ReportSection>,
}

impl SuggestionReport {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// A titled group of entries ("High confidence", a variable category, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub text: String,
    pub band: ConfidenceBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Build the report for one action's normalized output.
///
/// Relationships are grouped by band, high first; variables are grouped by the
/// category they were listed under, in first-seen order. Empty groups are
/// omitted.
pub fn build_report(
    kind: SuggestionKind,
    output: &NormalizedOutput,
    opts: &RenderOptions,
) -> SuggestionReport {
    let mut sections = Vec::new();

    for band in [ConfidenceBand::High, ConfidenceBand::Medium, ConfidenceBand::Low] {
        let entries: Vec<ReportEntry> = output
            .relationships
            .iter()
            .filter(|r| r.band() == band)
            .map(|r| ReportEntry {
                text: templates::relationship_line(r, opts),
                band,
                detail: None,
            })
            .collect();
        if !entries.is_empty() {
            sections.push(ReportSection {
                title: templates::band_header(band).to_string(),
                entries,
            });
        }
    }

    let mut categories: Vec<ReportSection> = Vec::new();
    for var in &output.variables {
        let title = match &var.category {
            Some(category) => opts.name(category),
            None => templates::UNCATEGORIZED_HEADER.to_string(),
        };
        let entry = ReportEntry {
            text: templates::variable_line(var, opts),
            band: var.band,
            detail: templates::variable_detail(var),
        };
        match categories.iter_mut().find(|s| s.title == title) {
            Some(section) => section.entries.push(entry),
            None => categories.push(ReportSection {
                title,
                entries: vec![entry],
            }),
        }
    }
    sections.extend(categories);

    let summary = if output.is_empty() {
        NO_DATA_PLACEHOLDER.to_string()
    } else {
        summarize(output)
    };

    SuggestionReport {
        kind,
        title: kind.title().to_string(),
        summary,
        sections,
    }
}

fn summarize(output: &NormalizedOutput) -> String {
    let high = output
        .relationships
        .iter()
        .filter(|r| r.band() == ConfidenceBand::High)
        .count();
    match (output.relationships.len(), output.variables.len()) {
        (0, vars) => format!("{vars} variable(s) suggested."),
        (edges, 0) => format!("{edges} proposed edge(s), {high} with high confidence."),
        (edges, vars) => format!(
            "{edges} proposed edge(s), {high} with high confidence; {vars} variable(s)."
        ),
    }
}
