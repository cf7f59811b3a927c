//! Line templates per record type and section headers per band.

use causeway_core::models::{ConfidenceBand, RelationshipRecord, Score, VariableRecord};

use super::RenderOptions;

/// Section header for relationships in a band.
pub fn band_header(band: ConfidenceBand) -> &'static str {
    match band {
        ConfidenceBand::High => "High confidence",
        ConfidenceBand::Medium => "Medium confidence",
        ConfidenceBand::Low => "Low confidence",
    }
}

/// Header for variables listed without a category.
pub const UNCATEGORIZED_HEADER: &str = "Variables";

/// `(high, 0.85)`, or `(medium)` when no score was supplied.
pub fn confidence_tag(band: ConfidenceBand, score: Option<Score>, opts: &RenderOptions) -> String {
    match score {
        Some(score) if opts.show_scores => format!("({band}, {score})"),
        _ => format!("({band})"),
    }
}

/// `Smoking -> Lung Cancer (high, 0.85)`
pub fn relationship_line(rec: &RelationshipRecord, opts: &RenderOptions) -> String {
    format!(
        "{} -> {} {}",
        opts.name(&rec.source),
        opts.name(&rec.target),
        confidence_tag(rec.band(), rec.score, opts)
    )
}

/// `Genetics (medium)`
pub fn variable_line(rec: &VariableRecord, opts: &RenderOptions) -> String {
    format!("{} {}", opts.name(&rec.name), confidence_tag(rec.band, rec.score, opts))
}

/// Impact and recommendation, joined for the detail line.
pub fn variable_detail(rec: &VariableRecord) -> Option<String> {
    match (&rec.impact, &rec.recommendation) {
        (Some(impact), Some(advice)) => Some(format!("{impact} Recommendation: {advice}")),
        (Some(impact), None) => Some(impact.clone()),
        (None, Some(advice)) => Some(format!("Recommendation: {advice}")),
        (None, None) => None,
    }
}
