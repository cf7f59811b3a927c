use serde::{Deserialize, Serialize};

use super::{ConfidenceBand, Score};

/// A single named factor: a confounder, backdoor-set member, instrument, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "VariableRecordWire")]
pub struct VariableRecord {
    /// Raw variable name.
    pub name: String,
    /// Mapping key the variable was listed under, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text explanation of the variable's effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// Free-text advice on what to do with the variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    /// Stored rather than derived so a textual band from upstream survives.
    pub band: ConfidenceBand,
}

impl VariableRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            impact: None,
            recommendation: None,
            score: None,
            band: ConfidenceBand::DEFAULT,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Set the score and re-derive the band from it.
    pub fn with_score(mut self, score: f64) -> Self {
        let score = Score::new(score);
        self.band = score.band();
        self.score = Some(score);
        self
    }

    pub fn with_band(mut self, band: ConfidenceBand) -> Self {
        self.band = band;
        self
    }
}

/// Deserialization form: a missing `band` is derived from `score`.
#[derive(Deserialize)]
struct VariableRecordWire {
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    recommendation: Option<String>,
    #[serde(default)]
    score: Option<Score>,
    #[serde(default)]
    band: Option<ConfidenceBand>,
}

impl From<VariableRecordWire> for VariableRecord {
    fn from(wire: VariableRecordWire) -> Self {
        let band = wire
            .band
            .unwrap_or_else(|| ConfidenceBand::from_optional(wire.score.map(Score::value)));
        Self {
            name: wire.name,
            category: wire.category,
            impact: wire.impact,
            recommendation: wire.recommendation,
            score: wire.score,
            band,
        }
    }
}
