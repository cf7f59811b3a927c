use serde::{Deserialize, Serialize};

use super::{ConfidenceBand, Score};

/// One proposed edge, normalized from LLM output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Raw source name as produced upstream.
    pub source: String,
    /// Raw target name as produced upstream.
    pub target: String,
    /// Clamped confidence score, if one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl RelationshipRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            score: score.map(Score::new),
        }
    }

    /// Confidence band; medium when no score was supplied.
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_optional(self.score.map(Score::value))
    }

    pub fn score_value(&self) -> Option<f64> {
        self.score.map(Score::value)
    }
}
