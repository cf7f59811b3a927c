use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_MODEL;
use crate::constants::{DEFAULT_DAG_TEXT, DEFAULT_FACTORS};

/// Per-user session values, passed explicitly to every assistant action.
///
/// Only user input and a successful domain-expertise suggestion write to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Identifier attached to log spans.
    pub session_id: String,
    pub model: String,
    pub factors: Vec<String>,
    pub treatment: String,
    pub outcome: String,
    /// `None` until the domain-expertise action has succeeded.
    pub domain_expertises: Option<Vec<String>>,
    /// Raw DAG text as entered; validated on every use.
    pub dag_text: String,
}

impl SessionContext {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            model: model.into(),
            factors: parse_factors(DEFAULT_FACTORS),
            treatment: String::new(),
            outcome: String::new(),
            domain_expertises: None,
            dag_text: DEFAULT_DAG_TEXT.to_string(),
        }
    }

    /// Replace the factor list from comma-separated text.
    pub fn set_factors_from_text(&mut self, text: &str) {
        self.factors = parse_factors(text);
    }

    pub fn set_treatment(&mut self, treatment: &str) {
        self.treatment = treatment.trim().to_string();
    }

    pub fn set_outcome(&mut self, outcome: &str) {
        self.outcome = outcome.trim().to_string();
    }

    pub fn set_dag_text(&mut self, text: &str) {
        self.dag_text = text.to_string();
    }

    pub fn set_domain_expertises(&mut self, expertises: Vec<String>) {
        self.domain_expertises = Some(expertises);
    }

    pub fn has_factors(&self) -> bool {
        !self.factors.is_empty()
    }

    pub fn has_treatment_and_outcome(&self) -> bool {
        !self.treatment.is_empty() && !self.outcome.is_empty()
    }

    pub fn has_domain_expertises(&self) -> bool {
        self.domain_expertises.is_some()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

/// Split comma-separated factor text, trimming each entry and dropping empties.
pub fn parse_factors(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}
