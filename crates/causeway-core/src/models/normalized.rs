use serde::{Deserialize, Serialize};

use super::{RelationshipRecord, VariableRecord};

/// Uniform view of one LLM response after shape normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedOutput {
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
    #[serde(default)]
    pub variables: Vec<VariableRecord>,
}

impl NormalizedOutput {
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty() && self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.relationships.len() + self.variables.len()
    }

    /// Variable names in output order, without duplicates.
    pub fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.variables.len());
        for var in &self.variables {
            if !names.contains(&var.name) {
                names.push(var.name.clone());
            }
        }
        names
    }
}
