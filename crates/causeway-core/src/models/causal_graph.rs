use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::RelationshipRecord;

/// A causal graph as entered by the user: source variable → the variables it causes.
///
/// Target order is preserved as entered. Acyclicity is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CausalGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the targets of `source`.
    pub fn insert(&mut self, source: impl Into<String>, targets: Vec<String>) {
        self.adjacency.insert(source.into(), targets);
    }

    pub fn targets(&self, source: &str) -> Option<&[String]> {
        self.adjacency.get(source).map(Vec::as_slice)
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Iterate `(source, target)` pairs, sources in name order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |target| (source.as_str(), target.as_str()))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of source entries.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Every variable named anywhere in the graph.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        for (source, target) in self.edges() {
            vars.insert(source);
            vars.insert(target);
        }
        vars.extend(self.sources());
        vars
    }

    /// Unscored relationship records, one per edge.
    pub fn to_relationships(&self) -> Vec<RelationshipRecord> {
        self.edges()
            .map(|(source, target)| RelationshipRecord::new(source, target, None))
            .collect()
    }

    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.adjacency
    }
}

impl From<BTreeMap<String, Vec<String>>> for CausalGraph {
    fn from(adjacency: BTreeMap<String, Vec<String>>) -> Self {
        Self { adjacency }
    }
}

impl FromIterator<(String, Vec<String>)> for CausalGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
