/// Reasons a block of DAG text was rejected.
///
/// Validation is fail-fast: the first violation found is the one reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DagError {
    #[error("no structure provided: enter the DAG as a mapping, e.g. {{\"smoking\": [\"lung cancer\"]}}")]
    EmptyInput,

    #[error("could not parse DAG text as JSON ({json}) or as a literal mapping ({literal})")]
    Syntax { json: String, literal: String },

    #[error("DAG must be a mapping/object from source to targets, found {found}")]
    NotAMapping { found: String },

    #[error("DAG key {key} must be a string")]
    NonStringKey { key: String },

    #[error("DAG key must be a non-empty string")]
    EmptyKey,

    #[error("targets of {source_name:?} must be a string or a list of strings, found {found}")]
    InvalidTargets { source_name: String, found: String },

    #[error("target {value} of {source_name:?} must be a string")]
    NonStringTarget { source_name: String, value: String },

    #[error("target names of {source_name:?} must be non-empty strings")]
    EmptyTarget { source_name: String },
}
