use super::{ConfigError, DagError, ShapeError, SuggestError};

/// Top-level error for the Causeway workspace.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error("DAG validation error: {0}")]
    Dag(#[from] DagError),

    #[error("output shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("suggestion error: {0}")]
    Suggest(#[from] SuggestError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CausewayResult<T> = Result<T, CausewayError>;
