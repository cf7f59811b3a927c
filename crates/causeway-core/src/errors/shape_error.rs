/// LLM output that matches none of the accepted shapes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("unsupported output shape at {path}: {description}")]
    Unsupported { path: String, description: String },

    #[error("sequence at {path} has {len} elements; expected 2, or 3 with a numeric score")]
    BadArity { path: String, len: usize },

    #[error("third element at {path} must be a numeric score, found {found}")]
    NonNumericScore { path: String, found: String },
}

impl ShapeError {
    /// JSON-path style location of the offending element, e.g. `$[3]`.
    pub fn path(&self) -> &str {
        match self {
            Self::Unsupported { path, .. }
            | Self::BadArity { path, .. }
            | Self::NonNumericScore { path, .. } => path,
        }
    }
}
