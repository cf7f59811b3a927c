//! Error handling for Causeway.
//! One error enum per subsystem, `thiserror` only, aggregated by `CausewayError`.

mod causeway_error;
mod config_error;
mod dag_error;
mod shape_error;
mod suggest_error;

pub use causeway_error::{CausewayError, CausewayResult};
pub use config_error::ConfigError;
pub use dag_error::DagError;
pub use shape_error::ShapeError;
pub use suggest_error::SuggestError;
