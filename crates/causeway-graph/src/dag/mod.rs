//! DAG text → validated `CausalGraph`.
//!
//! Strict JSON first, then a restricted literal-mapping grammar. Nothing in
//! here evaluates expressions.

pub mod literal;
pub mod validator;
pub mod value;

pub use literal::{parse_literal, LiteralError};
pub use validator::{parse_dag_text, validate_dag_text, validate_dag_value, DagValidation};
pub use value::DagValue;
