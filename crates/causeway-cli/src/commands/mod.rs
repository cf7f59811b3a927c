//! Subcommand implementations. Each returns `Ok(true)` on success,
//! `Ok(false)` for a reported (non-fatal) failure.

pub mod normalize;
pub mod session;
pub mod suggest;
pub mod validate;
