//! Configuration system for Causeway.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod causeway_config;
pub mod defaults;
pub mod display_config;
pub mod llm_config;

pub use causeway_config::{CausewayConfig, CliOverrides};
pub use display_config::{DisplayConfig, OutputFormat};
pub use llm_config::LlmConfig;
