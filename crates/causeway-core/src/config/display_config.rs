//! Rendering configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How rendered results are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::ValidationFailed {
                field: "display.format".to_string(),
                message: format!("unknown format {other:?}; expected text, html, or json"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

/// Configuration for the renderers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default output format: "text", "html", or "json".
    pub format: Option<String>,
    /// Print numeric scores next to confidence bands. Default: true.
    pub show_scores: Option<bool>,
    /// Title-case variable names for display. Default: true.
    pub title_case_names: Option<bool>,
}

impl DisplayConfig {
    /// Returns the effective output format, falling back to text on unknown values.
    pub fn effective_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .unwrap_or(defaults::DEFAULT_OUTPUT_FORMAT)
            .parse()
            .unwrap_or(OutputFormat::Text)
    }

    pub fn effective_show_scores(&self) -> bool {
        self.show_scores.unwrap_or(defaults::DEFAULT_SHOW_SCORES)
    }

    pub fn effective_title_case_names(&self) -> bool {
        self.title_case_names
            .unwrap_or(defaults::DEFAULT_TITLE_CASE_NAMES)
    }
}
