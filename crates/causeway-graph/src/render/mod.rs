//! Rendering: titled reports, text, HTML panels, and DOT/Mermaid diagrams.

pub mod diagram;
pub mod html;
pub mod report;
pub mod templates;
pub mod text;

use causeway_core::config::DisplayConfig;

use crate::shape::display_name;

pub use diagram::{graph_to_dot, graph_to_mermaid, relationships_to_dot, relationships_to_mermaid};
pub use html::render_html;
pub use report::{build_report, ReportEntry, ReportSection, SuggestionReport};
pub use text::{format_relationships, format_value, format_variables, render_text};

/// Presentation switches shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print the numeric score next to the band when one exists.
    pub show_scores: bool,
    /// Run names through `display_name`.
    pub title_case_names: bool,
}

impl RenderOptions {
    /// Name as shown to the user. Raw names on records are left untouched.
    pub fn name(&self, raw: &str) -> String {
        if self.title_case_names {
            display_name(raw)
        } else {
            raw.to_string()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_scores: true,
            title_case_names: true,
        }
    }
}

impl From<&DisplayConfig> for RenderOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            show_scores: config.effective_show_scores(),
            title_case_names: config.effective_title_case_names(),
        }
    }
}
