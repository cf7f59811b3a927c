use std::path::Path;

use anyhow::Result;
use causeway_core::config::OutputFormat;
use causeway_core::models::SuggestionKind;
use causeway_core::CausewayConfig;
use causeway_graph::render::{render_html, render_text};
use causeway_graph::{build_report, normalize, NormalizeMode, RenderOptions};
use causeway_suggest::response::extract_value;

use crate::cli::DiagramArg;
use crate::input::read_path;
use crate::output::render_edges_diagram;

pub fn run(
    config: &CausewayConfig,
    file: &Path,
    kind: SuggestionKind,
    diagram: Option<DiagramArg>,
) -> Result<bool> {
    let content = read_path(file)?;
    let raw = match extract_value(&content) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(false);
        }
    };
    let output = match normalize(&raw, NormalizeMode::for_kind(kind)) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("warning: no usable result: {e}");
            return Ok(false);
        }
    };

    let opts = RenderOptions::from(&config.display);
    if let Some(diagram) = diagram {
        print!("{}", render_edges_diagram(&output.relationships, diagram, &opts));
        return Ok(true);
    }
    match config.display.effective_format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Html => print!("{}", render_html(&build_report(kind, &output, &opts))),
        OutputFormat::Text => print!("{}", render_text(&build_report(kind, &output, &opts))),
    }
    Ok(true)
}
