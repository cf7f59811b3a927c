use std::path::PathBuf;

use anyhow::Result;
use causeway_core::CausewayConfig;
use causeway_graph::{validate_dag_text, RenderOptions};

use crate::cli::DiagramArg;
use crate::input::text_or_file;
use crate::output::render_validation;

pub fn run(
    config: &CausewayConfig,
    text: Option<String>,
    file: Option<PathBuf>,
    diagram: Option<DiagramArg>,
) -> Result<bool> {
    let text = text_or_file(text, file.as_deref())?;
    let validation = validate_dag_text(&text);
    let opts = RenderOptions::from(&config.display);
    print!(
        "{}",
        render_validation(&validation, config.display.effective_format(), diagram, &opts)?
    );
    Ok(validation.is_valid)
}
