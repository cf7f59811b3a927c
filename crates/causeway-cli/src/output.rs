//! Rendering command results for stdout.

use anyhow::Result;
use causeway_core::config::OutputFormat;
use causeway_core::models::RelationshipRecord;
use causeway_graph::render::html::escape_html;
use causeway_graph::render::{
    graph_to_dot, graph_to_mermaid, relationships_to_dot, relationships_to_mermaid, render_html,
    render_text,
};
use causeway_graph::{DagValidation, RenderOptions};
use causeway_suggest::{ActionOutcome, ActionStatus};
use serde_json::json;

use crate::cli::DiagramArg;

pub fn render_outcome(outcome: &ActionOutcome, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcome)?,
        OutputFormat::Html => match (&outcome.report, outcome.status) {
            (Some(report), ActionStatus::Success) => render_html(report),
            _ => format!(
                "<div class=\"causeway-{}\"><p>{}</p></div>\n",
                status_label(outcome.status),
                escape_html(&outcome.message)
            ),
        },
        OutputFormat::Text => match (&outcome.report, outcome.status) {
            (Some(report), ActionStatus::Success) => {
                let mut text = render_text(report);
                if outcome.message != report.summary {
                    text.push('\n');
                    text.push_str(&outcome.message);
                    text.push('\n');
                }
                text
            }
            _ => format!("{}: {}\n", status_label(outcome.status), outcome.message),
        },
    })
}

pub fn render_validation(
    validation: &DagValidation,
    format: OutputFormat,
    diagram: Option<DiagramArg>,
    opts: &RenderOptions,
) -> Result<String> {
    if validation.is_valid {
        match diagram {
            Some(DiagramArg::Dot) => return Ok(graph_to_dot(&validation.graph, opts)),
            Some(DiagramArg::Mermaid) => return Ok(graph_to_mermaid(&validation.graph, opts)),
            None => {}
        }
    }
    let warning = validation.cycle_warning();
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "is_valid": validation.is_valid,
            "message": validation.message,
            "graph": validation.graph,
            "cycles": validation.cycles,
        }))?,
        OutputFormat::Html => {
            let mut html = format!(
                "<div class=\"causeway-validation\">\n  <p>{}</p>\n",
                escape_html(&validation.message)
            );
            if let Some(warning) = &warning {
                html.push_str(&format!("  <p class=\"warning\">{}</p>\n", escape_html(warning)));
            }
            if validation.is_valid {
                html.push_str("  <ul>\n");
                for (source, target) in validation.graph.edges() {
                    html.push_str(&format!(
                        "    <li>{} &rarr; {}</li>\n",
                        escape_html(&opts.name(source)),
                        escape_html(&opts.name(target))
                    ));
                }
                html.push_str("  </ul>\n");
            }
            html.push_str("</div>\n");
            html
        }
        OutputFormat::Text => {
            let mut text = format!("{}\n", validation.message);
            if let Some(warning) = &warning {
                text.push_str(&format!("warning: {warning}\n"));
            }
            for (source, target) in validation.graph.edges() {
                text.push_str(&format!("  {} -> {}\n", opts.name(source), opts.name(target)));
            }
            text
        }
    })
}

pub fn render_edges_diagram(
    records: &[RelationshipRecord],
    diagram: DiagramArg,
    opts: &RenderOptions,
) -> String {
    match diagram {
        DiagramArg::Dot => relationships_to_dot(records, opts),
        DiagramArg::Mermaid => relationships_to_mermaid(records, opts),
    }
}

fn status_label(status: ActionStatus) -> &'static str {
    match status {
        ActionStatus::Success => "ok",
        ActionStatus::Warning => "warning",
        ActionStatus::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_graph::validate_dag_text;

    #[test]
    fn text_validation_lists_edges_with_display_names() {
        let v = validate_dag_text("{'air_pollution': ['lung_cancer']}");
        let text = render_validation(&v, OutputFormat::Text, None, &RenderOptions::default()).unwrap();
        assert!(text.starts_with("Valid DAG"));
        assert!(text.contains("  Air Pollution -> Lung Cancer\n"));
    }

    #[test]
    fn json_validation_reports_failure() {
        let v = validate_dag_text("[1, 2]");
        let text = render_validation(&v, OutputFormat::Json, None, &RenderOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["graph"], json!({}));
    }

    #[test]
    fn diagram_is_skipped_for_invalid_graph() {
        let v = validate_dag_text("nonsense");
        let text = render_validation(
            &v,
            OutputFormat::Text,
            Some(DiagramArg::Dot),
            &RenderOptions::default(),
        )
        .unwrap();
        assert!(!text.contains("digraph"));
    }
}
