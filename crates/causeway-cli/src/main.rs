//! Causeway CLI
//!
//! Usage:
//!   causeway validate "{'smoking': ['lung cancer']}" [--diagram dot|mermaid]
//!   causeway normalize reply.json --kind confounders
//!   causeway suggest <kind> --factors ... --treatment ... --outcome ...
//!   causeway session
//!
//! `suggest` and `session` need OPENAI_API_KEY; the other commands never call
//! the LLM.

mod cli;
mod commands;
mod input;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use causeway_core::config::{CausewayConfig, CliOverrides, OutputFormat};
use causeway_core::tracing_setup::{directive_for_verbosity, init_tracing};
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(directive_for_verbosity(cli.verbose));

    let overrides = CliOverrides {
        model: cli.model.clone(),
        endpoint: cli.endpoint.clone(),
        timeout_secs: cli.timeout,
        format: cli.format.map(|f| OutputFormat::from(f).to_string()),
    };
    let config = CausewayConfig::load(&cli.project, Some(&overrides))
        .with_context(|| format!("loading configuration from {}", cli.project.display()))?;

    let ok = match cli.command {
        Commands::Validate {
            text,
            file,
            diagram,
        } => commands::validate::run(&config, text, file, diagram)?,
        Commands::Normalize {
            file,
            kind,
            diagram,
        } => commands::normalize::run(&config, &file, kind.into(), diagram)?,
        Commands::Suggest {
            kind,
            factors,
            treatment,
            outcome,
            expertises,
            dag,
            strategy,
        } => commands::suggest::run(
            &config,
            commands::suggest::SuggestArgs {
                kind: kind.into(),
                factors,
                treatment,
                outcome,
                expertises,
                dag,
                strategy: strategy.into(),
            },
        )?,
        Commands::Session { strategy } => commands::session::run(&config, strategy.into())?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
