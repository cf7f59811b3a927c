//! Line-oriented interactive session.

use std::io::{BufRead, Write};

use anyhow::Result;
use causeway_core::models::{AnalysisStep, RelationshipStrategy, SessionContext, SuggestionKind};
use causeway_core::CausewayConfig;
use causeway_graph::{validate_dag_text, RenderOptions};
use causeway_suggest::{CausalAssistant, LlmSuggester};

use crate::output::{render_outcome, render_validation};

const HELP: &str = "\
Commands:
  factors <a, b, c>   set the comma-separated factor list
  treatment <name>    set the treatment variable
  outcome <name>      set the outcome variable
  dag <text>          set the DAG text and validate it
  model <name>        switch the LLM model
  show                print the current session values
  steps               list analysis steps and their actions
  run <action>        run an action (or type the action name alone)
  help                show this message
  quit                end the session";

#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    Factors(String),
    Treatment(String),
    Outcome(String),
    Dag(String),
    Model(String),
    Show,
    Steps,
    Run(SuggestionKind),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_line(line: &str) -> SessionCommand {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head.to_ascii_lowercase().as_str() {
        "" => SessionCommand::Empty,
        "factors" => SessionCommand::Factors(rest.to_string()),
        "treatment" => SessionCommand::Treatment(rest.to_string()),
        "outcome" => SessionCommand::Outcome(rest.to_string()),
        "dag" => SessionCommand::Dag(rest.to_string()),
        "model" if !rest.is_empty() => SessionCommand::Model(rest.to_string()),
        "show" => SessionCommand::Show,
        "steps" => SessionCommand::Steps,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        "run" => match rest.parse() {
            Ok(kind) => SessionCommand::Run(kind),
            Err(e) => SessionCommand::Unknown(e),
        },
        other => match other.parse() {
            Ok(kind) if rest.is_empty() => SessionCommand::Run(kind),
            _ => SessionCommand::Unknown(format!("unknown command {head:?}; type `help`")),
        },
    }
}

pub fn run(config: &CausewayConfig, strategy: RelationshipStrategy) -> Result<bool> {
    // Missing credentials end the command before the prompt is shown.
    let suggester = LlmSuggester::from_config(config)?;
    let opts = RenderOptions::from(&config.display);
    let mut assistant = CausalAssistant::new(suggester)
        .with_render_options(opts)
        .with_strategy(strategy);
    let mut session = SessionContext::new(config.llm.effective_model());
    let format = config.display.effective_format();

    tracing::info!(session_id = %session.session_id, "session started");
    println!("Causeway causal analysis session (model {}). Type `help` for commands.", session.model);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("causeway> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        match parse_line(&line?) {
            SessionCommand::Empty => {}
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Steps => print!("{}", steps_listing()),
            SessionCommand::Show => print!("{}", describe(&session)),
            SessionCommand::Factors(text) => {
                session.set_factors_from_text(&text);
                println!("{} factor(s) set.", session.factors.len());
            }
            SessionCommand::Treatment(text) => session.set_treatment(&text),
            SessionCommand::Outcome(text) => session.set_outcome(&text),
            SessionCommand::Dag(text) => {
                session.set_dag_text(&text);
                let validation = validate_dag_text(&text);
                print!("{}", render_validation(&validation, format, None, &opts)?);
            }
            SessionCommand::Model(model) => {
                assistant.suggester_mut().set_model(model.as_str());
                session.model = model;
                println!("Model set to {}.", session.model);
            }
            SessionCommand::Run(kind) => {
                let outcome = assistant.run(&mut session, kind);
                print!("{}", render_outcome(&outcome, format)?);
            }
            SessionCommand::Unknown(message) => println!("{message}"),
        }
    }
    tracing::info!(session_id = %session.session_id, "session ended");
    Ok(true)
}

fn steps_listing() -> String {
    let mut out = String::new();
    for step in AnalysisStep::ALL {
        out.push_str(step.label());
        out.push('\n');
        for kind in step.kinds() {
            out.push_str(&format!("  {:<24} {}\n", kind.as_str(), kind.title()));
        }
    }
    out
}

fn describe(session: &SessionContext) -> String {
    let or_unset = |s: &str| if s.is_empty() { "(unset)".to_string() } else { s.to_string() };
    format!(
        "model:      {}\nfactors:    {}\ntreatment:  {}\noutcome:    {}\nexpertises: {}\ndag:        {}\n",
        session.model,
        session.factors.join(", "),
        or_unset(&session.treatment),
        or_unset(&session.outcome),
        session
            .domain_expertises
            .as_ref()
            .map_or("(not yet suggested)".to_string(), |e| e.join(", ")),
        session.dag_text,
    )
}
