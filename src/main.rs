//! erdraft CLI entry point.
//!
//! Reads business rules, prints the Mermaid ER description, and optionally
//! renders it to SVG through the Mermaid CLI.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use erdraft::application::pipeline::{Pipeline, RenderOutcome, describe};
use erdraft::infra::app_config::{AppConfig, load_config, load_config_from};
use erdraft::infra::cli::input::{RuleSource, acquire_rules};
use erdraft::infra::engine::MermaidCli;

#[derive(Parser, Debug)]
#[command(name = "erdraft")]
#[command(version)]
#[command(about = "Turn plain-language business rules into Mermaid ER diagrams", long_about = None)]
struct Cli {
    /// Config file (defaults to $ERDRAFT_CONFIG_PATH or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// File containing the rules (stdin when omitted)
    #[arg()]
    input: Option<PathBuf>,

    /// Rules given inline, e.g. "A Player has name. A Player must many Enemies."
    #[arg(short, long)]
    rules: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Mermaid diagram description
    Describe {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render the diagram to SVG with the Mermaid CLI (mmdc)
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the diagram description to stderr
        #[arg(long)]
        show_source: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Describe { input } => {
            let rules = acquire_rules(RuleSource::from_args(input.rules, input.input))?;
            print!("{}", describe(&rules));
        }
        Commands::Render {
            input,
            output,
            show_source,
        } => {
            let rules = acquire_rules(RuleSource::from_args(input.rules, input.input))?;
            let config = resolve_config(cli.config.as_deref())?;
            let engine = MermaidCli::from_config(&config.renderer);
            if !engine.is_available() {
                log::warn!("Mermaid CLI unavailable; rendering will fail");
            }

            let pipeline = Pipeline::new(Arc::new(engine));
            let outcome = pipeline.run(&rules).await;

            if show_source && let Some(raw) = pipeline.surface().raw {
                eprint!("{raw}");
            }

            let alert = outcome.alert();
            match outcome {
                RenderOutcome::Rendered(rendered) => match output {
                    Some(path) => std::fs::write(&path, rendered.svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?,
                    None => print!("{}", rendered.svg),
                },
                RenderOutcome::Failed { .. } => {
                    if let Some(alert) = alert {
                        eprintln!("{alert}");
                    }
                    std::process::exit(1);
                }
                RenderOutcome::Superseded => {}
            }
        }
    }

    Ok(())
}

fn resolve_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    match path {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}
