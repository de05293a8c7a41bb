//! plotembed-ctl
//!
//! Operator CLI for the embedding template registry: list the templates,
//! verify a template directory initializes, and render a template with a
//! JSON context.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use plotembed_templates::{RegistryConfig, TemplateName};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "plotembed-ctl", version, about, styles = output::clap_styles())]
struct Cli {
    /// Config file to use instead of `.plotembed.toml` discovery
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base directory containing the templates subdirectory
    #[arg(long, global = true, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// HTML-escape .html templates
    #[arg(long, global = true)]
    autoescape: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the embedding templates and whether their files are present
    List,

    /// Load every required template and report the first failure
    Check,

    /// Render one template to stdout
    Render {
        /// Template symbol (PLOT_DIV) or file name (plot_div.html)
        name: TemplateName,

        /// JSON file holding the render context object
        #[arg(short, long, value_name = "FILE")]
        context: Option<PathBuf>,

        /// Context override as key=value; JSON values keep their type (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        output::error(format!("failed to initialize logging: {e}"));
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose {
        "plotembed_templates=debug,plotembed_ctl=debug"
    } else {
        "plotembed_templates=warn,plotembed_ctl=warn"
    };
    let mut filter = EnvFilter::from_default_env();
    for part in directive.split(',') {
        filter = filter.add_directive(part.parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = effective_config(&cli)?;
    tracing::debug!(?config, "Effective registry config");

    match cli.command {
        Commands::List => commands::handle_list_command(&config),
        Commands::Check => commands::handle_check_command(&config),
        Commands::Render { name, context, set } => {
            commands::handle_render_command(&config, name, context.as_deref(), &set)
        }
    }
}

/// Config file (explicit or discovered), then command-line overrides.
fn effective_config(cli: &Cli) -> anyhow::Result<RegistryConfig> {
    let mut config = match &cli.config {
        Some(path) => cli_config::load_from_file(path)?,
        None => cli_config::load_cli_config(),
    };

    if let Some(dir) = &cli.base_dir {
        config.base_dir = Some(cli_config::expand_path(dir));
    }
    if cli.autoescape {
        config.autoescape = true;
    }

    Ok(config)
}
