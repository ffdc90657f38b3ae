//! # Commands
//!
//! - `how2validate check` - Validate a secret against its provider's API
//! - `how2validate scope` - List supported provider/service pairs
//! - `how2validate completions` - Generate shell completions

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;
pub use h2v_core::CONFIG_FILENAME;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/Blackplums/how2validate";

#[derive(Debug, Parser)]
#[command(name = "how2validate", version, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    #[command(visible_alias = "s")]
    Scope,

    Completions(CompletionsArgs),
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// The full result envelope as machine-readable JSON.
    Json,
}

/// Arguments for the `how2validate check` command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Provider identifier (e.g. `npm`).
    #[arg(short, long)]
    pub provider: String,

    /// Service identifier under the provider (e.g. `npm_access_token`).
    #[arg(short, long)]
    pub service: String,

    /// The secret value to validate.
    #[arg(short = 'k', long)]
    pub secret: String,

    /// Include the provider's response payload in the result.
    #[arg(short, long)]
    pub response: bool,

    /// Email address recorded as the report contact in the result.
    #[arg(long)]
    pub report: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Path to `how2validate.toml` configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `how2validate completions` command.
#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

fn main() {
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    match run(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::print_error(&format!("{e:#}"));
            std::process::exit(ui::exit::ERROR);
        }
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Check(args) => commands::check::run(&args),
        Command::Scope => {
            commands::scope::run();
            Ok(0)
        }
        Command::Completions(args) => {
            commands::completions::run(args.shell);
            Ok(0)
        }
    }
}

fn build_about() -> String {
    format!(
        r"
  {} validates third-party API secrets against their providers.

  Each check issues one live authenticated request to the vendor's API
  and classifies the secret as active or inactive.",
        colors::accent().apply_to("how2validate").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    how2validate scope                         List supported services
    how2validate check -p npm \
        -s npm_access_token -k <SECRET>        Validate an npm token
    how2validate check ... --response          Keep the provider response
    how2validate check ... --format json       Output the result envelope

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
