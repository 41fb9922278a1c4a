//! site-schema command-line tool

mod commands;
mod error;
mod output;

use anyhow::{Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use crate::commands::{GenerateArgs, TemplatesArgs, handle_generate, handle_templates};
use crate::error::CliError;

/// Generate a database schema from website content files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze files and render a schema
    Generate(GenerateArgs),
    /// List the built-in domain templates
    Templates(TemplatesArgs),
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Generate(args) => handle_generate(args),
        Commands::Templates(args) => handle_templates(args),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli).map_err(|err| anyhow!(err.user_message()))
}
