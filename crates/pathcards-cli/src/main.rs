//! Pathcards CLI - Classify index cards against a reference model.

use clap::Parser;
use pathcards_cli::commands;
use pathcards_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> pathcards_cli::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let color_enabled = !cli.no_color && config.output.color;
    let formatter = Formatter::new(color_enabled);

    match cli.command {
        Command::Compare(args) => commands::execute_compare(args, &config, &formatter)?,
        Command::Sif(args) => commands::execute_sif(args, &formatter)?,
    }

    Ok(())
}
