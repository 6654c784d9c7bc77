//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pathcards - Compare extracted index cards against a reference model.
#[derive(Debug, Parser)]
#[command(name = "pathcards")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "PATHCARDS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify inference cards against a reference model
    Compare(CompareArgs),

    /// Export cards as a Simple Interaction Format network
    Sif(SifArgs),
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Reference model cards (file or directory)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Inference cards to classify (file or directory)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep per-candidate match details
    #[arg(short, long)]
    pub detailed: bool,

    /// Maximum distance between equal modification positions
    #[arg(long)]
    pub position_tolerance: Option<u32>,

    /// Skip inference cards with more filtered candidates than this
    #[arg(long)]
    pub max_candidates: Option<usize>,
}

/// Arguments for the sif command.
#[derive(Debug, Parser)]
pub struct SifArgs {
    /// Cards to convert (file or directory)
    #[arg(short, long)]
    pub input: PathBuf,

    /// SIF output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// HGNC mapping file (symbol, synonyms, UniProt id; tab-separated)
    #[arg(long)]
    pub hgnc_mapping: PathBuf,
}
