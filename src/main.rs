//! `hpo-generank` main executable

pub mod cli;

use clap::{Parser, Subcommand};

/// CLI parser based on clap.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Phenotype based gene prioritization",
    long_about = "Ranks genes by the semantic similarity of their HPO terms to the terms of a patient"
)]
struct Cli {
    /// Commonly used arguments
    #[command(flatten)]
    common: cli::Args,

    /// The sub command to run
    #[command(subcommand)]
    command: Commands,
}

/// Enum supporting the parsing of top-level commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the information content of all terms
    ComputeIc(cli::compute_ic::Args),
    /// Rank genes for a patient
    Rank(cli::rank::Args),
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Build a tracing subscriber according to the configuration in `cli.common`.
    let collector = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(cli::max_level(&cli.common))
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    // Install collector and go into sub commands.
    tracing::subscriber::with_default(collector, || {
        match &cli.command {
            Commands::ComputeIc(args) => cli::compute_ic::run(&cli.common, args)?,
            Commands::Rank(args) => cli::rank::run(&cli.common, args)?,
        }

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
