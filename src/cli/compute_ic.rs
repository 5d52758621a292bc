//! Implementation of the `compute-ic` sub command

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use hpo_generank::{information_content, output, parser, Ontology};
use tracing::info;

/// Command line arguments for `compute-ic` sub command.
#[derive(Parser, Debug)]
#[command(about = "Compute the information content of all HPO terms", long_about = None)]
pub struct Args {
    /// Path to the `hp.obo` ontology file.
    #[arg(long, required = true)]
    pub obo: PathBuf,
    /// Path to the `phenotype.hpoa` disease annotation file.
    #[arg(long, required = true)]
    pub phenotype: PathBuf,
    /// Path to the output TSV file.
    #[arg(long, required = true)]
    pub output: PathBuf,
}

/// Main entry point for the `compute-ic` sub command.
pub fn run(args_common: &super::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::debug!("args_common = {:?}", &args_common);
    tracing::debug!("args = {:?}", &args);

    info!("Loading HPO...");
    let before_loading = Instant::now();
    let ontology = Ontology::from_obo(&args.obo)?;
    info!(
        "...done loading {} terms (version {}) in {:?}",
        ontology.len(),
        ontology.hpo_version().unwrap_or("unknown"),
        before_loading.elapsed()
    );

    info!("Loading disease annotations...");
    let before_annotations = Instant::now();
    let annotations = parser::phenotype_hpoa::parse(&args.phenotype)?;
    info!(
        "...done loading {} diseases in {:?}",
        annotations.universe_size(),
        before_annotations.elapsed()
    );

    info!("Computing information content...");
    let before_ic = Instant::now();
    let table = information_content::calculate(&ontology, ontology.hpo_ids(), &annotations)?;
    info!("...done computing in {:?}", before_ic.elapsed());

    output::write_information_content(&args.output, &table)?;
    info!("Wrote information content to {}", args.output.display());
    Ok(())
}
