//! Implementation of the `rank` sub command

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use hpo_generank::similarity::{BestMatchAverage, GroupSimilarity, Mica};
use hpo_generank::{output, parser, ranking, AncestorCache, Ontology};
use tracing::info;

/// Command line arguments for `rank` sub command.
#[derive(Parser, Debug)]
#[command(about = "Rank genes by phenotype similarity to a patient", long_about = None)]
pub struct Args {
    /// Path to the `hp.obo` ontology file.
    #[arg(long, required = true)]
    pub obo: PathBuf,
    /// Path to the information content TSV file.
    #[arg(long, required = true)]
    pub ic: PathBuf,
    /// Path to the `genes_to_phenotype.txt` file.
    #[arg(long, required = true)]
    pub genes: PathBuf,
    /// Path to the file with the patient's HPO terms.
    #[arg(long, required = true)]
    pub patient: PathBuf,
    /// Path to the output TSV file.
    #[arg(long, required = true)]
    pub output: PathBuf,
}

/// Main entry point for the `rank` sub command.
pub fn run(args_common: &super::Args, args: &Args) -> Result<(), anyhow::Error> {
    tracing::debug!("args_common = {:?}", &args_common);
    tracing::debug!("args = {:?}", &args);

    info!("Loading inputs...");
    let before_loading = Instant::now();
    let ontology = Ontology::from_obo(&args.obo)?;
    let ic = parser::ic_file::parse(&args.ic)?;
    let genes = parser::gene_to_hpo::parse(&args.genes)?;
    let patient = parser::patient::parse(&args.patient)?;
    info!(
        "...done loading {} terms, {} genes and {} patient terms in {:?}",
        ontology.len(),
        genes.len(),
        patient.len(),
        before_loading.elapsed()
    );

    info!("Ranking genes...");
    let before_ranking = Instant::now();
    let cache = AncestorCache::new(&ontology);
    let similarity = GroupSimilarity::new(BestMatchAverage, Mica::new(&cache, &ic));
    let scores = ranking::rank_genes(&patient, &genes, &similarity)?;
    info!(
        "...done ranking {} genes in {:?}",
        scores.len(),
        before_ranking.elapsed()
    );

    output::write_ranking(&args.output, &scores)?;
    info!("Wrote ranking to {}", args.output.display());
    Ok(())
}
