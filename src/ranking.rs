//! Ranking of genes by the similarity of their phenotypes to a patient
//!
//! Every gene is scored with the best-match-average of the patient terms
//! against the terms of the gene. The patient is the query, so each
//! patient term is matched to its best counterpart in the gene.
//!
//! # Examples
//!
//! ```
//! use hpo_generank::annotations::GeneToPhenotype;
//! use hpo_generank::ranking::rank_genes;
//! use hpo_generank::similarity::{BestMatchAverage, GroupSimilarity, Mica};
//! use hpo_generank::{AncestorCache, HpoGroup, HpoTermId, IcTable, Ontology};
//!
//! let mut ontology = Ontology::default();
//! ontology.insert_term("All".to_string(), 1u32);
//! ontology.insert_term("A".to_string(), 2u32);
//! ontology.insert_term("B".to_string(), 3u32);
//! ontology.add_parent(1u32, 2u32).unwrap();
//! ontology.add_parent(1u32, 3u32).unwrap();
//!
//! let mut ic = IcTable::default();
//! ic.insert(HpoTermId::from(1u32), 0.5).unwrap();
//! ic.insert(HpoTermId::from(2u32), 2.0).unwrap();
//! ic.insert(HpoTermId::from(3u32), 1.0).unwrap();
//!
//! let mut genes = GeneToPhenotype::default();
//! genes.add_term("GENE_B", HpoTermId::from(3u32));
//! genes.add_term("GENE_A", HpoTermId::from(2u32));
//!
//! let patient: HpoGroup = [HpoTermId::from(2u32)].into_iter().collect();
//!
//! let cache = AncestorCache::new(&ontology);
//! let sim = GroupSimilarity::new(BestMatchAverage, Mica::new(&cache, &ic));
//!
//! let ranking = rank_genes(&patient, &genes, &sim).unwrap();
//! assert_eq!(ranking[0].gene(), "GENE_A");
//! assert_eq!(ranking[0].score(), 2.0);
//! assert_eq!(ranking[1].gene(), "GENE_B");
//! assert_eq!(ranking[1].score(), 0.5);
//! ```
use tracing::debug;

use crate::annotations::GeneToPhenotype;
use crate::similarity::{GroupSimilarity, Similarity, SimilarityCombiner};
use crate::{HpoGroup, HpoResult};

/// The similarity score of a single gene
#[derive(Debug, Clone, PartialEq)]
pub struct GeneScore {
    gene: String,
    score: f64,
}

impl GeneScore {
    /// Constructs a new `GeneScore`
    pub fn new(gene: &str, score: f64) -> Self {
        Self {
            gene: gene.to_string(),
            score,
        }
    }

    /// The gene symbol
    pub fn gene(&self) -> &str {
        &self.gene
    }

    /// The unrounded similarity score
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Scores every gene and returns them sorted by descending score
///
/// Genes with the same score keep the order of `genes`.
///
/// # Errors
///
/// - [`crate::HpoError::EmptyQuerySet`] if the patient has no terms
/// - [`crate::HpoError::EmptyReferenceSet`] if a gene has no terms
/// - [`crate::HpoError::DoesNotExist`] if a patient or gene term is
///   not part of the ontology
pub fn rank_genes<T: Similarity, C: SimilarityCombiner>(
    patient: &HpoGroup,
    genes: &GeneToPhenotype,
    similarity: &GroupSimilarity<T, C>,
) -> HpoResult<Vec<GeneScore>> {
    let mut scores = genes
        .iter()
        .map(|gene| {
            similarity
                .calculate(patient, gene.hpo_terms())
                .map(|score| GeneScore::new(gene.name(), score))
        })
        .collect::<HpoResult<Vec<GeneScore>>>()?;

    // `sort_by` is stable, ties stay in input order
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!("Ranked {} genes", scores.len());
    Ok(scores)
}
