use std::collections::HashMap;

use crate::{HpoGroup, HpoTermId, DEFAULT_NUM_GENES};

/// A single gene
///
/// A gene is identified by its symbol and is connected to a set of HPO terms
#[derive(Default, Debug, Clone)]
pub struct Gene {
    name: String,
    hpos: HpoGroup,
}

impl Gene {
    /// Initializes a new Gene without any terms
    pub fn new(name: &str) -> Gene {
        Gene {
            name: name.to_string(),
            hpos: HpoGroup::default(),
        }
    }

    /// The name of the gene (gene symbol)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The set of connected HPO terms
    pub fn hpo_terms(&self) -> &HpoGroup {
        &self.hpos
    }

    /// Connect another HPO term to the gene
    ///
    /// Returns `false` if the term was already connected
    pub fn add_term<I: Into<HpoTermId>>(&mut self, term_id: I) -> bool {
        self.hpos.insert(term_id.into())
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Gene) -> bool {
        self.name == other.name
    }
}
impl Eq for Gene {}

/// The phenotypes of every gene
///
/// Genes are kept in the order in which they were first seen, so that
/// rankings of genes with identical scores are reproducible.
///
/// # Examples
///
/// ```
/// use hpo_generank::annotations::GeneToPhenotype;
/// use hpo_generank::HpoTermId;
///
/// let mut genes = GeneToPhenotype::default();
/// genes.add_term("NAT2", HpoTermId::from(7u32));
/// genes.add_term("AARS1", HpoTermId::from(2460u32));
/// genes.add_term("NAT2", HpoTermId::from(1939u32));
///
/// assert_eq!(genes.len(), 2);
/// assert_eq!(genes.gene("NAT2").unwrap().hpo_terms().len(), 2);
///
/// let names: Vec<&str> = genes.iter().map(|gene| gene.name()).collect();
/// assert_eq!(names, vec!["NAT2", "AARS1"]);
/// ```
#[derive(Debug)]
pub struct GeneToPhenotype {
    genes: Vec<Gene>,
    index: HashMap<String, usize>,
}

impl Default for GeneToPhenotype {
    fn default() -> Self {
        Self {
            genes: Vec::with_capacity(DEFAULT_NUM_GENES),
            index: HashMap::with_capacity(DEFAULT_NUM_GENES),
        }
    }
}

impl GeneToPhenotype {
    /// Connects the term to the gene, adding the gene if it is new
    pub fn add_term(&mut self, gene: &str, term: HpoTermId) -> bool {
        let idx = match self.index.get(gene) {
            Some(idx) => *idx,
            None => {
                self.index.insert(gene.to_string(), self.genes.len());
                self.genes.push(Gene::new(gene));
                self.genes.len() - 1
            }
        };
        self.genes[idx].add_term(term)
    }

    /// Returns the [`Gene`] with the given symbol
    pub fn gene(&self, name: &str) -> Option<&Gene> {
        self.index.get(name).map(|idx| &self.genes[*idx])
    }

    /// Iterates all genes in the order they were first added
    pub fn iter(&self) -> std::slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    /// Returns the number of genes
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if there are no genes
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeneToPhenotype {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;
    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}
