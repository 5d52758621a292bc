//! The information content of HPO terms
//!
//! The information content (IC) of a term describes how specific a term is.
//! It is derived from the number of diseases that are annotated to the
//! term or to any of its descendants: the fewer diseases, the higher the IC.
//!
//! ```text
//! frequency(T) = (diseases(T) + 1) / (all diseases + 1)
//! IC(T) = -ln(frequency(T))
//! ```
use std::collections::HashMap;

use tracing::debug;

use crate::annotations::{DiseaseAnnotations, Diseases};
use crate::ontology::OntologyGraph;
use crate::{HpoError, HpoResult, HpoTermId};

/// Maps HPO terms to their information content
///
/// The table keeps the order in which terms were first inserted, which is
/// the order used when it is written to a file.
///
/// # Missing terms
///
/// A term that is not present in the table has an information content
/// of `0.0`. Many valid terms have no computed information content, so
/// [`IcTable::get`] does not fail for them. Use [`IcTable::try_get`]
/// to distinguish a missing term from a term with IC `0.0`.
///
/// # Examples
///
/// ```
/// use hpo_generank::{HpoTermId, IcTable};
///
/// let mut table = IcTable::default();
/// table.insert(HpoTermId::from(1u32), 3.3219).unwrap();
///
/// assert_eq!(table.get(&HpoTermId::from(1u32)), 3.3219);
/// assert_eq!(table.get(&HpoTermId::from(2u32)), 0.0);
/// assert!(table.try_get(&HpoTermId::from(2u32)).is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct IcTable {
    order: Vec<HpoTermId>,
    values: HashMap<HpoTermId, f64>,
}

impl IcTable {
    /// Constructs a new, empty `IcTable`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the information content of a term
    ///
    /// Setting the value of an existing term replaces the value
    /// but keeps the original position of the term.
    ///
    /// # Errors
    ///
    /// [`HpoError::InvalidInput`] if the value is negative or not finite
    pub fn insert(&mut self, term: HpoTermId, ic: f64) -> HpoResult<()> {
        if !ic.is_finite() || ic < 0.0 {
            return Err(HpoError::InvalidInput(format!(
                "invalid information content {ic} for {term}"
            )));
        }
        if self.values.insert(term, ic).is_none() {
            self.order.push(term);
        }
        Ok(())
    }

    /// Returns the information content of the term or `0.0` if
    /// the term is not in the table
    pub fn get(&self, term: &HpoTermId) -> f64 {
        self.try_get(term).unwrap_or(0.0)
    }

    /// Returns the information content of the term, if it is in the table
    pub fn try_get(&self, term: &HpoTermId) -> Option<f64> {
        self.values.get(term).copied()
    }

    /// Returns the number of terms in the table
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the table is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates all terms and their information content in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (HpoTermId, f64)> + '_ {
        self.order.iter().map(|term| (*term, self.values[term]))
    }
}

/// Converts the number of annotated diseases into information content
///
/// Both counts are Laplace-smoothed, so a term without any diseases
/// gets the maximum information content `ln(total + 1)` instead of infinity.
///
/// # Examples
///
/// ```
/// use hpo_generank::information_content::information_content;
///
/// assert_eq!(information_content(9, 9), 0.0);
/// assert!((information_content(0, 9) - 10f64.ln()).abs() < 1e-12);
/// ```
pub fn information_content(annotated: usize, total: usize) -> f64 {
    // counts are far below 2^52, the conversion is exact
    #[allow(clippy::cast_precision_loss)]
    let frequency = (annotated as f64 + 1.0) / (total as f64 + 1.0);
    // subtracting from 0.0 yields +0.0 instead of -0.0 for frequency 1
    0.0 - frequency.ln()
}

/// Calculates the information content of every term in `terms`
///
/// The diseases of a term are all diseases directly annotated to the term
/// or to any of its descendants. Each term is calculated independently,
/// the returned table follows the order of `terms`.
///
/// # Errors
///
/// [`HpoError::DoesNotExist`] if a term is not part of the ontology
///
/// # Examples
///
/// ```
/// use hpo_generank::annotations::DiseaseAnnotations;
/// use hpo_generank::information_content::calculate;
/// use hpo_generank::{HpoTermId, Ontology};
///
/// let mut ontology = Ontology::default();
/// ontology.insert_term("root".to_string(), 1u32);
/// ontology.insert_term("leaf".to_string(), 2u32);
/// ontology.add_parent(1u32, 2u32).unwrap();
///
/// let mut annotations = DiseaseAnnotations::default();
/// annotations.annotate("OMIM:1", HpoTermId::from(2u32));
/// annotations.annotate("OMIM:2", HpoTermId::from(1u32));
///
/// let ic = calculate(&ontology, ontology.hpo_ids(), &annotations).unwrap();
/// assert_eq!(ic.get(&HpoTermId::from(1u32)), 0.0);
/// assert!(ic.get(&HpoTermId::from(2u32)) > 0.0);
/// ```
pub fn calculate<O, I>(
    ontology: &O,
    terms: I,
    annotations: &DiseaseAnnotations,
) -> HpoResult<IcTable>
where
    O: OntologyGraph + ?Sized,
    I: IntoIterator<Item = HpoTermId>,
{
    let total = annotations.universe_size();
    debug!("Calculating information content for {} diseases", total);

    let mut table = IcTable::new();
    for term in terms {
        let diseases = propagated_diseases(ontology, term, annotations)?;
        table.insert(term, information_content(diseases.len(), total))?;
    }
    debug!("Calculated information content of {} terms", table.len());
    Ok(table)
}

/// Returns all diseases annotated to `term` or to any of its descendants
///
/// # Errors
///
/// [`HpoError::DoesNotExist`] if the term is not part of the ontology
pub fn propagated_diseases<O: OntologyGraph + ?Sized>(
    ontology: &O,
    term: HpoTermId,
    annotations: &DiseaseAnnotations,
) -> HpoResult<Diseases> {
    let mut diseases = Diseases::new();
    let descendants = ontology.descendants(term)?;
    for id in std::iter::once(term).chain(descendants.iter()) {
        if let Some(direct) = annotations.diseases(&id) {
            diseases.extend(direct.iter().copied());
        }
    }
    Ok(diseases)
}
