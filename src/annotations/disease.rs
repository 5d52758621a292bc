use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::HpoTermId;

/// A set of diseases
///
/// The set does not contain the disease identifiers themselves, but only
/// their [`DiseaseId`]s.
pub type Diseases = HashSet<DiseaseId>;

/// A compact identifier of a disease within one [`DiseaseAnnotations`]
///
/// The id is assigned by [`DiseaseAnnotations::add_disease`] in the order in
/// which diseases are first seen. The original identifier, e.g. `OMIM:619340`,
/// is available via [`DiseaseAnnotations::disease_name`].
#[derive(Clone, Copy, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct DiseaseId {
    inner: u32,
}

impl DiseaseId {
    /// Returns the integer representation of the `DiseaseId`
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl From<u32> for DiseaseId {
    fn from(inner: u32) -> Self {
        DiseaseId { inner }
    }
}

impl Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disease #{}", self.inner)
    }
}

/// Direct disease annotations of HPO terms
///
/// Every term holds the diseases that were annotated to exactly this term.
/// No propagation to parent terms takes place here, this is part of the
/// information content calculation.
///
/// All diseases that were ever added form the annotation universe.
///
/// # Examples
///
/// ```
/// use hpo_generank::annotations::DiseaseAnnotations;
/// use hpo_generank::HpoTermId;
///
/// let mut annotations = DiseaseAnnotations::default();
/// let term = HpoTermId::from(7u32);
/// annotations.annotate("OMIM:243400", term);
/// annotations.annotate("OMIM:613287", term);
/// annotations.annotate("OMIM:243400", HpoTermId::from(118u32));
///
/// assert_eq!(annotations.universe_size(), 2);
/// assert_eq!(annotations.diseases(&term).unwrap().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DiseaseAnnotations {
    names: Vec<String>,
    index: HashMap<String, DiseaseId>,
    terms: HashMap<HpoTermId, Diseases>,
}

impl DiseaseAnnotations {
    /// Constructs new, empty `DiseaseAnnotations`
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a disease to the annotation universe
    ///
    /// Returns the [`DiseaseId`] of the disease. Adding the same disease
    /// again returns the existing id.
    pub fn add_disease(&mut self, name: &str) -> DiseaseId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }
        let id = DiseaseId::from(
            u32::try_from(self.names.len()).expect("fewer than u32::MAX diseases"),
        );
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Annotates the disease to the term
    ///
    /// The disease is added to the annotation universe if needed.
    pub fn annotate(&mut self, disease: &str, term: HpoTermId) -> DiseaseId {
        let id = self.add_disease(disease);
        self.terms.entry(term).or_default().insert(id);
        id
    }

    /// Returns the diseases directly annotated to the term
    pub fn diseases(&self, term: &HpoTermId) -> Option<&Diseases> {
        self.terms.get(term)
    }

    /// Returns the number of distinct diseases
    pub fn universe_size(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of terms with at least one direct annotation
    pub fn annotated_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the original identifier of the disease
    pub fn disease_name(&self, id: DiseaseId) -> Option<&str> {
        self.names.get(id.as_u32() as usize).map(String::as_str)
    }

    /// Returns the [`DiseaseId`] of a disease identifier, if it is known
    pub fn disease_id(&self, name: &str) -> Option<DiseaseId> {
        self.index.get(name).copied()
    }
}
