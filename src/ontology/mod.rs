//! The ontology graph and the ancestor closure cache
use core::fmt::Debug;
use std::path::Path;

use crate::parser;
use crate::term::internal::HpoTermInternal;
use crate::{HpoError, HpoGroup, HpoResult, HpoTermId};

mod cache;
mod termarena;
pub use cache::AncestorCache;
use termarena::Arena;

/// The graph capability that all similarity and information content
/// calculations rely on
///
/// Any ontology backend that can list the strict ancestors and strict
/// descendants of a term can be used. Both methods exclude the term itself.
///
/// # Errors
///
/// Both methods must return [`HpoError::DoesNotExist`] if the term is
/// not part of the ontology.
pub trait OntologyGraph {
    /// Returns all direct and indirect parents of the term
    fn ancestors(&self, term: HpoTermId) -> HpoResult<HpoGroup>;

    /// Returns all direct and indirect children of the term
    fn descendants(&self, term: HpoTermId) -> HpoResult<HpoGroup>;
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` holds all HPO terms and their `is_a` relationships
///
/// Every term (except the root term `All`) has at least one parent term.
/// The terms are kept in the order in which they were added, which is the
/// order of the `[Term]` stanzas of the `hp.obo` source file.
///
/// ```mermaid
/// erDiagram
///     ONTOLOGY ||--|{ HPOTERM : contains
///     HPOTERM ||--|{ HPOTERM : is_a
///     HPOTERM {
///         HpoTermId id
///         str name
///         HpoGroup parents
///         HpoGroup children
///         bool obsolete
///     }
/// ```
///
/// # Construction
///
/// Either parse an `hp.obo` file with [`Ontology::from_obo`] or build it
/// manually:
/// 1. construct an empty Ontology [`Ontology::default`]
/// 2. Add all terms [`Ontology::insert_term`]
/// 3. Connect terms to their parents [`Ontology::add_parent`]
///
/// # Examples
///
/// ```
/// use hpo_generank::{HpoTermId, Ontology, OntologyGraph};
///
/// let mut ontology = Ontology::default();
/// ontology.insert_term("All".to_string(), 1u32);
/// ontology.insert_term("Phenotypic abnormality".to_string(), 118u32);
/// ontology.insert_term("Abnormality of the nervous system".to_string(), 707u32);
/// ontology.add_parent(1u32, 118u32).unwrap();
/// ontology.add_parent(118u32, 707u32).unwrap();
///
/// let ancestors = ontology.ancestors(HpoTermId::from(707u32)).unwrap();
/// assert_eq!(ancestors.len(), 2);
///
/// let descendants = ontology.descendants(HpoTermId::from(1u32)).unwrap();
/// assert_eq!(descendants.len(), 2);
///
/// assert!(ontology.ancestors(HpoTermId::from(9999u32)).is_err());
/// ```
#[derive(Default)]
pub struct Ontology {
    hpo_terms: Arena,
    hpo_version: Option<String>,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.hpo_terms.len())
    }
}

impl Ontology {
    /// Builds the [`Ontology`] from an `hp.obo` file
    ///
    /// # Errors
    ///
    /// - [`HpoError::CannotOpenFile`]: the file is not present or not readable
    /// - [`HpoError::InvalidInput`]: a term stanza is malformed
    /// - [`HpoError::DoesNotExist`]: an `is_a` line points to a missing term
    pub fn from_obo<P: AsRef<Path>>(file: P) -> HpoResult<Self> {
        let mut ont = Ontology::default();
        parser::hp_obo::read_obo_file(file, &mut ont)?;
        Ok(ont)
    }

    /// Returns the number of terms in the Ontology
    pub fn len(&self) -> usize {
        self.hpo_terms.len()
    }

    /// Returns `true` if the Ontology does not contain any terms
    pub fn is_empty(&self) -> bool {
        self.hpo_terms.len() == 0
    }

    /// Returns the `data-version` of the source file, if it specified one
    pub fn hpo_version(&self) -> Option<&str> {
        self.hpo_version.as_deref()
    }

    /// Returns `true` if the term is part of the Ontology
    pub fn contains<I: Into<HpoTermId>>(&self, term_id: I) -> bool {
        self.hpo_terms.get(term_id.into()).is_some()
    }

    /// Returns the name of the term
    pub fn name<I: Into<HpoTermId>>(&self, term_id: I) -> Option<&str> {
        self.hpo_terms.get(term_id.into()).map(HpoTermInternal::name)
    }

    /// Returns `true` if the term is present and flagged as obsolete
    pub fn is_obsolete<I: Into<HpoTermId>>(&self, term_id: I) -> bool {
        self.hpo_terms
            .get(term_id.into())
            .map_or(false, HpoTermInternal::obsolete)
    }

    /// Returns the direct parents of the term
    pub fn parents<I: Into<HpoTermId>>(&self, term_id: I) -> Option<&HpoGroup> {
        self.hpo_terms.get(term_id.into()).map(HpoTermInternal::parents)
    }

    /// Returns the direct children of the term
    pub fn children<I: Into<HpoTermId>>(&self, term_id: I) -> Option<&HpoGroup> {
        self.hpo_terms.get(term_id.into()).map(HpoTermInternal::children)
    }

    /// Iterates the [`HpoTermId`]s of all terms in insertion order
    pub fn hpo_ids(&self) -> impl Iterator<Item = HpoTermId> + '_ {
        self.hpo_terms.values().map(|term| *term.id())
    }

    /// Adds a new term without any connections
    ///
    /// Adding a term with an already existing id replaces the existing
    /// term, but keeps its position in the Ontology.
    pub fn insert_term<I: Into<HpoTermId>>(&mut self, name: String, id: I) {
        self.add_term(HpoTermInternal::new(name, id.into()));
    }

    /// Adds a connection from a term to its parent
    ///
    /// Both terms must already be part of the Ontology.
    ///
    /// # Errors
    ///
    /// [`HpoError::DoesNotExist`] if one of the terms is not present
    pub fn add_parent<I: Into<HpoTermId>, J: Into<HpoTermId>>(
        &mut self,
        parent_id: I,
        child_id: J,
    ) -> HpoResult<()> {
        let parent_id = parent_id.into();
        let child_id = child_id.into();

        // both terms must exist before any edge is added
        for id in [child_id, parent_id] {
            if self.hpo_terms.get(id).is_none() {
                return Err(HpoError::DoesNotExist(id.to_string()));
            }
        }

        if let Some(child) = self.hpo_terms.get_mut(child_id) {
            child.add_parent(parent_id);
        }
        if let Some(parent) = self.hpo_terms.get_mut(parent_id) {
            parent.add_child(child_id);
        }
        Ok(())
    }

    /// Inserts a fully parsed term, without linking it to its parents
    ///
    /// Returns `false` if a term with the same id was replaced
    pub(crate) fn add_term(&mut self, term: HpoTermInternal) -> bool {
        self.hpo_terms.insert(term)
    }

    pub(crate) fn set_hpo_version(&mut self, version: &str) {
        self.hpo_version = Some(version.to_string());
    }

    /// Follows the edges returned by `next` from `term_id` and collects
    /// every term that is reached, excluding `term_id` itself
    fn closure(
        &self,
        term_id: HpoTermId,
        next: fn(&HpoTermInternal) -> &HpoGroup,
    ) -> HpoResult<HpoGroup> {
        let term = self
            .hpo_terms
            .get(term_id)
            .ok_or_else(|| HpoError::DoesNotExist(term_id.to_string()))?;

        let mut res = HpoGroup::new();
        let mut stack: Vec<HpoTermId> = next(term).iter().collect();
        while let Some(id) = stack.pop() {
            if !res.insert(id) {
                continue;
            }
            let term = self
                .hpo_terms
                .get(id)
                .ok_or_else(|| HpoError::DoesNotExist(id.to_string()))?;
            stack.extend(next(term).iter().filter(|other| !res.contains(other)));
        }
        Ok(res)
    }
}

impl OntologyGraph for Ontology {
    fn ancestors(&self, term: HpoTermId) -> HpoResult<HpoGroup> {
        self.closure(term, HpoTermInternal::parents)
    }

    fn descendants(&self, term: HpoTermId) -> HpoResult<HpoGroup> {
        self.closure(term, HpoTermInternal::children)
    }
}
