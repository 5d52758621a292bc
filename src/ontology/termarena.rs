use std::collections::HashMap;

use crate::term::internal::HpoTermInternal;
use crate::{HpoTermId, DEFAULT_NUM_TERMS};

/// Storage of all terms of an [`crate::Ontology`]
///
/// Terms are kept in insertion order, which is the order of the
/// `[Term]` stanzas in the source file.
pub(crate) struct Arena {
    terms: Vec<HpoTermInternal>,
    index: HashMap<HpoTermId, usize>,
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Inserts a term, replacing an existing term with the same id in place
    ///
    /// Returns `false` if the term replaced an existing one
    pub fn insert(&mut self, term: HpoTermInternal) -> bool {
        match self.index.get(term.id()) {
            Some(idx) => {
                self.terms[*idx] = term;
                false
            }
            None => {
                self.index.insert(*term.id(), self.terms.len());
                self.terms.push(term);
                true
            }
        }
    }

    pub fn get(&self, id: HpoTermId) -> Option<&HpoTermInternal> {
        self.index.get(&id).map(|idx| &self.terms[*idx])
    }

    pub fn get_mut(&mut self, id: HpoTermId) -> Option<&mut HpoTermInternal> {
        match self.index.get(&id) {
            Some(idx) => self.terms.get_mut(*idx),
            None => None,
        }
    }

    pub fn values(&self) -> std::slice::Iter<'_, HpoTermInternal> {
        self.terms.iter()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: Vec::with_capacity(DEFAULT_NUM_TERMS),
            index: HashMap::with_capacity(DEFAULT_NUM_TERMS),
        }
    }
}
