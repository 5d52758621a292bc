use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::ontology::OntologyGraph;
use crate::{HpoGroup, HpoResult, HpoTermId};

/// Memoizes the ancestors of every term that was queried
///
/// The cache owns a private mapping from term to its strict ancestors and
/// borrows the ontology it queries. Each entry is created on the first
/// request for a term and never changes afterwards.
///
/// The cache can be shared across threads. Two threads asking for the same
/// uncached term may both traverse the ontology, but only complete
/// ancestor sets are ever stored or returned.
///
/// # Examples
///
/// ```
/// use hpo_generank::{AncestorCache, HpoTermId, Ontology};
///
/// let mut ontology = Ontology::default();
/// ontology.insert_term("All".to_string(), 1u32);
/// ontology.insert_term("Phenotypic abnormality".to_string(), 118u32);
/// ontology.add_parent(1u32, 118u32).unwrap();
///
/// let cache = AncestorCache::new(&ontology);
/// let ancestors = cache.ancestors(HpoTermId::from(118u32)).unwrap();
/// assert!(ancestors.contains(&HpoTermId::from(1u32)));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct AncestorCache<'a, O: ?Sized> {
    ontology: &'a O,
    cache: RwLock<HashMap<HpoTermId, Arc<HpoGroup>>>,
}

impl<'a, O: OntologyGraph + ?Sized> AncestorCache<'a, O> {
    /// Constructs a new, empty cache on top of `ontology`
    pub fn new(ontology: &'a O) -> Self {
        Self {
            ontology,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the strict ancestors of `term`
    ///
    /// Only the first call for a term traverses the ontology.
    ///
    /// # Errors
    ///
    /// [`crate::HpoError::DoesNotExist`] if the term is not part of the
    /// ontology. Failed lookups are not cached.
    pub fn ancestors(&self, term: HpoTermId) -> HpoResult<Arc<HpoGroup>> {
        if let Some(ancestors) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&term)
        {
            return Ok(Arc::clone(ancestors));
        }

        trace!("Caching ancestors of {}", term);
        let ancestors = Arc::new(self.ontology.ancestors(term)?);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(term).or_insert(ancestors)))
    }

    /// Returns the ancestors of `term` including `term` itself
    ///
    /// # Errors
    ///
    /// [`crate::HpoError::DoesNotExist`] if the term is not part of the ontology
    pub fn ancestors_with_self(&self, term: HpoTermId) -> HpoResult<HpoGroup> {
        let mut group = HpoGroup::clone(&*self.ancestors(term)?);
        group.insert(term);
        Ok(group)
    }

    /// Returns the number of cached terms
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no term has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;
    use crate::{HpoError, Ontology};

    /// A chain `1 <- 2 <- 3` that counts how often it is traversed
    #[derive(Default)]
    struct CountingChain {
        calls: Cell<usize>,
    }

    impl OntologyGraph for CountingChain {
        fn ancestors(&self, term: HpoTermId) -> HpoResult<HpoGroup> {
            self.calls.set(self.calls.get() + 1);
            match term.as_u32() {
                1 => Ok(HpoGroup::new()),
                2 => Ok([HpoTermId::from(1u32)].into_iter().collect()),
                3 => Ok([1u32, 2u32].into_iter().map(HpoTermId::from).collect()),
                _ => Err(HpoError::DoesNotExist(term.to_string())),
            }
        }

        fn descendants(&self, _: HpoTermId) -> HpoResult<HpoGroup> {
            unimplemented!("not needed for the cache")
        }
    }

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let chain = CountingChain::default();
        let cache = AncestorCache::new(&chain);
        assert!(cache.is_empty());

        let first = cache.ancestors(3u32.into()).unwrap();
        let second = cache.ancestors(3u32.into()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(chain.calls.get(), 1);

        cache.ancestors(2u32.into()).unwrap();
        assert_eq!(chain.calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn unknown_term_is_not_cached() {
        let chain = CountingChain::default();
        let cache = AncestorCache::new(&chain);
        assert!(matches!(
            cache.ancestors(4u32.into()),
            Err(HpoError::DoesNotExist(_))
        ));
        assert!(cache.is_empty());
    }

    /// `n` has the parents `n / 2` and `n / 3`, down to the root `1`
    fn lattice(size: u32) -> Ontology {
        let mut ont = Ontology::default();
        for id in 1..=size {
            ont.insert_term(format!("Term {id}"), id);
        }
        for id in 2..=size {
            ont.add_parent(id / 2, id).unwrap();
            if id >= 3 {
                ont.add_parent(id / 3, id).unwrap();
            }
        }
        ont
    }

    #[test]
    fn shared_between_threads() {
        let ont = lattice(200);
        let expected: Vec<HpoGroup> = (1..=200u32)
            .map(|id| ont.ancestors(id.into()).unwrap())
            .collect();

        let cache = AncestorCache::new(&ont);
        std::thread::scope(|scope| {
            for offset in 0..8u32 {
                let cache = &cache;
                let expected = &expected;
                scope.spawn(move || {
                    // every thread walks all terms, starting at a different one
                    for step in 0..200u32 {
                        let id = (step + offset * 25) % 200 + 1;
                        let ancestors = cache.ancestors(id.into()).unwrap();
                        assert_eq!(*ancestors, expected[(id - 1) as usize]);
                    }
                });
            }
        });

        assert_eq!(cache.len(), 200);
        for id in 1..=200u32 {
            assert_eq!(
                *cache.ancestors(id.into()).unwrap(),
                expected[(id - 1) as usize]
            );
        }
    }

    #[test]
    fn ancestors_with_self() {
        let chain = CountingChain::default();
        let cache = AncestorCache::new(&chain);
        let group = cache.ancestors_with_self(2u32.into()).unwrap();
        let ids: Vec<u32> = group.iter().map(|id| id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2]);

        // the cached entry stays strict
        assert_eq!(cache.ancestors(2u32.into()).unwrap().len(), 1);
    }
}
