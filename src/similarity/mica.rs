use crate::ontology::{AncestorCache, OntologyGraph};
use crate::similarity::Similarity;
use crate::{HpoResult, HpoTermId, IcTable};

/// Similarity based on the most informative common ancestor (MICA)
///
/// The similarity of two terms is the information content of the
/// common ancestor with the highest information content. Both terms
/// count as their own ancestors.
///
/// - Terms without any common ancestor have a similarity of `0.0`
/// - A MICA without information content has a similarity of `0.0`
/// - If several common ancestors share the highest information content,
///   the one with the lowest [`HpoTermId`] is the MICA. The score is the
///   same for all of them.
///
/// # Examples
///
/// ```
/// use hpo_generank::similarity::{Mica, Similarity};
/// use hpo_generank::{AncestorCache, HpoTermId, IcTable, Ontology};
///
/// let mut ontology = Ontology::default();
/// ontology.insert_term("All".to_string(), 1u32);
/// ontology.insert_term("A".to_string(), 2u32);
/// ontology.insert_term("B".to_string(), 3u32);
/// ontology.add_parent(1u32, 2u32).unwrap();
/// ontology.add_parent(1u32, 3u32).unwrap();
///
/// let mut ic = IcTable::default();
/// ic.insert(HpoTermId::from(1u32), 0.5).unwrap();
/// ic.insert(HpoTermId::from(2u32), 2.0).unwrap();
/// ic.insert(HpoTermId::from(3u32), 1.0).unwrap();
///
/// let cache = AncestorCache::new(&ontology);
/// let mica = Mica::new(&cache, &ic);
///
/// let a = HpoTermId::from(2u32);
/// let b = HpoTermId::from(3u32);
/// assert_eq!(mica.calculate(a, a).unwrap(), 2.0);
/// assert_eq!(mica.calculate(a, b).unwrap(), 0.5);
/// ```
pub struct Mica<'a, O: ?Sized> {
    ancestors: &'a AncestorCache<'a, O>,
    ic: &'a IcTable,
}

impl<'a, O: OntologyGraph + ?Sized> Mica<'a, O> {
    /// Constructs a new struct to calculate MICA based similarity scores
    pub fn new(ancestors: &'a AncestorCache<'a, O>, ic: &'a IcTable) -> Self {
        Self { ancestors, ic }
    }

    /// Returns the most informative common ancestor of `a` and `b`
    ///
    /// Returns `None` if the two terms have no common ancestor.
    ///
    /// # Errors
    ///
    /// [`crate::HpoError::DoesNotExist`] if one of the terms is not part of the ontology
    pub fn mica(&self, a: HpoTermId, b: HpoTermId) -> HpoResult<Option<HpoTermId>> {
        let ancestors_a = self.ancestors.ancestors_with_self(a)?;
        let ancestors_b = self.ancestors.ancestors_with_self(b)?;
        let common = &ancestors_a & &ancestors_b;

        let mut best: Option<(HpoTermId, f64)> = None;
        for term in &common {
            let ic = self.ic.get(&term);
            match best {
                Some((_, max)) if ic <= max => {}
                _ => best = Some((term, ic)),
            }
        }
        Ok(best.map(|(term, _)| term))
    }
}

impl<O: OntologyGraph + ?Sized> Similarity for Mica<'_, O> {
    fn calculate(&self, a: HpoTermId, b: HpoTermId) -> HpoResult<f64> {
        Ok(self
            .mica(a, b)?
            .map_or(0.0, |term| self.ic.get(&term)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{HpoError, HpoGroup, Ontology};

    /// ```text
    ///        1 (0.5)
    ///       / \
    ///  (1.0) 2   3 (1.2)
    ///       \ / \
    ///  (2.0) 4   5 (no IC)
    /// ```
    /// plus the unconnected term 6 (3.0) and its child 7 (4.0)
    fn setup() -> (Ontology, IcTable) {
        let mut ont = Ontology::default();
        for id in 1u32..=7 {
            ont.insert_term(format!("Term {id}"), id);
        }
        ont.add_parent(1u32, 2u32).unwrap();
        ont.add_parent(1u32, 3u32).unwrap();
        ont.add_parent(2u32, 4u32).unwrap();
        ont.add_parent(3u32, 4u32).unwrap();
        ont.add_parent(3u32, 5u32).unwrap();
        ont.add_parent(6u32, 7u32).unwrap();

        let mut ic = IcTable::new();
        for (id, value) in [(1u32, 0.5), (2, 1.0), (3, 1.2), (4, 2.0), (6, 3.0), (7, 4.0)] {
            ic.insert(id.into(), value).unwrap();
        }
        (ont, ic)
    }

    #[test]
    fn self_similarity_is_ic() {
        let (ont, ic) = setup();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        for id in [1u32, 2, 3, 4, 6, 7] {
            let term = HpoTermId::from(id);
            assert_eq!(mica.calculate(term, term).unwrap(), ic.get(&term));
        }
    }

    #[test]
    fn symmetric() {
        let (ont, ic) = setup();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        for a in 1u32..=7 {
            for b in 1u32..=7 {
                let ab = mica.calculate(a.into(), b.into()).unwrap();
                let ba = mica.calculate(b.into(), a.into()).unwrap();
                assert_eq!(ab, ba);
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn most_informative_common_ancestor() {
        let (ont, ic) = setup();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);

        // 4 and 5 share 3 and 1, 3 is more informative
        assert_eq!(mica.mica(4u32.into(), 5u32.into()).unwrap(), Some(3u32.into()));
        assert_eq!(mica.calculate(4u32.into(), 5u32.into()).unwrap(), 1.2);

        // 2 and 3 only share the root
        assert_eq!(mica.calculate(2u32.into(), 3u32.into()).unwrap(), 0.5);

        // an ancestor is its own MICA with a descendant
        assert_eq!(mica.mica(4u32.into(), 2u32.into()).unwrap(), Some(2u32.into()));
    }

    #[test]
    fn no_common_ancestor() {
        let (ont, ic) = setup();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        assert_eq!(mica.mica(4u32.into(), 7u32.into()).unwrap(), None);
        assert_eq!(mica.calculate(4u32.into(), 7u32.into()).unwrap(), 0.0);
    }

    #[test]
    fn mica_without_ic() {
        let (ont, ic) = setup();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        assert_eq!(mica.calculate(5u32.into(), 5u32.into()).unwrap(), 1.2);

        let empty = IcTable::new();
        let mica = Mica::new(&cache, &empty);
        assert_eq!(mica.calculate(5u32.into(), 5u32.into()).unwrap(), 0.0);
    }

    #[test]
    fn ties_pick_lowest_id() {
        let (ont, _) = setup();
        let mut ic = IcTable::new();
        ic.insert(2u32.into(), 1.0).unwrap();
        ic.insert(3u32.into(), 1.0).unwrap();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        assert_eq!(mica.mica(4u32.into(), 4u32.into()).unwrap(), Some(2u32.into()));
        assert_eq!(mica.calculate(4u32.into(), 4u32.into()).unwrap(), 1.0);
    }

    #[test]
    fn single_term_without_ancestors() {
        let mut ont = Ontology::default();
        ont.insert_term("single".to_string(), 1u32);
        let mut ic = IcTable::new();
        ic.insert(1u32.into(), 3.3219).unwrap();

        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        assert_eq!(mica.calculate(1u32.into(), 1u32.into()).unwrap(), 3.3219);
    }

    #[test]
    fn unknown_term() {
        let (ont, ic) = setup();
        let cache = AncestorCache::new(&ont);
        let mica = Mica::new(&cache, &ic);
        assert!(matches!(
            mica.calculate(1u32.into(), 99u32.into()),
            Err(HpoError::DoesNotExist(_))
        ));
    }

    #[test]
    fn works_with_any_graph() {
        /// Two roots, 10 and 20, every other term is a child of both
        struct TwoRoots;
        impl OntologyGraph for TwoRoots {
            fn ancestors(&self, term: HpoTermId) -> HpoResult<HpoGroup> {
                match term.as_u32() {
                    10 | 20 => Ok(HpoGroup::new()),
                    _ => Ok([10u32, 20].into_iter().map(HpoTermId::from).collect()),
                }
            }
            fn descendants(&self, _: HpoTermId) -> HpoResult<HpoGroup> {
                Ok(HpoGroup::new())
            }
        }

        let mut ic = IcTable::new();
        ic.insert(10u32.into(), 0.7).unwrap();
        ic.insert(20u32.into(), 0.9).unwrap();
        let graph = TwoRoots;
        let cache = AncestorCache::new(&graph);
        let mica = Mica::new(&cache, &ic);
        assert_eq!(mica.mica(1u32.into(), 2u32.into()).unwrap(), Some(20u32.into()));
        assert_eq!(mica.calculate(1u32.into(), 2u32.into()).unwrap(), 0.9);
    }
}
