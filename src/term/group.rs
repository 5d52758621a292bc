use std::ops::BitAnd;

use smallvec::SmallVec;

use crate::HpoTermId;

/// Number of term ids an [`HpoGroup`] holds without allocating
const INLINE_TERMS: usize = 30;

/// A set of [`HpoTermId`]s representing a group of HPO terms
///
/// Each term can occur only once in the group and the ids are
/// kept in ascending order.
///
/// This group is used e.g. for the ancestors or descendants of a term,
/// for the terms of a gene or for the observed terms of a patient.
///
/// # Examples
///
/// ```
/// use hpo_generank::{HpoGroup, HpoTermId};
///
/// let mut group = HpoGroup::new();
/// assert!(group.insert(HpoTermId::from(12u32)));
/// assert!(group.insert(HpoTermId::from(3u32)));
/// assert!(!group.insert(HpoTermId::from(12u32)));
///
/// assert_eq!(group.len(), 2);
/// let ids: Vec<u32> = group.iter().map(|id| id.as_u32()).collect();
/// assert_eq!(ids, vec![3, 12]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HpoGroup {
    ids: SmallVec<[HpoTermId; INLINE_TERMS]>,
}

impl HpoGroup {
    /// Constructs a new, empty [`HpoGroup`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty [`HpoGroup`] with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns `true` if the group contains no [`HpoTermId`]s
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of [`HpoTermId`]s in the group
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Adds a new [`HpoTermId`] to the group
    ///
    /// Returns `false` if the group already contained the id
    pub fn insert(&mut self, id: HpoTermId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                self.ids.insert(idx, id);
                true
            }
        }
    }

    /// Returns `true` if the group contains the [`HpoTermId`]
    pub fn contains(&self, id: &HpoTermId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns an Iterator of the [`HpoTermId`]s inside the group
    pub fn iter(&self) -> HpoTermIds<'_> {
        HpoTermIds::new(self.ids.iter())
    }
}

impl FromIterator<HpoTermId> for HpoGroup {
    fn from_iter<T: IntoIterator<Item = HpoTermId>>(iter: T) -> Self {
        let mut group = HpoGroup::new();
        for id in iter {
            group.insert(id);
        }
        group
    }
}

impl<'a> IntoIterator for &'a HpoGroup {
    type Item = HpoTermId;

    type IntoIter = HpoTermIds<'a>;

    fn into_iter(self) -> HpoTermIds<'a> {
        HpoTermIds::new(self.ids.iter())
    }
}

/// An iterator over [`HpoTermId`]s
pub struct HpoTermIds<'a> {
    inner: std::slice::Iter<'a, HpoTermId>,
}

impl<'a> HpoTermIds<'a> {
    fn new(inner: std::slice::Iter<'a, HpoTermId>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for HpoTermIds<'a> {
    type Item = HpoTermId;
    fn next(&mut self) -> Option<HpoTermId> {
        self.inner.next().copied()
    }
}

impl BitAnd for &HpoGroup {
    type Output = HpoGroup;

    fn bitand(self, rhs: &HpoGroup) -> HpoGroup {
        let (large, small) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut group = HpoGroup::with_capacity(small.len());

        // iterating the sorted `small` side keeps the result sorted
        for id in &small.ids {
            if large.contains(id) {
                group.ids.push(*id);
            }
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[u32]) -> HpoGroup {
        ids.iter().map(|id| HpoTermId::from(*id)).collect()
    }

    fn ids(group: &HpoGroup) -> Vec<u32> {
        group.iter().map(|id| id.as_u32()).collect()
    }

    #[test]
    fn test_hpogroup_iter() {
        let group = group(&[3, 1, 2]);

        let mut ids = Vec::new();
        for id in &group {
            ids.push(id)
        }
        assert_eq!(ids.len(), 3);

        for id in &group {
            ids.push(id)
        }
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut group = HpoGroup::new();
        assert!(group.insert(5u32.into()));
        assert!(group.insert(1u32.into()));
        assert!(group.insert(3u32.into()));
        assert!(!group.insert(1u32.into()));
        assert_eq!(ids(&group), vec![1, 3, 5]);
        assert!(group.contains(&3u32.into()));
        assert!(!group.contains(&4u32.into()));
    }

    #[test]
    fn test_bitand() {
        let result = &group(&[1, 2, 3]) & &group(&[2, 4, 5, 1]);
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_bitand_disjoint() {
        let result = &group(&[1, 2, 3]) & &group(&[4, 5]);
        assert!(result.is_empty());
    }
}
