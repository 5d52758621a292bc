//! Methods to calculate the Similarity between two terms or sets of terms
//!
//! The similarity of two single terms is calculated via the [`Similarity`]
//! trait, [`Mica`] being the implementation used for gene ranking.
//! [`GroupSimilarity`] combines the term - term scores of two sets of terms
//! into a single score, using a [`SimilarityCombiner`].

use crate::matrix::Matrix;
use crate::{HpoError, HpoGroup, HpoResult, HpoTermId};

mod mica;
pub use mica::Mica;

/// Trait for similarity score calculation between 2 HPO terms
pub trait Similarity {
    /// calculates the actual similarity between term a and term b
    ///
    /// # Errors
    ///
    /// Implementations return an error if a term is unknown
    fn calculate(&self, a: HpoTermId, b: HpoTermId) -> HpoResult<f64>;
}

/// This trait is needed for custom implementations
///
/// For similarity calculation between sets of terms
/// the similarity scores must be combined
pub trait SimilarityCombiner {
    /// This method implements the actual logic to calculate a single
    /// similarity score from a Matrix of term - term similarity scores.
    ///
    /// The matrix has one row per query term and one column per reference
    /// term and is never empty.
    fn combine(&self, m: &Matrix<f64>) -> f64;

    /// this method is called by [`GroupSimilarity`] to combine individual term - term
    /// similarity scores into a single score for the group - group similarity
    ///
    /// # Errors
    ///
    /// - [`HpoError::EmptyQuerySet`] if the matrix has no rows
    /// - [`HpoError::EmptyReferenceSet`] if the matrix has no columns
    fn calculate(&self, m: &Matrix<f64>) -> HpoResult<f64> {
        match m.dim() {
            (0, _) => Err(HpoError::EmptyQuerySet),
            (_, 0) => Err(HpoError::EmptyReferenceSet),
            _ => Ok(self.combine(m)),
        }
    }

    /// Returns the maximum values of each row
    fn row_maxes(&self, m: &Matrix<f64>) -> Vec<f64> {
        m.rows()
            .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }
}

/// Best-match-average in the direction of the query
///
/// Every query term is matched to its most similar reference term and
/// the scores of these best matches are averaged. Reference terms that
/// are not the best match of any query term do not influence the score,
/// so the result is not symmetric.
///
/// ```text
/// score(Q, R) = 1/|Q| * sum_{q in Q} max_{r in R} sim(q, r)
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BestMatchAverage;

impl SimilarityCombiner for BestMatchAverage {
    fn combine(&self, m: &Matrix<f64>) -> f64 {
        let (rows, _) = m.dim();
        self.row_maxes(m).iter().sum::<f64>() / usize_to_f64(rows)
    }
}

/// calculate the Similarity score between two sets of HPO terms
pub struct GroupSimilarity<T, C> {
    combiner: C,
    similarity: T,
}

impl<T: Similarity, C: SimilarityCombiner> GroupSimilarity<T, C> {
    /// Constructs a new struct to calculate set - set similarities
    ///
    /// # Examples
    ///
    /// ```
    /// use hpo_generank::similarity::{BestMatchAverage, GroupSimilarity, Mica};
    /// use hpo_generank::{AncestorCache, HpoGroup, HpoTermId, IcTable, Ontology};
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
    /// let sim = GroupSimilarity::new(BestMatchAverage, Mica::new(&cache, &ic));
    ///
    /// let query: HpoGroup = [HpoTermId::from(2u32), HpoTermId::from(3u32)]
    ///     .into_iter()
    ///     .collect();
    /// let reference: HpoGroup = [HpoTermId::from(2u32)].into_iter().collect();
    ///
    /// // (2.0 + 0.5) / 2
    /// assert_eq!(sim.calculate(&query, &reference).unwrap(), 1.25);
    /// ```
    pub fn new(combiner: C, similarity: T) -> Self {
        Self {
            combiner,
            similarity,
        }
    }

    /// calculates the similarity between two sets of terms
    ///
    /// # Errors
    ///
    /// - [`HpoError::EmptyQuerySet`] if `query` is empty
    /// - [`HpoError::EmptyReferenceSet`] if `reference` is empty
    /// - Any error of the term - term [`Similarity`]
    pub fn calculate(&self, query: &HpoGroup, reference: &HpoGroup) -> HpoResult<f64> {
        if query.is_empty() {
            return Err(HpoError::EmptyQuerySet);
        }
        if reference.is_empty() {
            return Err(HpoError::EmptyReferenceSet);
        }
        let mut v = Vec::with_capacity(query.len() * reference.len());
        for t1 in query {
            for t2 in reference {
                v.push(self.similarity.calculate(t1, t2)?);
            }
        }
        let m = Matrix::new(query.len(), reference.len(), &v);
        self.combiner.calculate(&m)
    }

    /// Returns the term - term similarity used by this group similarity
    pub fn similarity(&self) -> &T {
        &self.similarity
    }
}

/// This is a really weird way of converting a usize into a float but I
/// want to make sure the app crashes, so I don't want to use `as`.
fn usize_to_f64(n: usize) -> f64 {
    <usize as TryInto<u32>>::try_into(n)
        .expect("Matrix too large")
        .into()
}

#[cfg(test)]
mod test {
    use float_cmp::approx_eq;

    use super::*;

    /// Similarity is 1.0 for identical terms and 1 / (1 + distance) otherwise
    struct Distance;
    impl Similarity for Distance {
        fn calculate(&self, a: HpoTermId, b: HpoTermId) -> HpoResult<f64> {
            if a.as_u32() > 100 || b.as_u32() > 100 {
                return Err(HpoError::DoesNotExist(format!("{a} or {b}")));
            }
            Ok(1.0 / (1.0 + f64::from(a.as_u32().abs_diff(b.as_u32()))))
        }
    }

    fn group(ids: &[u32]) -> HpoGroup {
        ids.iter().map(|id| HpoTermId::from(*id)).collect()
    }

    #[test]
    fn best_match_average() {
        let sim = GroupSimilarity::new(BestMatchAverage, Distance);
        // 1 -> 1 (1.0), 4 -> 3 (0.5)
        let score = sim.calculate(&group(&[1, 4]), &group(&[1, 3, 9])).unwrap();
        assert!(approx_eq!(f64, score, 0.75));
    }

    #[test]
    fn asymmetric() {
        let sim = GroupSimilarity::new(BestMatchAverage, Distance);
        let forward = sim.calculate(&group(&[1]), &group(&[1, 9])).unwrap();
        let backward = sim.calculate(&group(&[1, 9]), &group(&[1])).unwrap();
        assert!(approx_eq!(f64, forward, 1.0));
        assert!(approx_eq!(f64, backward, (1.0 + 1.0 / 9.0) / 2.0));
    }

    #[test]
    fn empty_query() {
        let sim = GroupSimilarity::new(BestMatchAverage, Distance);
        assert!(matches!(
            sim.calculate(&HpoGroup::new(), &group(&[1])),
            Err(HpoError::EmptyQuerySet)
        ));
        assert!(matches!(
            sim.calculate(&HpoGroup::new(), &HpoGroup::new()),
            Err(HpoError::EmptyQuerySet)
        ));
    }

    #[test]
    fn empty_reference() {
        let sim = GroupSimilarity::new(BestMatchAverage, Distance);
        assert!(matches!(
            sim.calculate(&group(&[1]), &HpoGroup::new()),
            Err(HpoError::EmptyReferenceSet)
        ));
    }

    #[test]
    fn term_errors_propagate() {
        let sim = GroupSimilarity::new(BestMatchAverage, Distance);
        assert!(matches!(
            sim.calculate(&group(&[1]), &group(&[101])),
            Err(HpoError::DoesNotExist(_))
        ));
    }

    #[test]
    fn combiner_rejects_empty_matrix() {
        let data: Vec<f64> = vec![];
        assert!(matches!(
            BestMatchAverage.calculate(&Matrix::new(0, 3, &data)),
            Err(HpoError::EmptyQuerySet)
        ));
        assert!(matches!(
            BestMatchAverage.calculate(&Matrix::new(3, 0, &data)),
            Err(HpoError::EmptyReferenceSet)
        ));
    }

    #[test]
    fn row_maxes() {
        let data = vec![0.1, 0.7, 0.3, 0.0, 0.0, 0.0];
        let m = Matrix::new(2, 3, &data);
        assert_eq!(BestMatchAverage.row_maxes(&m), vec![0.7, 0.0]);
    }
}
