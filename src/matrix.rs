//! The term - term score matrix handed to a
//! [`SimilarityCombiner`](`crate::similarity::SimilarityCombiner`)
//!
//! Every row holds the scores of one query term against all reference terms:
//!
//! ```text
//!          ref 1   ref 2   ref 3
//! query 1   0.1     0.7     0.3
//! query 2   0.0     2.1     0.0
//! ```
use std::fmt::Debug;
use std::slice::Chunks;

/// A row-major matrix, borrowed from a slice
///
/// `data` must contain at least `rows * cols` values, additional
/// values are ignored.
pub struct Matrix<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

impl<'a, T> Matrix<'a, T> {
    /// Creates a new Matrix with `rows` rows and `cols` columns
    ///
    /// # Panics
    ///
    /// If `data` holds fewer than `rows * cols` values
    ///
    /// # Examples
    /// ```rust
    /// use hpo_generank::matrix::Matrix;
    /// let data = vec![11, 12, 13, 21, 22, 23];
    /// let m = Matrix::new(2, 3, &data);
    /// assert_eq!(m.dim(), (2, 3));
    /// ```
    pub fn new(rows: usize, cols: usize, data: &'a [T]) -> Self {
        assert!(data.len() >= rows * cols, "Matrix data is too short");
        Self {
            rows,
            cols,
            data: &data[..rows * cols],
        }
    }

    /// Returns the number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the matrix has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a Tuple with number of rows and number of columns
    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Iterates the rows of the matrix
    ///
    /// A matrix without columns has no rows to iterate.
    ///
    /// # Examples
    /// ```rust
    /// use hpo_generank::matrix::Matrix;
    /// let data = vec![11, 12, 13, 21, 22, 23];
    /// let m = Matrix::new(2, 3, &data);
    ///
    /// let mut rows = m.rows();
    /// assert_eq!(rows.next(), Some(&[11, 12, 13][..]));
    /// assert_eq!(rows.next(), Some(&[21, 22, 23][..]));
    /// assert!(rows.next().is_none());
    /// ```
    pub fn rows(&self) -> Chunks<'a, T> {
        self.data.chunks(self.cols.max(1))
    }
}

impl<T: std::fmt::Display> Debug for Matrix<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let v: Vec<String> = row.iter().map(|v| format!("{v}")).collect();
            writeln!(f, "[{}]", v.join(", "))?;
        }
        Ok(())
    }
}
