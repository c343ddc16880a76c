use rand::Rng;

use crate::topology::ValueRange;

/// A dense `rows × cols` matrix of `f32` values, stored row-major.
///
/// Matrices are the uniform representation for network weights, biases, and
/// layer activations. They are immutable by convention: every operation
/// returns a new matrix.
///
/// Operand dimensions are checked on every operation and mismatches panic.
///
/// # Example
///
/// ```
/// use fledge_neural::Matrix;
///
/// let weights = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
/// let input = Matrix::column(&[1.0, 1.0]);
/// let product = weights.dot(&input);
/// assert_eq!(product.as_slice(), &[3.0, 7.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Builds a matrix by applying a function to each `(row, col)` index.
    #[must_use]
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| 0.0)
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows have differing lengths.
    #[must_use]
    pub fn from_rows(rows: &[&[f32]]) -> Self {
        assert!(!rows.is_empty(), "matrix must have at least one row");
        let cols = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "all rows must have the same length"
        );
        Self::from_fn(rows.len(), cols, |r, c| rows[r][c])
    }

    /// Builds a single-column matrix from a slice.
    #[must_use]
    pub fn column(values: &[f32]) -> Self {
        Self::from_fn(values.len(), 1, |r, _| values[r])
    }

    /// Builds a matrix with every entry drawn uniformly from `range`.
    #[must_use]
    pub fn random<R>(rows: usize, cols: usize, range: ValueRange, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::from_fn(rows, cols, |_, _| range.sample(rng))
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Returns the underlying entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns `true` if `other` has the same dimensions.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Computes the matrix product `self · rhs`.
    ///
    /// # Panics
    ///
    /// Panics unless `self.cols() == rhs.rows()`.
    #[must_use]
    pub fn dot(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix product dimension mismatch: {}x{} · {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        Self::from_fn(self.rows, rhs.cols, |r, c| {
            (0..self.cols).map(|k| self.get(r, k) * rhs.get(k, c)).sum()
        })
    }

    /// Computes the elementwise sum `self + rhs`.
    ///
    /// # Panics
    ///
    /// Panics unless both operands have the same dimensions.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        assert!(
            self.same_shape(rhs),
            "elementwise sum dimension mismatch: {}x{} + {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );
        Self::from_fn(self.rows, self.cols, |r, c| self.get(r, c) + rhs.get(r, c))
    }

    /// Applies a pure function to every entry.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self::from_fn(self.rows, self.cols, |r, c| f(self.get(r, c)))
    }

    /// Computes the elementwise average of two matrices.
    ///
    /// This is the crossover operator on a single weight or bias matrix. It
    /// is commutative in its operands.
    ///
    /// # Panics
    ///
    /// Panics unless both operands have the same dimensions.
    #[must_use]
    pub fn average(a: &Self, b: &Self) -> Self {
        assert!(
            a.same_shape(b),
            "average dimension mismatch: {}x{} vs {}x{}",
            a.rows,
            a.cols,
            b.rows,
            b.cols
        );
        Self::from_fn(a.rows, a.cols, |r, c| (a.get(r, c) + b.get(r, c)) / 2.0)
    }

    /// Returns a copy where each entry is independently redrawn from `range`
    /// with probability `rate`, and left unchanged otherwise.
    ///
    /// With `rate == 0.0` the result is bit-identical to `self`; with
    /// `rate == 1.0` every entry is redrawn.
    ///
    /// # Panics
    ///
    /// Panics unless `rate` is within `[0, 1]`.
    #[must_use]
    pub fn mutated<R>(&self, rate: f32, range: ValueRange, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!((0.0..=1.0).contains(&rate), "mutation rate must be in [0, 1]");
        self.map(|v| {
            if rng.random_bool(f64::from(rate)) {
                range.sample(rng)
            } else {
                v
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    fn range(min: f32, max: f32) -> ValueRange {
        ValueRange::new(min, max)
    }

    #[test]
    fn test_from_fn_row_major_layout() {
        #[expect(clippy::cast_precision_loss)]
        let m = Matrix::from_fn(2, 3, |r, c| (r * 10 + c) as f32);
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(m.get(1, 2), 12.0);
    }

    #[test]
    fn test_dot_known_values() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = Matrix::column(&[1.0, 0.0, -1.0]);
        let product = a.dot(&b);
        assert_eq!(product.rows(), 2);
        assert_eq!(product.cols(), 1);
        assert_eq!(product.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    #[should_panic(expected = "matrix product dimension mismatch")]
    fn test_dot_rejects_incompatible_dimensions() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 1);
        let _ = a.dot(&b);
    }

    #[test]
    #[should_panic(expected = "elementwise sum dimension mismatch")]
    fn test_add_rejects_incompatible_dimensions() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(3, 2);
        let _ = a.add(&b);
    }

    #[test]
    fn test_average_is_commutative() {
        let a = Matrix::from_rows(&[&[0.0, 2.0], &[-4.0, 8.0]]);
        let b = Matrix::from_rows(&[&[1.0, 1.0], &[1.0, 1.0]]);
        let ab = Matrix::average(&a, &b);
        let ba = Matrix::average(&b, &a);
        assert_eq!(ab, ba);
        assert_eq!(ab.as_slice(), &[0.5, 1.5, -1.5, 4.5]);
    }

    #[test]
    fn test_mutated_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(4, 4, range(-1.0, 1.0), &mut rng);
        let mutated = m.mutated(0.0, range(-1.0, 1.0), &mut rng);
        assert_eq!(m, mutated);
    }

    #[test]
    fn test_mutated_rate_one_redraws_every_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        // Initialize and redraw from disjoint ranges so a redraw is
        // distinguishable from an unchanged entry.
        let m = Matrix::random(8, 8, range(-1.0, 1.0), &mut rng);
        let mutated = m.mutated(1.0, range(5.0, 6.0), &mut rng);
        assert!(mutated.as_slice().iter().all(|&v| (5.0..6.0).contains(&v)));
    }

    #[test]
    fn test_mutated_rate_is_approximately_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = Matrix::zeros(50, 50);
        let mutated = m.mutated(0.1, range(5.0, 6.0), &mut rng);
        let changed = mutated.as_slice().iter().filter(|&&v| v != 0.0).count();
        // Expected 250 of 2500; allow generous slack for sampling noise.
        assert!((150..=350).contains(&changed), "changed = {changed}");
    }

    #[test]
    #[should_panic(expected = "matrix dimensions must be non-zero")]
    fn test_zero_dimension_rejected() {
        let _ = Matrix::zeros(0, 3);
    }
}
