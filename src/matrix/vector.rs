use core::ops::{Index, IndexMut};

use crate::traits::Scalar;
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// In row-major storage a row vector *is* its flat buffer, so every
/// vector operation below runs over one contiguous slice. Vectors support
/// single-index access (`v[i]`), dot products, norms, outer products, and
/// concatenation. Use [`ColumnVector`] for column vectors.
///
/// # Examples
///
/// ```
/// use sysid::Vector;
///
/// let v = Vector::from_array([1.0_f64, 2.0, 2.0]);
/// assert_eq!(v[2], 2.0);
/// assert_eq!(v.dot(&v), 9.0);
/// assert!((v.norm() - 3.0).abs() < 1e-12);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    ///
    /// ```
    /// use sysid::Vector;
    /// let v = Vector::from_array([5.0, 6.0]);
    /// assert_eq!(v[1], 6.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True when the vector has zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use sysid::Vector;
    /// let a = Vector::from_array([2.0, -1.0, 0.5]);
    /// let b = Vector::from_array([3.0, 3.0, 4.0]);
    /// assert_eq!(a.dot(&b), 5.0); // 6 - 3 + 2
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.as_slice()
            .iter()
            .zip(rhs.as_slice())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Outer product: `v.outer(w) → N×P` matrix with `result[i][j] = v[i]·w[j]`.
    ///
    /// Row `i` of the result is `w` scaled by `v[i]`, written as one
    /// contiguous slice pass per row.
    ///
    /// ```
    /// use sysid::Vector;
    /// let g = Vector::from_array([2.0, -1.0]);
    /// let x = Vector::from_array([1.0, 3.0]);
    /// let m = g.outer(&x);
    /// assert_eq!(m[(0, 1)], 6.0);
    /// assert_eq!(m[(1, 0)], -1.0);
    /// ```
    pub fn outer<const P: usize>(&self, rhs: &Vector<T, P>) -> Matrix<T, N, P> {
        let mut out = Matrix::<T, N, P>::zeros();
        for (row, &a) in out.data.iter_mut().zip(self.as_slice()) {
            for (o, &b) in row.iter_mut().zip(rhs.as_slice()) {
                *o = a * b;
            }
        }
        out
    }

    /// Append `rhs`, producing one vector holding the elements of `self`
    /// followed by the elements of `rhs`.
    ///
    /// The output length is a const parameter supplied by the caller and
    /// checked against `N + P` at run time.
    ///
    /// # Panics
    ///
    /// Panics unless `R == N + P`.
    ///
    /// ```
    /// use sysid::Vector;
    /// let a = Vector::from_array([1.0, 2.0]);
    /// let b = Vector::from_array([3.0]);
    /// let c: Vector<f64, 3> = a.concat(&b);
    /// assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn concat<const P: usize, const R: usize>(&self, rhs: &Vector<T, P>) -> Vector<T, R> {
        assert_eq!(R, N + P, "concatenation of {} and {} elements", N, P);
        let mut out = Vector::<T, R>::zeros();
        out.as_mut_slice()[..N].copy_from_slice(self.as_slice());
        out.as_mut_slice()[N..].copy_from_slice(rhs.as_slice());
        out
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[0][i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[0][i]
    }
}

// ── Column vector ───────────────────────────────────────────────────

/// A column vector (N×1 matrix).
///
/// Enables natural `Matrix * ColumnVector` multiplication:
/// `(M×N) * (N×1) → (M×1)`.
///
/// Convert between row and column vectors with `.transpose()`.
/// Single-element access uses `cv[(i, 0)]`.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;

impl<T: Scalar, const N: usize> ColumnVector<T, N> {
    /// Create a column vector from a 1D array.
    ///
    /// ```
    /// use sysid::ColumnVector;
    /// let cv = ColumnVector::from_column([7.0, 8.0]);
    /// assert_eq!(cv[(1, 0)], 8.0);
    /// ```
    #[inline]
    pub fn from_column(data: [T; N]) -> Self {
        Self::new(data.map(|x| [x]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_reads_and_writes() {
        let mut v = Vector::from_array([10.0, 20.0, 30.0]);
        assert_eq!(v[0], 10.0);
        v[2] = 33.0;
        assert_eq!(v.as_slice(), &[10.0, 20.0, 33.0]);
    }

    #[test]
    fn dot_product() {
        let a = Vector::from_array([0.5, 2.0, -1.0]);
        let b = Vector::from_array([4.0, 1.0, 3.0]);
        assert_eq!(a.dot(&b), 1.0); // 2 + 2 - 3
    }

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        let a = Vector::from_array([1.0, 0.0, 2.0]);
        let b = Vector::from_array([0.0, 5.0, 0.0]);
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn outer_product_shape_and_values() {
        let a = Vector::from_array([2.0, -1.0, 0.5]);
        let b = Vector::from_array([4.0, 10.0]);
        let m = a.outer(&b);

        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        // Each row is b scaled by the corresponding element of a
        assert_eq!(m.row_slice(0), &[8.0, 20.0]);
        assert_eq!(m.row_slice(1), &[-4.0, -10.0]);
        assert_eq!(m.row_slice(2), &[2.0, 5.0]);
    }

    #[test]
    fn outer_with_self_is_symmetric() {
        let g = Vector::from_array([0.3, -1.2, 2.0]);
        assert!(g.outer(&g).is_symmetric());
    }

    #[test]
    fn concat_appends() {
        let head = Vector::from_array([1.0, 2.0, 3.0]);
        let tail = Vector::from_array([4.0, 5.0]);
        let joined: Vector<f64, 5> = head.concat(&tail);
        assert_eq!(joined.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn concat_with_empty() {
        let v = Vector::from_array([1.0, 2.0]);
        let empty = Vector::<f64, 0>::from_array([]);
        let same: Vector<f64, 2> = v.concat(&empty);
        assert_eq!(same, v);
    }

    #[test]
    #[should_panic]
    fn concat_wrong_output_length_panics() {
        let a = Vector::from_array([1.0, 2.0]);
        let b = Vector::from_array([3.0]);
        let _: Vector<f64, 4> = a.concat(&b);
    }

    #[test]
    fn column_vector_in_matrix_product() {
        // (2×2) * (2×1) → (2×1)
        let m = Matrix::new([[0.0, 1.0], [2.0, 3.0]]);
        let cv = ColumnVector::from_column([5.0, 7.0]);

        let r = m * cv;
        assert_eq!(r[(0, 0)], 7.0); // 0*5 + 1*7
        assert_eq!(r[(1, 0)], 31.0); // 2*5 + 3*7
    }

    #[test]
    fn transpose_converts_row_and_column() {
        let row = Vector::from_array([-1.0, 0.0, 1.0]);
        let col: ColumnVector<f64, 3> = row.transpose();
        assert_eq!(col[(0, 0)], -1.0);
        assert_eq!(col[(2, 0)], 1.0);
        assert_eq!(col.transpose(), row);
    }

    #[test]
    fn vector_arithmetic_is_elementwise() {
        let a = Vector::from_array([1.0, -2.0]);
        let b = Vector::from_array([0.5, 0.5]);
        assert_eq!((a + b).as_slice(), &[1.5, -1.5]);
        assert_eq!((a * 10.0).as_slice(), &[10.0, -20.0]);
    }
}
