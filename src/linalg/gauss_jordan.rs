use crate::linalg::LinalgError;
use crate::matrix::vector::{ColumnVector, Vector};
use crate::traits::{FloatScalar, MatrixMut};
use crate::Matrix;

/// Invert a square matrix in place by Gauss-Jordan elimination with
/// partial pivoting.
///
/// `pivots` records the row swap performed at each elimination step and
/// must have length `n`; it is caller-supplied so the function allocates
/// nothing.
///
/// For each column `k`, the row with the largest-magnitude entry in rows
/// `k..n` is swapped into the pivot position, the pivot row is normalized,
/// and column `k` is eliminated from every other row. After the last
/// column, the recorded row swaps are undone as column swaps in reverse
/// order, leaving the inverse in `a`.
///
/// # Errors
///
/// Returns `LinalgError::Singular` when the best available pivot is
/// (numerically) zero. **Failure is destructive**: `a` then holds a
/// partially transformed matrix and must not be used as an inverse.
/// Callers that need the operand preserved should invert a copy —
/// [`Matrix::inverse`] does exactly that.
///
/// # Panics
///
/// Panics if `a` is not square or `pivots.len()` differs from the matrix
/// dimension.
pub fn gauss_jordan_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    pivots: &mut [usize],
) -> Result<(), LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "inversion requires a square matrix");
    assert_eq!(n, pivots.len(), "pivot slice length must match matrix size");

    for k in 0..n {
        // Partial pivoting: largest-magnitude entry in column k, rows k..n
        let mut pivrow = k;
        let mut max_val = a.get(k, k).abs();
        for i in (k + 1)..n {
            let val = a.get(i, k).abs();
            if val > max_val {
                max_val = val;
                pivrow = i;
            }
        }

        if max_val < T::epsilon() {
            return Err(LinalgError::Singular);
        }

        // Swap pivot row into position (recorded even when no swap happened,
        // so the unwind loop below stays branch-free on the bookkeeping)
        if pivrow != k {
            for j in 0..n {
                let tmp = *a.get(k, j);
                *a.get_mut(k, j) = *a.get(pivrow, j);
                *a.get_mut(pivrow, j) = tmp;
            }
        }
        pivots[k] = pivrow;

        // Normalize the pivot row; the pivot slot itself becomes the
        // corresponding element of the inverse
        let inv_pivot = T::one() / *a.get(k, k);
        *a.get_mut(k, k) = T::one();
        for j in 0..n {
            *a.get_mut(k, j) = *a.get(k, j) * inv_pivot;
        }

        // Eliminate column k from every other row
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = *a.get(i, k);
            *a.get_mut(i, k) = T::zero();
            for j in 0..n {
                let pivot_row_val = *a.get(k, j);
                *a.get_mut(i, j) = *a.get(i, j) - pivot_row_val * factor;
            }
        }
    }

    // Undo the row swaps as column swaps, in reverse pivot order
    for k in (0..n).rev() {
        if pivots[k] != k {
            for i in 0..n {
                let tmp = *a.get(i, k);
                *a.get_mut(i, k) = *a.get(i, pivots[k]);
                *a.get_mut(i, pivots[k]) = tmp;
            }
        }
    }

    Ok(())
}

/// Convenience methods on square matrices.
impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Compute the matrix inverse via Gauss-Jordan elimination.
    ///
    /// Works on a copy, so the receiver is left intact even when the
    /// matrix turns out to be singular.
    ///
    /// ```
    /// use sysid::Matrix;
    /// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let a_inv = a.inverse().unwrap();
    /// let id = a * a_inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(1, 0)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let mut inv = *self;
        let mut pivots = [0usize; N];
        gauss_jordan_in_place(&mut inv, &mut pivots)?;
        Ok(inv)
    }

    /// Solve `Ax = b` for `x` via inversion.
    ///
    /// ```
    /// use sysid::{ColumnVector, Matrix};
    /// let a = Matrix::new([[3.0_f64, 2.0], [1.0, 4.0]]);
    /// let b = ColumnVector::from_column([7.0, 9.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &ColumnVector<T, N>) -> Result<ColumnVector<T, N>, LinalgError> {
        Ok(self.inverse()? * *b)
    }

    /// Solve `Ax = b` with `b` and `x` as row vectors.
    pub fn solve_vec(&self, b: &Vector<T, N>) -> Result<Vector<T, N>, LinalgError> {
        Ok(self.inverse()?.vecmul(b))
    }
}
