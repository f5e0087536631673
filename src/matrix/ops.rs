use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// Elementwise operations run over the flat row-major buffer: one pass,
// no index arithmetic.

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a - b;
        }
    }
}

/// Scaling: `matrix * scalar`.
impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        for a in self.as_mut_slice().iter_mut() {
            *a = *a * rhs;
        }
        self
    }
}

/// Matrix product: `(M×N) * (N×P) → (M×P)`.
///
/// Loop order is i-k-j so the inner loop streams one output row and one
/// `rhs` row, both contiguous in row-major storage.
impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        for i in 0..M {
            for (k, &a_ik) in self.row_slice(i).iter().enumerate() {
                let out_row = out.row_slice_mut(i);
                for (o, &b_kj) in out_row.iter_mut().zip(rhs.row_slice(k)) {
                    *o = *o + a_ik * b_kj;
                }
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Matrix-vector product: `A * v → result`.
    ///
    /// Takes and returns row vectors for convenience, avoiding an
    /// explicit transpose. Each output element is the dot product of one
    /// contiguous matrix row with `v`.
    pub fn vecmul(&self, v: &Vector<T, N>) -> Vector<T, M> {
        let mut out = Vector::<T, M>::zeros();
        for i in 0..M {
            out[i] = self
                .row_slice(i)
                .iter()
                .zip(v.as_slice())
                .fold(T::zero(), |acc, (&a, &x)| acc + a * x);
        }
        out
    }

    /// Transpose: `(M×N) → (N×M)`. The output is a distinct value; the
    /// receiver is never modified (in-place transpose would clobber
    /// unvisited elements).
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for (i, row) in self.data.iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                out.data[j][i] = x;
            }
        }
        out
    }
}
