//! In-place Gauss-Jordan matrix inversion with partial pivoting.
//!
//! The free function [`gauss_jordan_in_place`] operates on
//! `&mut impl MatrixMut<T>`, so it accepts both the fixed-size [`Matrix`]
//! and [`MatrixViewMut`] over a caller-owned flat buffer. The convenience
//! methods `Matrix::inverse()` and `Matrix::solve()` decompose a copy and
//! never corrupt their receiver on failure.
//!
//! ```
//! use sysid::Matrix;
//!
//! let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
//! let a_inv = a.inverse().unwrap();
//! let id = a * a_inv;
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!(id[(0, 1)].abs() < 1e-12);
//! ```
//!
//! [`Matrix`]: crate::Matrix
//! [`MatrixViewMut`]: crate::MatrixViewMut

mod gauss_jordan;

pub use gauss_jordan::gauss_jordan_in_place;

/// Errors from linear algebra operations.
///
/// ```
/// use sysid::linalg::LinalgError;
/// use sysid::Matrix;
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular (zero pivot encountered).
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}
