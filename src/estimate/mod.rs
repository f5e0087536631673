//! Coefficient estimation: batch least squares and recursive least squares.
//!
//! Both estimators fit the linear model
//! `y = a0*x0 + a1*x1 + ... + a(K-1)*x(K-1)` to sampled data, where one
//! input component conventionally carries the constant bias term. The
//! coefficient count `K` is a const generic; everything is stack-allocated
//! and no-std compatible.
//!
//! # Batch least squares
//!
//! [`LeastSquares`] accumulates the normal equations `(XᵀX)·a = Xᵀy` from a
//! fixed sample set and solves them by inversion:
//!
//! ```
//! use sysid::estimate::LeastSquares;
//! use sysid::Vector;
//!
//! // y = 1 + 2x, sampled at x = 1 and x = 10
//! let inputs = [
//!     Vector::from_array([1.0_f64, 1.0]),
//!     Vector::from_array([1.0, 10.0]),
//! ];
//! let outputs = [3.0, 21.0];
//!
//! let coeffs = LeastSquares::new().fit(&inputs, &outputs).unwrap();
//! assert!((coeffs[0] - 1.0).abs() < 1e-9);
//! assert!((coeffs[1] - 2.0).abs() < 1e-9);
//! ```
//!
//! # Recursive least squares
//!
//! [`Rls`] refines its coefficient vector one `(input, output)` pair at a
//! time, maintaining a covariance matrix that shrinks as samples arrive:
//!
//! ```
//! use sysid::estimate::Rls;
//! use sysid::Vector;
//!
//! let mut rls = Rls::<f64, 2>::new(1000.0);
//! for _ in 0..50 {
//!     rls.update(&Vector::from_array([1.0, 1.0]), 3.0).unwrap();
//!     rls.update(&Vector::from_array([1.0, 10.0]), 21.0).unwrap();
//! }
//! let coeffs = rls.coefficients();
//! assert!((coeffs[0] - 1.0).abs() < 1e-2);
//! assert!((coeffs[1] - 2.0).abs() < 1e-2);
//! ```

mod lms;
mod rls;

pub use lms::LeastSquares;
pub use rls::Rls;

/// Errors from the coefficient estimators.
///
/// One result type covers both estimators, so callers handle batch and
/// recursive failures uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    /// The information matrix is singular: the sample set does not have
    /// full column rank.
    Singular,
    /// Fewer samples than coefficients were supplied; the normal equations
    /// cannot determine a unique solution.
    UnderDetermined,
    /// The recursive update's normalizing denominator vanished; the state
    /// was left unchanged.
    IllConditioned,
}

impl core::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EstimateError::Singular => {
                write!(f, "information matrix is singular (rank-deficient samples)")
            }
            EstimateError::UnderDetermined => {
                write!(f, "fewer samples than coefficients")
            }
            EstimateError::IllConditioned => {
                write!(f, "recursive update denominator vanished")
            }
        }
    }
}
