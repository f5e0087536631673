//! # sysid
//!
//! Estimation of linear-model coefficients from sampled input/output data,
//! no-std compatible and free of heap allocation. Built for embedded control
//! and system-identification tasks where sample buffers are static and every
//! operation must complete in bounded, deterministic time.
//!
//! ## Quick start
//!
//! ```
//! use sysid::estimate::LeastSquares;
//! use sysid::Vector;
//!
//! // Fit y = a0 + a1*x from two noise-free samples of y = 1 + 2x.
//! // The first input column carries the constant bias term.
//! let inputs = [
//!     Vector::from_array([1.0_f64, 1.0]),
//!     Vector::from_array([1.0, 10.0]),
//! ];
//! let outputs = [3.0, 21.0];
//!
//! let mut lsq = LeastSquares::new();
//! let coeffs = lsq.fit(&inputs, &outputs).unwrap();
//! assert!((coeffs[0] - 1.0).abs() < 1e-9);
//! assert!((coeffs[1] - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic dimensions.
//!   Stack-allocated `[[T; N]; M]` row-major storage. Arithmetic, transpose,
//!   norms, and dot/outer products. [`Vector<T, N>`] and
//!   [`ColumnVector<T, N>`] are aliases for 1-row and 1-column matrices.
//!   [`MatrixView`] / [`MatrixViewMut`] borrow caller-owned flat buffers with
//!   runtime dimensions, validated at construction.
//!
//! - [`linalg`] — In-place Gauss-Jordan matrix inversion with partial
//!   pivoting. The free function operates on `&mut impl MatrixMut<T>`, so it
//!   runs on fixed matrices and on views over static buffers alike. The
//!   `Matrix::inverse()` convenience method works on a copy and never
//!   corrupts its receiver on failure.
//!
//! - [`estimate`] — The two coefficient estimators: [`estimate::LeastSquares`]
//!   solves the normal equations from a fixed sample set by symmetric
//!   information-matrix accumulation; [`estimate::Rls`] refines a coefficient
//!   vector and covariance matrix one sample at a time.
//!
//! - [`control`] — Discrete-time velocity-form PID controller. Independent of
//!   the estimation core; shares only the scalar type machinery.
//!
//! - [`nn`] — Minimal feed-forward neuron and layer with pluggable activation
//!   functions and perceptron-rule training. Also independent of the core.
//!
//! - [`traits`] — Element and access traits:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by
//!     inversion, norms, and the estimators
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for
//!     algorithms that accept both `Matrix` and buffer views
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via the system math library |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod control;
pub mod estimate;
pub mod linalg;
pub mod matrix;
pub mod nn;
pub mod traits;

pub use matrix::vector::{ColumnVector, Vector};
pub use matrix::view::{MatrixView, MatrixViewMut, ShapeError};
pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
