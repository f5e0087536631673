use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::EstimateError;

/// Recursive least-squares estimator.
///
/// Refines a coefficient vector one `(input, output)` pair at a time.
/// The covariance matrix `P` starts as `p0 * I` and shrinks as samples
/// arrive; the per-sample gain is `g = P·x / (1 + xᵀ·P·x)`, after which
///
/// ```text
/// P ← P − g·(xᵀP)
/// a ← a + g·(y − aᵀx)
/// ```
///
/// A large `p0` means little confidence in the (zero) initial coefficients
/// and fast early adaptation.
///
/// # Example
///
/// ```
/// use sysid::estimate::Rls;
/// use sysid::Vector;
///
/// // y = 1 + 2x, streamed one sample at a time
/// let mut rls = Rls::<f64, 2>::new(1000.0);
/// for _ in 0..50 {
///     rls.update(&Vector::from_array([1.0, 1.0]), 3.0).unwrap();
///     rls.update(&Vector::from_array([1.0, 10.0]), 21.0).unwrap();
/// }
/// assert!((rls.coefficients()[0] - 1.0).abs() < 1e-2);
/// assert!((rls.coefficients()[1] - 2.0).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rls<T: FloatScalar, const K: usize> {
    coeffs: Vector<T, K>,
    cov: Matrix<T, K, K>,
    gain: Vector<T, K>,
    error: T,
}

impl<T: FloatScalar, const K: usize> Rls<T, K> {
    /// Create an estimator with zero coefficients and covariance `p0 * I`.
    ///
    /// # Panics
    ///
    /// Panics unless `p0 > 0`.
    pub fn new(p0: T) -> Self {
        assert!(p0 > T::zero(), "initial covariance scale must be positive");
        Self::with_covariance(Matrix::eye() * p0)
    }

    /// Create an estimator with zero coefficients and an explicit initial
    /// covariance matrix.
    pub fn with_covariance(cov: Matrix<T, K, K>) -> Self {
        Self {
            coeffs: Vector::zeros(),
            cov,
            gain: Vector::zeros(),
            error: T::zero(),
        }
    }

    /// Incorporate one sample, returning the a-priori residual
    /// `y − aᵀx` computed with the coefficients from before the update.
    ///
    /// # Errors
    ///
    /// [`EstimateError::IllConditioned`] when the normalizing denominator
    /// `1 + xᵀ·P·x` vanishes; the estimator state is left untouched, so the
    /// caller may [`reseed_covariance`](Self::reseed_covariance) and
    /// continue.
    pub fn update(&mut self, input: &Vector<T, K>, output: T) -> Result<T, EstimateError> {
        let error = output - self.coeffs.dot(input);

        let pg = self.cov.vecmul(input);
        let denom = T::one() + input.dot(&pg);
        if denom.abs() < T::epsilon() {
            return Err(EstimateError::IllConditioned);
        }
        let gain = pg * (T::one() / denom);

        // xᵀP as a row vector; P is symmetric in exact arithmetic but the
        // product is formed explicitly so roundoff never feeds back skewed
        let xp: Vector<T, K> = *input * self.cov;

        self.cov -= gain.outer(&xp);
        self.coeffs += gain * error;
        self.gain = gain;
        self.error = error;

        Ok(error)
    }

    /// Restore the covariance to `p0 * I` without touching the
    /// coefficients, re-enabling adaptation after convergence or an
    /// ill-conditioned update.
    ///
    /// # Panics
    ///
    /// Panics unless `p0 > 0`.
    pub fn reseed_covariance(&mut self, p0: T) {
        assert!(p0 > T::zero(), "covariance scale must be positive");
        self.cov = Matrix::eye() * p0;
    }

    /// Current coefficient estimate.
    #[inline]
    pub fn coefficients(&self) -> &Vector<T, K> {
        &self.coeffs
    }

    /// Current covariance matrix.
    #[inline]
    pub fn covariance(&self) -> &Matrix<T, K, K> {
        &self.cov
    }

    /// Gain vector applied by the most recent update.
    #[inline]
    pub fn gain(&self) -> &Vector<T, K> {
        &self.gain
    }

    /// Residual from the most recent update.
    #[inline]
    pub fn last_error(&self) -> T {
        self.error
    }
}
