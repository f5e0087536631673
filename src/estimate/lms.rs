use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::EstimateError;

/// Batch least-squares estimator via symmetric information accumulation.
///
/// Builds the normal equations `(XᵀX)·a = Xᵀy` from sample rows without
/// ever materializing the full `numSamples × K` design matrix: the
/// information matrix `Σ x_k·x_j` and correlation vector `Σ y_i·x_j` are
/// accumulated directly, then solved by inversion and multiplication.
///
/// Each off-diagonal information entry is computed once and mirrored, so
/// the matrix is symmetric by construction.
///
/// # Example
///
/// ```
/// use sysid::estimate::LeastSquares;
/// use sysid::Vector;
///
/// // y = 5 + x + x², with input rows {1, x, x²}
/// let inputs = [
///     Vector::from_array([1.0_f64, 0.0, 0.0]),
///     Vector::from_array([1.0, 1.0, 1.0]),
///     Vector::from_array([1.0, 2.0, 4.0]),
/// ];
/// let outputs = [5.0, 7.0, 11.0];
///
/// let coeffs = LeastSquares::new().fit(&inputs, &outputs).unwrap();
/// assert!((coeffs[0] - 5.0).abs() < 1e-8);
/// assert!((coeffs[1] - 1.0).abs() < 1e-8);
/// assert!((coeffs[2] - 1.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LeastSquares<T: FloatScalar, const K: usize> {
    /// Information matrix: Σ x_k·x_j over all accumulated samples.
    info: Matrix<T, K, K>,
    /// Correlation vector: Σ y_i·x_j over all accumulated samples.
    corr: Vector<T, K>,
    /// Number of samples accumulated so far.
    samples: usize,
}

impl<T: FloatScalar, const K: usize> Default for LeastSquares<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatScalar, const K: usize> LeastSquares<T, K> {
    /// Create an estimator with no accumulated samples.
    pub fn new() -> Self {
        Self {
            info: Matrix::zeros(),
            corr: Vector::zeros(),
            samples: 0,
        }
    }

    /// Accumulate a batch of sample rows and their measured outputs.
    ///
    /// For every coefficient pair `(k, j)` with `j ≤ k`, the product sum
    /// over all samples is added to information entry `(k, j)` and mirrored
    /// into `(j, k)`; the correlation sums are folded into the final `k`
    /// pass so each input element is visited a minimal number of times.
    ///
    /// May be called repeatedly to extend the sample set.
    ///
    /// # Panics
    ///
    /// Panics if `inputs.len() != outputs.len()`.
    pub fn accumulate(&mut self, inputs: &[Vector<T, K>], outputs: &[T]) {
        assert_eq!(
            inputs.len(),
            outputs.len(),
            "every sample row needs exactly one output"
        );

        for k in 0..K {
            for j in 0..=k {
                let mut sum = T::zero();
                for (i, x) in inputs.iter().enumerate() {
                    sum = sum + x[k] * x[j];

                    // Correlation sums, folded into the last pivot pass
                    if k == K - 1 {
                        self.corr[j] = self.corr[j] + outputs[i] * x[j];
                    }
                }
                self.info[(k, j)] = self.info[(k, j)] + sum;
                if j != k {
                    self.info[(j, k)] = self.info[(k, j)];
                }
            }
        }

        self.samples += inputs.len();
    }

    /// Solve the accumulated normal equations for the coefficient vector.
    ///
    /// The information matrix is inverted on a copy, so the accumulated
    /// state survives a failure and more samples can be added afterwards.
    ///
    /// # Errors
    ///
    /// - [`EstimateError::UnderDetermined`] when fewer samples than
    ///   coefficients have been accumulated.
    /// - [`EstimateError::Singular`] when the sample set is rank-deficient.
    pub fn solve(&self) -> Result<Vector<T, K>, EstimateError> {
        if self.samples < K {
            return Err(EstimateError::UnderDetermined);
        }
        let inv = self
            .info
            .inverse()
            .map_err(|_| EstimateError::Singular)?;
        Ok(inv.vecmul(&self.corr))
    }

    /// One-shot convenience: discard prior state, accumulate, solve.
    pub fn fit(
        &mut self,
        inputs: &[Vector<T, K>],
        outputs: &[T],
    ) -> Result<Vector<T, K>, EstimateError> {
        self.reset();
        self.accumulate(inputs, outputs);
        self.solve()
    }

    /// Reference to the accumulated information matrix.
    #[inline]
    pub fn information_matrix(&self) -> &Matrix<T, K, K> {
        &self.info
    }

    /// Reference to the accumulated correlation vector.
    #[inline]
    pub fn correlation_vector(&self) -> &Vector<T, K> {
        &self.corr
    }

    /// Number of samples accumulated so far.
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.samples
    }

    /// Discard all accumulated data.
    pub fn reset(&mut self) {
        self.info = Matrix::zeros();
        self.corr = Vector::zeros();
        self.samples = 0;
    }
}
