use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};

// Vectors are contiguous in row-major storage, so every norm is a single
// fold over the flat slice.

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared L2 norm. No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// L1 norm (sum of absolute values).
    pub fn norm_l1(&self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &x| acc + x.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_norm_pythagorean() {
        // 2-3-6 triple
        let v = Vector::from_array([2.0_f64, 3.0, 6.0]);
        assert_eq!(v.norm_squared(), 49.0);
        assert!((v.norm() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn l2_squared_over_integers() {
        let v = Vector::from_array([1, -2, 2]);
        assert_eq!(v.norm_squared(), 9);
    }

    #[test]
    fn l1_counts_magnitudes() {
        let v = Vector::from_array([-2.5_f64, 0.0, 1.5, -1.0]);
        assert!((v.norm_l1() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_norms() {
        let z = Vector::<f64, 4>::zeros();
        assert_eq!(z.norm_squared(), 0.0);
        assert_eq!(z.norm(), 0.0);
        assert_eq!(z.norm_l1(), 0.0);
    }

    #[test]
    fn scaling_scales_the_norm_linearly() {
        let v = Vector::from_array([2.0_f64, 3.0, 6.0]);
        assert!(((v * 3.0).norm() - 21.0).abs() < 1e-12);
        assert!(((v * -1.0).norm() - 7.0).abs() < 1e-12);
    }
}
