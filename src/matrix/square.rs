use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        self.data
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, row)| acc + row[i])
    }

    /// Check whether the matrix equals its transpose.
    ///
    /// Walks the part of each row above the diagonal and compares it with
    /// the mirrored column entries.
    pub fn is_symmetric(&self) -> bool {
        for (i, row) in self.data.iter().enumerate() {
            for (j, &x) in row.iter().enumerate().skip(i + 1) {
                if x != self.data[j][i] {
                    return false;
                }
            }
        }
        true
    }
}
