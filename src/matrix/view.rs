use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef};

/// Shape validation error for buffer views.
///
/// Returned by [`MatrixView::new`] and [`MatrixViewMut::new`] when the
/// supplied buffer length does not equal `rows * cols`, and by
/// [`MatrixViewMut::copy_from`] on a source of different dimensions.
///
/// # Example
///
/// ```
/// use sysid::MatrixView;
///
/// let buf = [1.0_f64, 2.0, 3.0];
/// assert!(MatrixView::new(&buf, 2, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    /// Requested `(rows, cols)`.
    pub shape: (usize, usize),
    /// Buffer length actually supplied.
    pub len: usize,
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "buffer of length {} cannot hold a {}x{} matrix",
            self.len, self.shape.0, self.shape.1
        )
    }
}

/// Read-only view of a caller-owned flat buffer as a row-major matrix.
///
/// Dimensions are runtime values, validated once at construction; afterwards
/// every access is in bounds by the `len == rows * cols` invariant. No data
/// is copied and nothing is allocated, so views work over static arrays on
/// embedded targets.
///
/// # Examples
///
/// ```
/// use sysid::MatrixView;
///
/// let buf = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let v = MatrixView::new(&buf, 2, 3).unwrap();
/// assert_eq!(v[(0, 2)], 3.0);
/// assert_eq!(v[(1, 0)], 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T> MatrixView<'a, T> {
    /// Wrap `data` as an `nrows x ncols` row-major matrix.
    ///
    /// Fails with [`ShapeError`] unless `data.len() == nrows * ncols`.
    /// The product is computed with overflow checking, so a dimension pair
    /// that wraps can never validate against a short buffer.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(ShapeError {
                shape: (nrows, ncols),
                len: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// The underlying flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// View row `i` as a slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
}

impl<T> MatrixRef<T> for MatrixView<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

/// Mutable view of a caller-owned flat buffer as a row-major matrix.
///
/// The mutable counterpart of [`MatrixView`]. Because a `&mut` borrow is
/// exclusive, two views can never alias the same buffer, which makes
/// [`copy_from`](MatrixViewMut::copy_from) overlap-free by construction.
///
/// In-place algorithms run directly on the caller's storage:
///
/// ```
/// use sysid::linalg::gauss_jordan_in_place;
/// use sysid::MatrixViewMut;
///
/// let mut buf = [4.0_f64, 7.0, 2.0, 6.0];
/// let mut pivots = [0usize; 2];
/// let mut a = MatrixViewMut::new(&mut buf, 2, 2).unwrap();
/// gauss_jordan_in_place(&mut a, &mut pivots).unwrap();
/// assert!((buf[0] - 0.6).abs() < 1e-12); // first element of the inverse
/// ```
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Wrap `data` as a mutable `nrows x ncols` row-major matrix.
    ///
    /// Fails with [`ShapeError`] unless `data.len() == nrows * ncols`,
    /// with the product computed overflow-checked as in
    /// [`MatrixView::new`].
    pub fn new(data: &'a mut [T], nrows: usize, ncols: usize) -> Result<Self, ShapeError> {
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(ShapeError {
                shape: (nrows, ncols),
                len: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// The underlying flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// View row `i` as a mutable slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: self.data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    /// Copy every element from `src`, which must have the same dimensions.
    ///
    /// The borrows guarantee the two buffers cannot overlap.
    pub fn copy_from(&mut self, src: &impl MatrixRef<T>) -> Result<(), ShapeError> {
        if src.nrows() != self.nrows || src.ncols() != self.ncols {
            return Err(ShapeError {
                shape: (src.nrows(), src.ncols()),
                len: self.data.len(),
            });
        }
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                self.data[i * self.ncols + j] = *src.get(i, j);
            }
        }
        Ok(())
    }
}

impl<T> MatrixRef<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn view_valid_shape() {
        let buf = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = MatrixView::new(&buf, 2, 3).unwrap();
        assert_eq!(v.nrows(), 2);
        assert_eq!(v.ncols(), 3);
        assert_eq!(v[(0, 0)], 1.0);
        assert_eq!(v[(1, 2)], 6.0);
        assert_eq!(v.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn view_shape_mismatch() {
        let buf = [1.0, 2.0, 3.0];
        let err = MatrixView::new(&buf, 2, 2).unwrap_err();
        assert_eq!(err.shape, (2, 2));
        assert_eq!(err.len, 3);
    }

    #[test]
    fn view_mut_write_through() {
        let mut buf = [0.0; 4];
        let mut v = MatrixViewMut::new(&mut buf, 2, 2).unwrap();
        v[(0, 1)] = 5.0;
        v[(1, 0)] = 7.0;
        assert_eq!(buf, [0.0, 5.0, 7.0, 0.0]);
    }

    #[test]
    fn view_mut_shape_mismatch() {
        let mut buf = [0.0; 5];
        assert!(MatrixViewMut::new(&mut buf, 2, 2).is_err());
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        // (2^63 + 2) * 2 wraps to exactly 4 in release builds, which
        // would validate against a 4-element buffer if the product were
        // computed unchecked
        let wrapping_rows = usize::MAX / 2 + 3;
        let buf = [0.0_f64; 4];
        assert!(MatrixView::new(&buf, wrapping_rows, 2).is_err());
        assert!(MatrixView::new(&buf, 2, wrapping_rows).is_err());

        let mut mbuf = [0.0_f64; 4];
        assert!(MatrixViewMut::new(&mut mbuf, wrapping_rows, 2).is_err());
    }

    #[test]
    fn zero_dimension_requires_empty_buffer() {
        let empty: [f64; 0] = [];
        assert!(MatrixView::new(&empty, 0, 7).is_ok());

        let buf = [1.0_f64; 3];
        assert!(MatrixView::new(&buf, 0, 7).is_err());
    }

    #[test]
    fn copy_from_matrix() {
        let src = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let mut buf = [0.0; 4];
        let mut dst = MatrixViewMut::new(&mut buf, 2, 2).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(buf, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn copy_from_wrong_shape() {
        let src = Matrix::new([[1.0, 2.0, 3.0]]);
        let mut buf = [0.0; 4];
        let mut dst = MatrixViewMut::new(&mut buf, 2, 2).unwrap();
        assert!(dst.copy_from(&src).is_err());
    }

    #[test]
    fn as_view_reborrow() {
        let mut buf = [1.0, 2.0, 3.0, 4.0];
        let v = MatrixViewMut::new(&mut buf, 2, 2).unwrap();
        let r = v.as_view();
        assert_eq!(r[(1, 1)], 4.0);
    }
}
