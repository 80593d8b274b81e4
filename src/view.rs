//! Borrowed row-major matrix views over caller-owned storage.

use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef};

/// Mutable row-major view of an `nrows × ncols` block inside a flat slice.
///
/// Consecutive rows start `row_stride` elements apart, so the view can
/// cover the leading columns of a buffer allocated wider than the matrix
/// it currently holds. This lets the in-place SVD routines write U and V
/// straight into caller storage.
///
/// ```
/// use svdcomp::MatrixViewMut;
///
/// // A 2×2 matrix living in the first two columns of a 2×3 buffer.
/// let mut buf = [1.0_f64, 2.0, -1.0, 3.0, 4.0, -1.0];
/// let view = MatrixViewMut::with_stride(&mut buf, 2, 2, 3);
/// assert_eq!(view[(1, 0)], 3.0);
/// assert_eq!(view[(1, 1)], 4.0);
/// ```
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    row_stride: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// View a densely packed row-major slice.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn new(data: &'a mut [T], nrows: usize, ncols: usize) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self {
            data,
            nrows,
            ncols,
            row_stride: ncols,
        }
    }

    /// View a row-major slice whose rows are `row_stride` elements apart.
    ///
    /// Panics if `row_stride < ncols` or the slice is too short to hold
    /// the last row.
    pub fn with_stride(data: &'a mut [T], nrows: usize, ncols: usize, row_stride: usize) -> Self {
        assert!(
            row_stride >= ncols,
            "row stride {} is smaller than column count {}",
            row_stride,
            ncols
        );
        let needed = if nrows == 0 {
            0
        } else {
            (nrows - 1) * row_stride + ncols
        };
        assert!(
            data.len() >= needed,
            "slice length {} too short for {}x{} view with stride {}",
            data.len(),
            nrows,
            ncols,
            row_stride
        );
        Self {
            data,
            nrows,
            ncols,
            row_stride,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Distance between the starts of consecutive rows.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.nrows && col < self.ncols);
        row * self.row_stride + col
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
        &self.data[self.offset(row, col)]
    }
}

impl<T> MatrixMut<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}
