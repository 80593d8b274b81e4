use alloc::vec::Vec;

use super::DynMatrix;

impl<T> DynMatrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// View row `i` as a slice.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
    /// assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// View row `i` as a mutable slice.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.ncols;
        let end = start + self.ncols;
        &mut self.data[start..end]
    }

    /// Copy column `j` out (columns are strided in row-major storage).
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.col_to_vec(1), vec![2.0, 5.0]);
    /// ```
    pub fn col_to_vec(&self, j: usize) -> Vec<T>
    where
        T: Copy,
    {
        assert!(j < self.ncols, "column {} out of range for {} columns", j, self.ncols);
        (0..self.nrows).map(|i| self.data[i * self.ncols + j]).collect()
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}
