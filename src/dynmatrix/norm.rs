use crate::traits::FloatScalar;

use super::DynMatrix;

impl<T: FloatScalar> DynMatrix<T> {
    /// Frobenius norm (square root of the sum of squares).
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Largest absolute entry.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -5.0, 3.0, 4.0]);
    /// assert_eq!(m.max_abs(), 5.0);
    /// ```
    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius_of_zero() {
        let m = DynMatrix::zeros(3, 2, 0.0_f64);
        assert_eq!(m.frobenius_norm(), 0.0);
        assert_eq!(m.max_abs(), 0.0);
    }

    #[test]
    fn frobenius_3_4() {
        let m = DynMatrix::from_rows(1, 2, &[3.0_f64, -4.0]);
        assert_eq!(m.frobenius_norm(), 5.0);
    }
}
