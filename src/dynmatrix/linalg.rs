use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::svd::{
    condition_of, norm2_of, rank_of, singular_values_in_place, sort_descending,
    svd_in_place_with,
};
use crate::linalg::{LinalgError, SvdSettings, SvdStatus};
use crate::traits::FloatScalar;

use super::DynMatrix;

// ── DynSvd ─────────────────────────────────────────────────────────

/// Singular value decomposition of a dynamically-sized matrix.
///
/// Computes U (M×N), singular values σ (length N) and the right factor
/// V (N×N) such that `A = U · diag(σ) · V^T`. Singular values are
/// non-negative but come out in the order the QR sweeps settle them;
/// call [`sort_descending`](Self::sort_descending) for the conventional
/// ordering.
///
/// Wide matrices (M < N) are accepted. The factorization still holds and
/// at least N − M of the singular values are zero; only the columns of U
/// paired with nonzero singular values are orthonormal.
///
/// # Example
///
/// ```
/// use svdcomp::DynMatrix;
///
/// let a = DynMatrix::from_rows(3, 2, &[
///     1.0_f64, 0.0,
///     0.0, 1.0,
///     0.0, 0.0,
/// ]);
/// let svd = a.svd().unwrap();
/// assert_eq!(svd.u().nrows(), 3);  // M
/// assert_eq!(svd.u().ncols(), 2);  // N
/// assert_eq!(svd.v().nrows(), 2);  // N
/// assert!((svd.singular_values()[0] - 1.0).abs() < 1e-10);
/// assert!((svd.singular_values()[1] - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DynSvd<T: FloatScalar> {
    u: DynMatrix<T>,
    singular_values: Vec<T>,
    v: DynMatrix<T>,
    status: SvdStatus,
}

impl<T: FloatScalar> DynSvd<T> {
    /// Compute the SVD of a matrix.
    ///
    /// Returns `Err(ConvergenceFailure)` if any singular value needed more
    /// than the default iteration cap.
    pub fn new(a: &DynMatrix<T>) -> Result<Self, LinalgError> {
        let svd = Self::with_settings(a, &SvdSettings::default());
        svd.status.into_result()?;
        Ok(svd)
    }

    /// Compute the SVD with explicit settings.
    ///
    /// Always returns the factors. A run that hit the iteration cap is
    /// reported through [`status`](Self::status); its singular values may
    /// then reconstruct A only approximately.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// use svdcomp::linalg::SvdSettings;
    ///
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 1.0, 3.0]);
    /// let svd = a.svd_with(&SvdSettings { max_iter: 0 });
    /// assert!(!svd.status().is_converged());
    /// assert!(svd.singular_values().iter().all(|&s| s >= 0.0));
    /// ```
    pub fn with_settings(a: &DynMatrix<T>, settings: &SvdSettings) -> Self {
        let n = a.ncols();
        let mut u = a.clone();
        let mut singular_values = vec![T::zero(); n];
        let mut v = DynMatrix::zeros(n, n, T::zero());
        let mut rv1 = vec![T::zero(); n];
        let status = svd_in_place_with(&mut u, &mut singular_values, &mut v, &mut rv1, settings);
        Self {
            u,
            singular_values,
            v,
            status,
        }
    }

    /// Singular values only (no U/V computation), unsorted.
    pub fn singular_values_only(a: &DynMatrix<T>) -> Result<Vec<T>, LinalgError> {
        let n = a.ncols();
        let mut work = a.clone();
        let mut w = vec![T::zero(); n];
        let mut rv1 = vec![T::zero(); n];
        singular_values_in_place(&mut work, &mut w, &mut rv1, &SvdSettings::default())
            .into_result()?;
        Ok(w)
    }

    /// The singular values.
    #[inline]
    pub fn singular_values(&self) -> &[T] {
        &self.singular_values
    }

    /// Left factor U (M×N).
    #[inline]
    pub fn u(&self) -> &DynMatrix<T> {
        &self.u
    }

    /// Right factor V (N×N); column j pairs with `singular_values()[j]`.
    #[inline]
    pub fn v(&self) -> &DynMatrix<T> {
        &self.v
    }

    /// V^T (N×N).
    pub fn vt(&self) -> DynMatrix<T> {
        self.v.transpose()
    }

    #[inline]
    pub fn status(&self) -> SvdStatus {
        self.status
    }

    /// Reorder to descending singular values, permuting U and V with them.
    pub fn sort_descending(&mut self) {
        sort_descending(&mut self.singular_values, &mut self.u, &mut self.v);
    }

    /// Numerical rank: number of singular values above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        rank_of(&self.singular_values, tol)
    }

    /// Spectral norm: the largest singular value.
    pub fn norm2(&self) -> T {
        norm2_of(&self.singular_values)
    }

    /// 2-norm condition number: σ_max / σ_min.
    ///
    /// Returns infinity if the smallest singular value is zero.
    pub fn condition_number(&self) -> T {
        condition_of(&self.singular_values)
    }

    /// Rebuild `U · diag(σ) · V^T`.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let back = a.svd().unwrap().reconstruct();
    /// assert!((&back - &a).frobenius_norm() < 1e-12);
    /// ```
    pub fn reconstruct(&self) -> DynMatrix<T> {
        let m = self.u.nrows();
        let n = self.v.nrows();
        DynMatrix::from_fn(m, n, |i, j| {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + self.u[(i, k)] * self.singular_values[k] * self.v[(j, k)];
            }
            sum
        })
    }
}

/// Convenience methods for SVD on dynamic matrices.
impl<T: FloatScalar> DynMatrix<T> {
    /// Singular value decomposition with default settings.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let a = DynMatrix::from_rows(3, 2, &[
    ///     1.0_f64, 0.0,
    ///     0.0, 1.0,
    ///     0.0, 0.0,
    /// ]);
    /// let svd = a.svd().unwrap();
    /// assert!((svd.singular_values()[0] - 1.0).abs() < 1e-10);
    /// ```
    pub fn svd(&self) -> Result<DynSvd<T>, LinalgError> {
        DynSvd::new(self)
    }

    /// Singular value decomposition with explicit settings. See
    /// [`DynSvd::with_settings`].
    pub fn svd_with(&self, settings: &SvdSettings) -> DynSvd<T> {
        DynSvd::with_settings(self, settings)
    }

    /// Singular values only (no U/V computation), unsorted.
    ///
    /// ```
    /// use svdcomp::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]);
    /// let sv = a.singular_values_only().unwrap();
    /// assert!((sv[0] - 3.0).abs() < 1e-10);
    /// assert!((sv[1] - 4.0).abs() < 1e-10);
    /// ```
    pub fn singular_values_only(&self) -> Result<Vec<T>, LinalgError> {
        DynSvd::singular_values_only(self)
    }
}
