//! Singular value decomposition by Householder bidiagonalization followed
//! by implicit-shift QR (Golub–Kahan–Reinsch).
//!
//! The phases run in a fixed order over caller-owned storage:
//!
//! 1. Householder reduction of A to upper bidiagonal form (`w`, `rv1`)
//! 2. Accumulation of the right factor V from the row reflectors
//! 3. Accumulation of the left factor U, in place over A
//! 4. Implicit-shift QR sweeps on the bidiagonal form, rotating U and V
//!
//! Free functions ([`svd_in_place`], [`svd_in_place_with`],
//! [`singular_values_in_place`]) work on any [`MatrixMut`](crate::MatrixMut);
//! [`SvdDecomposition`] and `DynSvd` wrap them without touching the input.

pub(crate) mod svd;

#[cfg(feature = "alloc")]
pub use svd::svd_in_place;
pub use svd::{
    pythag, singular_values_in_place, sort_descending, svd_in_place_with, SvdDecomposition,
    SvdSettings, SvdStatus, DEFAULT_MAX_ITER,
};

/// Errors from linear algebra operations.
///
/// Returned by the strict decomposition constructors when the iterative
/// phase ran out of sweeps.
///
/// ```
/// use svdcomp::Matrix;
/// use svdcomp::linalg::{LinalgError, SvdDecomposition, SvdSettings};
///
/// let a = Matrix::new([[4.0_f64, 1.0], [1.0, 3.0]]);
/// let svd = SvdDecomposition::with_settings(&a, &SvdSettings { max_iter: 0 });
/// assert_eq!(svd.status().into_result(), Err(LinalgError::ConvergenceFailure));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Iterative algorithm did not converge within the iteration budget.
    ConvergenceFailure,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::ConvergenceFailure => write!(f, "iterative algorithm did not converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
