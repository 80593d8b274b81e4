use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// Default cap on implicit QR sweeps spent on each singular value.
pub const DEFAULT_MAX_ITER: usize = 30;

/// Settings for the singular value decomposition.
#[derive(Debug, Clone, Copy)]
pub struct SvdSettings {
    /// Maximum number of implicit-shift QR sweeps per singular value.
    ///
    /// Exhausting the cap never aborts the decomposition: the routine moves
    /// on to the next singular value and reports the shortfall through
    /// [`SvdStatus::IterationLimit`].
    pub max_iter: usize,
}

impl Default for SvdSettings {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Outcome of the iterative diagonalization phase.
///
/// Every in-place routine leaves `w`, `U` and `V` fully populated and
/// `w` nonnegative, whichever variant is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvdStatus {
    /// Every singular value converged within the iteration cap.
    Converged,
    /// `unconverged` singular values still carried a non-negligible
    /// superdiagonal residual when the cap ran out. The factors are exact
    /// orthogonal transforms but `w` may be inaccurate.
    IterationLimit { unconverged: usize },
}

impl SvdStatus {
    /// Whether every singular value converged.
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, SvdStatus::Converged)
    }

    /// Map to `Err(ConvergenceFailure)` unless converged.
    ///
    /// ```
    /// use svdcomp::linalg::{LinalgError, SvdStatus};
    ///
    /// assert_eq!(SvdStatus::Converged.into_result(), Ok(()));
    /// assert_eq!(
    ///     SvdStatus::IterationLimit { unconverged: 2 }.into_result(),
    ///     Err(LinalgError::ConvergenceFailure)
    /// );
    /// ```
    pub fn into_result(self) -> Result<(), LinalgError> {
        match self {
            SvdStatus::Converged => Ok(()),
            SvdStatus::IterationLimit { .. } => Err(LinalgError::ConvergenceFailure),
        }
    }
}

// ── Scalar helpers ──────────────────────────────────────────────────

/// Overflow-safe `sqrt(a² + b²)`.
///
/// Factors out the larger magnitude so neither square can overflow or
/// underflow on its own.
///
/// ```
/// use svdcomp::linalg::pythag;
///
/// assert_eq!(pythag(3.0_f64, 4.0), 5.0);
/// assert_eq!(pythag(0.0_f64, 0.0), 0.0);
/// assert!(pythag(1e300_f64, 1e300).is_finite());
/// ```
pub fn pythag<T: FloatScalar>(a: T, b: T) -> T {
    let at = a.abs();
    let bt = b.abs();
    if at > bt {
        let ct = bt / at;
        at * (T::one() + ct * ct).sqrt()
    } else if bt > T::zero() {
        let ct = at / bt;
        bt * (T::one() + ct * ct).sqrt()
    } else {
        T::zero()
    }
}

/// `|a|` carrying the sign of `b` (zero counts as positive).
#[inline]
fn sign<T: FloatScalar>(a: T, b: T) -> T {
    if b >= T::zero() {
        a.abs()
    } else {
        -a.abs()
    }
}

/// `true` when `|x|` vanishes against `anorm` at working precision.
///
/// Deliberately an IEEE rounding test rather than a comparison with a fixed
/// epsilon: the threshold scales with the magnitude of the bidiagonal form.
#[inline]
pub(crate) fn negligible<T: FloatScalar>(x: T, anorm: T) -> bool {
    x.abs() + anorm == anorm
}

/// Apply the plane rotation `(c, s)` to columns `p` and `q` of `m`.
///
/// `m[:, p] ← c·m[:, p] + s·m[:, q]`, `m[:, q] ← c·m[:, q] − s·m[:, p]`.
#[inline]
fn rotate_columns<T: FloatScalar>(m: &mut impl MatrixMut<T>, p: usize, q: usize, c: T, s: T) {
    for row in 0..m.nrows() {
        let y = *m.get(row, p);
        let z = *m.get(row, q);
        *m.get_mut(row, p) = y * c + z * s;
        *m.get_mut(row, q) = z * c - y * s;
    }
}

#[inline]
fn negate_column<T: FloatScalar>(m: &mut impl MatrixMut<T>, col: usize) {
    for row in 0..m.nrows() {
        let val = *m.get(row, col);
        *m.get_mut(row, col) = -val;
    }
}

// ── Householder bidiagonalization ───────────────────────────────────

/// Reduce the M×N matrix `a` to upper bidiagonal form with alternating
/// column and row Householder reflections.
///
/// On return:
/// - `w[0..n]` holds the bidiagonal diagonal
/// - `rv1[1..n]` holds the superdiagonal (`rv1[i]` couples columns `i-1`, `i`);
///   `rv1[0]` is zero
/// - the Householder vectors stay in `a`: column `i` below the diagonal for
///   the left reflections, row `i` right of the diagonal for the right ones
///
/// Returns `anorm = max(|w[i]| + |rv1[i]|)`, the scale the convergence
/// tests measure negligibility against.
pub(crate) fn bidiagonalize<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    w: &mut [T],
    rv1: &mut [T],
) -> T {
    let m = a.nrows();
    let n = a.ncols();
    debug_assert!(w.len() >= n && rv1.len() >= n);

    let zero = T::zero();
    let mut g = zero;
    let mut scale = zero;
    let mut anorm = zero;

    for i in 0..n {
        let l = i + 1;
        rv1[i] = scale * g;
        g = zero;
        scale = zero;

        // ── Left reflection: zero a[i+1..m, i] ──
        if i < m {
            for k in i..m {
                scale = scale + (*a.get(k, i)).abs();
            }
            if scale != zero {
                let mut s = zero;
                for k in i..m {
                    let val = *a.get(k, i) / scale;
                    *a.get_mut(k, i) = val;
                    s = s + val * val;
                }
                let f = *a.get(i, i);
                g = -sign(s.sqrt(), f);
                let h = f * g - s;
                *a.get_mut(i, i) = f - g;

                for j in l..n {
                    let mut s = zero;
                    for k in i..m {
                        s = s + *a.get(k, i) * *a.get(k, j);
                    }
                    let f = s / h;
                    for k in i..m {
                        let aki = *a.get(k, i);
                        *a.get_mut(k, j) = *a.get(k, j) + f * aki;
                    }
                }
                for k in i..m {
                    *a.get_mut(k, i) = *a.get(k, i) * scale;
                }
            }
        }
        w[i] = scale * g;

        // ── Right reflection: zero a[i, i+2..n] ──
        g = zero;
        scale = zero;
        if i < m && l < n {
            for k in l..n {
                scale = scale + (*a.get(i, k)).abs();
            }
            if scale != zero {
                let mut s = zero;
                for k in l..n {
                    let val = *a.get(i, k) / scale;
                    *a.get_mut(i, k) = val;
                    s = s + val * val;
                }
                let f = *a.get(i, l);
                g = -sign(s.sqrt(), f);
                let h = f * g - s;
                *a.get_mut(i, l) = f - g;

                // rv1[l..n] doubles as the scaled reflector until the next
                // columns overwrite it with their superdiagonal entries.
                for k in l..n {
                    rv1[k] = *a.get(i, k) / h;
                }
                for j in l..m {
                    let mut s = zero;
                    for k in l..n {
                        s = s + *a.get(j, k) * *a.get(i, k);
                    }
                    for k in l..n {
                        *a.get_mut(j, k) = *a.get(j, k) + s * rv1[k];
                    }
                }
                for k in l..n {
                    *a.get_mut(i, k) = *a.get(i, k) * scale;
                }
            }
        }

        anorm = anorm.max(w[i].abs() + rv1[i].abs());
    }

    anorm
}

// ── Accumulation of the transforms ──────────────────────────────────

/// Build the N×N right factor `v` from the row reflectors left in `a`.
///
/// Must run before [`accumulate_left`] overwrites the rows of `a`.
pub(crate) fn accumulate_right<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    rv1: &[T],
    v: &mut impl MatrixMut<T>,
) {
    let n = a.ncols();
    let zero = T::zero();

    for i in (0..n).rev() {
        let l = i + 1;
        if l < n {
            let g = rv1[l];
            if g != zero {
                // Two divisions rather than one by a[i][l]*g, which can underflow.
                let ail = *a.get(i, l);
                for j in l..n {
                    *v.get_mut(j, i) = (*a.get(i, j) / ail) / g;
                }
                for j in l..n {
                    let mut s = zero;
                    for k in l..n {
                        s = s + *a.get(i, k) * *v.get(k, j);
                    }
                    for k in l..n {
                        let vki = *v.get(k, i);
                        *v.get_mut(k, j) = *v.get(k, j) + s * vki;
                    }
                }
            }
            for j in l..n {
                *v.get_mut(i, j) = zero;
                *v.get_mut(j, i) = zero;
            }
        }
        *v.get_mut(i, i) = T::one();
    }
}

/// Overwrite `a` with the left factor U, built from the column reflectors.
///
/// Only the first `min(M, N)` columns are formed; when M < N the trailing
/// columns end up zero.
pub(crate) fn accumulate_left<T: FloatScalar>(a: &mut impl MatrixMut<T>, w: &[T]) {
    let m = a.nrows();
    let n = a.ncols();
    let zero = T::zero();

    for i in (0..m.min(n)).rev() {
        let l = i + 1;
        for j in l..n {
            *a.get_mut(i, j) = zero;
        }
        if w[i] != zero {
            let g = T::one() / w[i];
            for j in l..n {
                let mut s = zero;
                for k in l..m {
                    s = s + *a.get(k, i) * *a.get(k, j);
                }
                let f = (s / *a.get(i, i)) * g;
                for k in i..m {
                    let aki = *a.get(k, i);
                    *a.get_mut(k, j) = *a.get(k, j) + f * aki;
                }
            }
            for j in i..m {
                *a.get_mut(j, i) = *a.get(j, i) * g;
            }
        } else {
            for j in i..m {
                *a.get_mut(j, i) = zero;
            }
        }
        *a.get_mut(i, i) = *a.get(i, i) + T::one();
    }
}

// ── Implicit-shift QR on the bidiagonal form ────────────────────────

/// Drive the bidiagonal form (`w`, `rv1`) to diagonal.
///
/// Singular values are finalized from the bottom up. Each one gets at most
/// `max_iter` sweeps; rotations are mirrored into the columns of `u`
/// (when `compute_u`) and `v` (when `compute_v`). On return `w` is
/// nonnegative, unsorted.
#[allow(clippy::too_many_arguments)]
pub(crate) fn diagonalize<T: FloatScalar>(
    w: &mut [T],
    rv1: &mut [T],
    anorm: T,
    u: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    compute_u: bool,
    compute_v: bool,
    max_iter: usize,
) -> SvdStatus {
    let n = w.len();
    debug_assert_eq!(rv1.len(), n);

    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let mut unconverged = 0usize;

    for k in (0..n).rev() {
        let mut converged = false;
        let mut its = 0usize;

        while its < max_iter {
            its += 1;

            // Look for a split. rv1[0] is always zero, so l = 0 ends the scan.
            let mut l = k;
            let mut cancel = true;
            loop {
                if l == 0 || negligible(rv1[l], anorm) {
                    cancel = false;
                    break;
                }
                if negligible(w[l - 1], anorm) {
                    break;
                }
                l -= 1;
            }

            // w[l-1] is negligible: chase rv1[l..=k] out with left rotations.
            if cancel {
                let nm = l - 1;
                let mut c = zero;
                let mut s = one;
                for i in l..=k {
                    let f = s * rv1[i];
                    rv1[i] = c * rv1[i];
                    if negligible(f, anorm) {
                        break;
                    }
                    let g = w[i];
                    let h = pythag(f, g);
                    w[i] = h;
                    let h = one / h;
                    c = g * h;
                    s = -f * h;
                    if compute_u {
                        rotate_columns(u, nm, i, c, s);
                    }
                }
            }

            let z = w[k];
            if l == k {
                if z < zero {
                    w[k] = -z;
                    if compute_v {
                        negate_column(v, k);
                    }
                }
                converged = true;
                break;
            }

            // Shift from the trailing 2×2 minor.
            let nm = k - 1;
            let mut x = w[l];
            let y = w[nm];
            let g = rv1[nm];
            let h = rv1[k];
            let mut f = ((y - z) * (y + z) + (g - h) * (g + h)) / (two * h * y);
            let g = pythag(f, one);
            f = ((x - z) * (x + z) + h * ((y / (f + sign(g, f))) - h)) / x;

            // Chase the bulge from l down to k.
            let mut c = one;
            let mut s = one;
            for j in l..=nm {
                let i = j + 1;
                let mut g = rv1[i];
                let mut y = w[i];
                let mut h = s * g;
                g = c * g;
                let mut z = pythag(f, h);
                rv1[j] = z;
                c = f / z;
                s = h / z;
                f = x * c + g * s;
                g = g * c - x * s;
                h = y * s;
                y = y * c;
                if compute_v {
                    rotate_columns(v, j, i, c, s);
                }
                z = pythag(f, h);
                w[j] = z;
                if z != zero {
                    z = one / z;
                    c = f * z;
                    s = h * z;
                }
                f = c * g + s * y;
                x = c * y - s * g;
                if compute_u {
                    rotate_columns(u, j, i, c, s);
                }
            }
            rv1[l] = zero;
            rv1[k] = f;
            w[k] = x;
        }

        if converged {
            #[cfg(feature = "log")]
            log::trace!(target: "svdcomp", "singular value {} converged after {} sweeps", k, its);
            continue;
        }

        // The cap ran out; the last sweep may still have split the minor off.
        if !(k == 0 || negligible(rv1[k], anorm)) {
            unconverged += 1;
            #[cfg(feature = "log")]
            log::warn!(
                target: "svdcomp",
                "singular value {} did not converge in {} sweeps (residual {:?})",
                k,
                max_iter,
                rv1[k]
            );
        }
        if w[k] < zero {
            w[k] = -w[k];
            if compute_v {
                negate_column(v, k);
            }
        }
    }

    if unconverged == 0 {
        SvdStatus::Converged
    } else {
        SvdStatus::IterationLimit { unconverged }
    }
}

// ── In-place entry points ───────────────────────────────────────────

/// In-place SVD with caller-supplied scratch, no allocation.
///
/// On return `a` (M×N) holds U, `w[0..N]` the singular values and `v`
/// (N×N) the right factor V (not its transpose), with
/// `A = U · diag(w) · V^T`. Only the first `min(M, N)` columns of U are
/// meaningful. Singular values come out unsorted; see [`sort_descending`].
///
/// `rv1` must hold at least N elements; its contents are ignored.
///
/// # Panics
///
/// If `w` or `rv1` is shorter than N, or `v` is not N×N.
///
/// ```
/// use svdcomp::Matrix;
/// use svdcomp::linalg::{svd_in_place_with, SvdSettings};
///
/// let mut a = Matrix::new([[3.0_f64, 0.0], [0.0, -2.0]]);
/// let mut w = [0.0; 2];
/// let mut v: Matrix<f64, 2, 2> = Matrix::zeros();
/// let mut scratch = [0.0; 2];
/// let status = svd_in_place_with(&mut a, &mut w, &mut v, &mut scratch, &SvdSettings::default());
/// assert!(status.is_converged());
/// assert!((w[0] - 3.0).abs() < 1e-12);
/// assert!((w[1] - 2.0).abs() < 1e-12);
/// ```
pub fn svd_in_place_with<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    w: &mut [T],
    v: &mut impl MatrixMut<T>,
    rv1: &mut [T],
    settings: &SvdSettings,
) -> SvdStatus {
    let n = a.ncols();
    assert!(w.len() >= n, "singular value buffer has {} slots, need {}", w.len(), n);
    assert!(rv1.len() >= n, "scratch buffer has {} slots, need {}", rv1.len(), n);
    assert!(
        v.nrows() == n && v.ncols() == n,
        "V must be {}x{}, got {}x{}",
        n,
        n,
        v.nrows(),
        v.ncols()
    );

    let w = &mut w[..n];
    let rv1 = &mut rv1[..n];
    rv1.fill(T::zero());

    let anorm = bidiagonalize(a, w, rv1);
    accumulate_right(&*a, rv1, v);
    accumulate_left(a, w);
    diagonalize(w, rv1, anorm, a, v, true, true, settings.max_iter)
}

/// In-place SVD with default settings, allocating its own scratch.
///
/// See [`svd_in_place_with`] for the output contract.
///
/// ```
/// use svdcomp::DynMatrix;
/// use svdcomp::linalg::svd_in_place;
///
/// let mut a = DynMatrix::from_rows(3, 2, &[1.0_f64, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// let mut w = vec![0.0; 2];
/// let mut v = DynMatrix::zeros(2, 2, 0.0);
/// assert!(svd_in_place(&mut a, &mut w, &mut v).is_converged());
/// assert!((w[0] - 1.0).abs() < 1e-12 && (w[1] - 1.0).abs() < 1e-12);
/// ```
#[cfg(feature = "alloc")]
pub fn svd_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    w: &mut [T],
    v: &mut impl MatrixMut<T>,
) -> SvdStatus {
    let mut rv1 = alloc::vec![T::zero(); a.ncols()];
    svd_in_place_with(a, w, v, &mut rv1, &SvdSettings::default())
}

/// Singular values only: skips forming U and V.
///
/// `a` is left holding the Householder vectors, not U.
///
/// # Panics
///
/// If `w` or `rv1` is shorter than N.
pub fn singular_values_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    w: &mut [T],
    rv1: &mut [T],
    settings: &SvdSettings,
) -> SvdStatus {
    let n = a.ncols();
    assert!(w.len() >= n, "singular value buffer has {} slots, need {}", w.len(), n);
    assert!(rv1.len() >= n, "scratch buffer has {} slots, need {}", rv1.len(), n);

    let w = &mut w[..n];
    let rv1 = &mut rv1[..n];
    rv1.fill(T::zero());

    let anorm = bidiagonalize(a, w, rv1);
    let mut no_v: Matrix<T, 0, 0> = Matrix::zeros();
    diagonalize(w, rv1, anorm, a, &mut no_v, false, false, settings.max_iter)
}

/// Sort singular values descending, permuting the columns of `u` and `v`
/// to match so that `U · diag(w) · V^T` is unchanged.
pub fn sort_descending<T: FloatScalar>(
    w: &mut [T],
    u: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
) {
    let n = w.len();
    for i in 0..n {
        let mut max_idx = i;
        for j in (i + 1)..n {
            if w[j] > w[max_idx] {
                max_idx = j;
            }
        }
        if max_idx != i {
            w.swap(i, max_idx);
            for row in 0..u.nrows() {
                let tmp = *u.get(row, i);
                *u.get_mut(row, i) = *u.get(row, max_idx);
                *u.get_mut(row, max_idx) = tmp;
            }
            for row in 0..v.nrows() {
                let tmp = *v.get(row, i);
                *v.get_mut(row, i) = *v.get(row, max_idx);
                *v.get_mut(row, max_idx) = tmp;
            }
        }
    }
}

// ── Derived quantities ──────────────────────────────────────────────

pub(crate) fn rank_of<T: FloatScalar>(w: &[T], tol: T) -> usize {
    w.iter().filter(|&&s| s > tol).count()
}

pub(crate) fn norm2_of<T: FloatScalar>(w: &[T]) -> T {
    w.iter().fold(T::zero(), |acc, &s| acc.max(s))
}

pub(crate) fn condition_of<T: FloatScalar>(w: &[T]) -> T {
    if w.is_empty() {
        return T::one();
    }
    let s_max = norm2_of(w);
    let s_min = w.iter().fold(T::infinity(), |acc, &s| acc.min(s));
    if s_min == T::zero() {
        T::infinity()
    } else {
        s_max / s_min
    }
}

// ── SvdDecomposition wrapper ────────────────────────────────────────

/// Singular value decomposition of a fixed-size matrix, no allocation.
///
/// Holds the thin left factor U (M×N), the singular values (length N, in
/// the order the algorithm produced them) and the right factor V (N×N),
/// with `A = U · diag(σ) · V^T`.
///
/// # Example
///
/// ```
/// use svdcomp::Matrix;
/// use svdcomp::linalg::SvdDecomposition;
///
/// let a = Matrix::new([
///     [2.0_f64, 1.0],
///     [4.0, 2.0],
///     [4.0, 2.0],
/// ]);
/// let mut svd = SvdDecomposition::new(&a).unwrap();
/// svd.sort_descending();
/// let sigma = svd.singular_values();
/// assert!((sigma[0] - 3.0 * 5.0_f64.sqrt()).abs() < 1e-10);
/// assert!(sigma[1].abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SvdDecomposition<T: FloatScalar, const M: usize, const N: usize> {
    u: Matrix<T, M, N>,
    singular_values: [T; N],
    v: Matrix<T, N, N>,
    status: SvdStatus,
}

impl<T: FloatScalar, const M: usize, const N: usize> SvdDecomposition<T, M, N> {
    /// Compute the SVD of a matrix, leaving `a` untouched.
    ///
    /// Returns `Err(ConvergenceFailure)` if any singular value exhausted the
    /// iteration cap. Use [`with_settings`](Self::with_settings) to keep the
    /// partial result instead.
    pub fn new(a: &Matrix<T, M, N>) -> Result<Self, LinalgError> {
        let svd = Self::with_settings(a, &SvdSettings::default());
        svd.status.into_result()?;
        Ok(svd)
    }

    /// Compute the SVD with explicit settings. Never fails; check
    /// [`status`](Self::status) for convergence.
    pub fn with_settings(a: &Matrix<T, M, N>, settings: &SvdSettings) -> Self {
        let mut u = *a;
        let mut singular_values = [T::zero(); N];
        let mut v = Matrix::<T, N, N>::zeros();
        let mut rv1 = [T::zero(); N];
        let status = svd_in_place_with(&mut u, &mut singular_values, &mut v, &mut rv1, settings);
        Self {
            u,
            singular_values,
            v,
            status,
        }
    }

    /// The singular values, unsorted unless [`sort_descending`](Self::sort_descending) was called.
    #[inline]
    pub fn singular_values(&self) -> &[T; N] {
        &self.singular_values
    }

    /// The thin left factor U (M×N).
    #[inline]
    pub fn u(&self) -> &Matrix<T, M, N> {
        &self.u
    }

    /// The right factor V (N×N). Columns are the right singular vectors.
    #[inline]
    pub fn v(&self) -> &Matrix<T, N, N> {
        &self.v
    }

    /// V^T, the form most other libraries return.
    pub fn vt(&self) -> Matrix<T, N, N> {
        self.v.transpose()
    }

    /// Convergence outcome of the decomposition.
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
}

/// Convenience methods for SVD on fixed-size matrices.
impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Singular value decomposition.
    ///
    /// ```
    /// use svdcomp::Matrix;
    ///
    /// let a = Matrix::new([[3.0_f64, 2.0], [2.0, 3.0]]);
    /// let mut svd = a.svd().unwrap();
    /// svd.sort_descending();
    /// assert!((svd.singular_values()[0] - 5.0).abs() < 1e-10);
    /// assert!((svd.singular_values()[1] - 1.0).abs() < 1e-10);
    /// ```
    pub fn svd(&self) -> Result<SvdDecomposition<T, M, N>, LinalgError> {
        SvdDecomposition::new(self)
    }

    /// Singular values only (no U/V computation), unsorted.
    ///
    /// ```
    /// use svdcomp::Matrix;
    ///
    /// let a = Matrix::new([[3.0_f64, 0.0], [0.0, -4.0]]);
    /// let sv = a.singular_values_only().unwrap();
    /// assert!((sv[0] - 3.0).abs() < 1e-10);
    /// assert!((sv[1] - 4.0).abs() < 1e-10);
    /// ```
    pub fn singular_values_only(&self) -> Result<[T; N], LinalgError> {
        let mut work = *self;
        let mut w = [T::zero(); N];
        let mut rv1 = [T::zero(); N];
        singular_values_in_place(&mut work, &mut w, &mut rv1, &SvdSettings::default())
            .into_result()?;
        Ok(w)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
