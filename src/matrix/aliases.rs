//! Pre-defined type aliases for common matrix sizes.

use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6, 6>;

// ── Tall matrix aliases ────────────────────────────────────────────

/// 3×2 matrix.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 4×3 matrix.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
/// 6×4 matrix.
pub type Matrix6x4<T> = Matrix<T, 6, 4>;
