//! # svdcomp
//!
//! Dense real singular value decomposition, no-std compatible. Factors any
//! M×N matrix as `A = U · diag(w) · V^T` with Householder bidiagonalization
//! followed by implicit-shift QR on the bidiagonal form (Golub–Kahan–Reinsch).
//!
//! ## Quick start
//!
//! ```
//! use svdcomp::Matrix;
//!
//! let a = Matrix::new([
//!     [3.0_f64, 2.0],
//!     [2.0, 3.0],
//! ]);
//! let mut svd = a.svd().unwrap();
//! svd.sort_descending();
//! assert!((svd.singular_values()[0] - 5.0).abs() < 1e-12);
//! assert!((svd.singular_values()[1] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic dimensions.
//!   Stack-allocated `[[T; N]; M]` row-major storage. `Matrix::svd()` runs
//!   entirely on the stack.
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions
//!   (requires `alloc` feature, included with `std`). `Vec<T>` row-major
//!   storage, with the [`DynSvd`] wrapper.
//!
//! - [`linalg`] — The decomposition itself. Free functions operate on
//!   `&mut impl MatrixMut<T>` and overwrite the input with U; wrapper
//!   structs leave the input alone.
//!
//! - [`MatrixViewMut`] — Borrowed row-major view with an explicit row
//!   stride, for running the in-place routines over caller storage.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by the decomposition
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Convergence
//!
//! Each singular value gets at most [`linalg::DEFAULT_MAX_ITER`] QR sweeps
//! (configurable through [`linalg::SvdSettings`]). Running out is not fatal:
//! the in-place routines always return complete factors with nonnegative
//! singular values, plus an [`linalg::SvdStatus`] saying whether the cap was
//! hit. `Matrix::svd()` and `DynMatrix::svd()` turn that into
//! [`linalg::LinalgError::ConvergenceFailure`].
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `DynMatrix` / `DynSvd` and `svd_in_place` |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `log`     | no       | Warn on non-convergence, trace per-value sweep counts |
//! | `all`     | no       | All features: `std` + `log` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;
mod view;

#[cfg(feature = "alloc")]
pub mod dynmatrix;

pub use matrix::aliases::*;
pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
pub use view::MatrixViewMut;

#[cfg(feature = "alloc")]
pub use dynmatrix::{DynMatrix, DynSvd};
