use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use svdcomp::linalg::{svd_in_place, svd_in_place_with, SvdSettings, SvdStatus};
use svdcomp::{DynMatrix, Matrix, Matrix3x2, MatrixViewMut};

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn random_matrix(rng: &mut StdRng, m: usize, n: usize) -> DynMatrix<f64> {
    let data: Vec<f64> = (0..m * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    DynMatrix::from_vec(m, n, data)
}

/// `max |A - U·diag(w)·V^T|` over all entries.
fn reconstruction_error(a: &DynMatrix<f64>, u: &DynMatrix<f64>, w: &[f64], v: &DynMatrix<f64>) -> f64 {
    let mut worst: f64 = 0.0;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let mut sum = 0.0;
            for k in 0..w.len() {
                sum += u[(i, k)] * w[k] * v[(j, k)];
            }
            worst = worst.max((sum - a[(i, j)]).abs());
        }
    }
    worst
}

/// `max |Q[:, cols]^T Q[:, cols] - I|`.
fn orthogonality_error(q: &DynMatrix<f64>, cols: usize) -> f64 {
    let mut worst: f64 = 0.0;
    for p in 0..cols {
        for r in 0..cols {
            let mut dot = 0.0;
            for i in 0..q.nrows() {
                dot += q[(i, p)] * q[(i, r)];
            }
            let expected = if p == r { 1.0 } else { 0.0 };
            worst = worst.max((dot - expected).abs());
        }
    }
    worst
}

// ── Small known cases ───────────────────────────────────────────────

#[test]
fn identity_2x2() {
    let mut a = Matrix::new([[1.0_f64, 0.0], [0.0, 1.0]]);
    let mut w = [0.0; 2];
    let mut v: Matrix<f64, 2, 2> = Matrix::zeros();
    let mut rv1 = [0.0; 2];
    let status = svd_in_place_with(&mut a, &mut w, &mut v, &mut rv1, &SvdSettings::default());
    assert_eq!(status, SvdStatus::Converged);
    assert_eq!(w, [1.0, 1.0]);
    // U and V come out as identities up to a shared sign per column.
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(a[(i, j)].abs(), expected, 1e-15, "|U|");
            assert_near(v[(i, j)].abs(), expected, 1e-15, "|V|");
        }
        assert_eq!(a[(i, i)], v[(i, i)]);
    }
}

#[test]
fn diagonal_3_1() {
    let a = Matrix::new([[3.0_f64, 0.0], [0.0, 1.0]]);
    let svd = a.svd().unwrap();
    let mut sv = *svd.singular_values();
    sv.sort_by(|x, y| y.partial_cmp(x).unwrap());
    assert_near(sv[0], 3.0, 1e-14, "σ0");
    assert_near(sv[1], 1.0, 1e-14, "σ1");
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(svd.u()[(i, j)].abs(), expected, 1e-14, "|U|");
            assert_near(svd.v()[(i, j)].abs(), expected, 1e-14, "|V|");
        }
    }
}

#[test]
fn tall_rank_two() {
    let a = Matrix3x2::new([[1.0_f64, 0.0], [0.0, 0.0], [0.0, 1.0]]);
    let svd = a.svd().unwrap();
    assert_near(svd.singular_values()[0], 1.0, 1e-14, "σ0");
    assert_near(svd.singular_values()[1], 1.0, 1e-14, "σ1");

    let ad: DynMatrix<f64> = a.into();
    let u: DynMatrix<f64> = (*svd.u()).into();
    let v: DynMatrix<f64> = (*svd.v()).into();
    assert!(reconstruction_error(&ad, &u, svd.singular_values(), &v) < 1e-14);
    assert!(orthogonality_error(&u, 2) < 1e-14);
}

#[test]
fn outer_product_rank_one() {
    // [1, 2, 2] ⊗ [2, 1]: norms 3 and √5.
    let x = [1.0_f64, 2.0, 2.0];
    let y = [2.0_f64, 1.0];
    let a = DynMatrix::from_fn(3, 2, |i, j| x[i] * y[j]);
    let mut svd = a.svd().unwrap();
    svd.sort_descending();
    assert_near(svd.singular_values()[0], 3.0 * 5.0_f64.sqrt(), 1e-12, "σ0");
    assert!(svd.singular_values()[1].abs() < 1e-12);
    assert_eq!(svd.rank(1e-10), 1);
    assert!(reconstruction_error(&a, svd.u(), svd.singular_values(), svd.v()) < 1e-12);
}

// ── Randomized properties ───────────────────────────────────────────

#[test]
fn random_tall_and_square() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &(m, n) in &[(1, 1), (2, 2), (5, 3), (8, 8), (20, 7), (33, 33)] {
        let a = random_matrix(&mut rng, m, n);
        let svd = a.svd().unwrap();
        let w = svd.singular_values();
        assert!(w.iter().all(|&s| s >= 0.0), "{}x{}: negative singular value", m, n);
        let err = reconstruction_error(&a, svd.u(), w, svd.v());
        assert!(err < 1e-12, "{}x{}: reconstruction error {}", m, n, err);
        let eu = orthogonality_error(svd.u(), n);
        assert!(eu < 1e-12, "{}x{}: U orthogonality {}", m, n, eu);
        let ev = orthogonality_error(svd.v(), n);
        assert!(ev < 1e-12, "{}x{}: V orthogonality {}", m, n, ev);
    }
}

#[test]
fn random_wide() {
    let mut rng = StdRng::seed_from_u64(7);
    for &(m, n) in &[(1, 4), (3, 5), (6, 10)] {
        let a = random_matrix(&mut rng, m, n);
        let mut svd = a.svd().unwrap();
        svd.sort_descending();
        let w = svd.singular_values();
        let err = reconstruction_error(&a, svd.u(), w, svd.v());
        assert!(err < 1e-12, "{}x{}: reconstruction error {}", m, n, err);
        assert!(orthogonality_error(svd.v(), n) < 1e-12);
        assert!(orthogonality_error(svd.u(), m) < 1e-12);
        for &s in &w[m..] {
            assert!(s.abs() < 1e-12, "{}x{}: trailing value {}", m, n, s);
        }
    }
}

#[test]
fn singular_values_match_full_decomposition() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(&mut rng, 12, 6);
    let mut only = a.singular_values_only().unwrap();
    let mut full = a.svd().unwrap().singular_values().to_vec();
    only.sort_by(|x, y| y.partial_cmp(x).unwrap());
    full.sort_by(|x, y| y.partial_cmp(x).unwrap());
    for k in 0..6 {
        assert_near(only[k], full[k], 1e-13, "σ");
    }
}

#[test]
fn frobenius_norm_is_preserved() {
    let mut rng = StdRng::seed_from_u64(99);
    let a = random_matrix(&mut rng, 9, 5);
    let sv = a.singular_values_only().unwrap();
    let sum_sq: f64 = sv.iter().map(|s| s * s).sum();
    assert_near(sum_sq.sqrt(), a.frobenius_norm(), 1e-12, "‖A‖_F");
}

#[test]
fn repeated_runs_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(1234);
    let a = random_matrix(&mut rng, 10, 6);
    let first = a.svd().unwrap();
    let second = a.svd().unwrap();
    assert_eq!(first.singular_values(), second.singular_values());
    assert_eq!(first.u(), second.u());
    assert_eq!(first.v(), second.v());
}

#[test]
fn in_place_overwrites_input_with_u() {
    let mut rng = StdRng::seed_from_u64(5);
    let original = random_matrix(&mut rng, 6, 4);
    let mut a = original.clone();
    let mut w = vec![0.0; 4];
    let mut v = DynMatrix::zeros(4, 4, 0.0);
    assert!(svd_in_place(&mut a, &mut w, &mut v).is_converged());
    assert!(reconstruction_error(&original, &a, &w, &v) < 1e-12);
}

#[test]
fn strided_view_over_larger_buffer() {
    let mut rng = StdRng::seed_from_u64(17);
    let original = random_matrix(&mut rng, 5, 3);
    // 5×3 matrix inside a 5×4 buffer.
    let mut buf = vec![0.0; 20];
    for i in 0..5 {
        buf[i * 4..i * 4 + 3].copy_from_slice(original.row_slice(i));
    }
    let mut w = vec![0.0; 3];
    let mut v = DynMatrix::zeros(3, 3, 0.0);
    {
        let mut view = MatrixViewMut::with_stride(&mut buf, 5, 3, 4);
        assert!(svd_in_place(&mut view, &mut w, &mut v).is_converged());
    }
    let u = DynMatrix::from_fn(5, 3, |i, j| buf[i * 4 + j]);
    assert!(reconstruction_error(&original, &u, &w, &v) < 1e-12);
    for i in 0..5 {
        assert_eq!(buf[i * 4 + 3], 0.0);
    }
}

#[test]
fn f32_decomposition() {
    let a = Matrix::new([[4.0_f32, 0.0], [3.0, -5.0]]);
    let mut svd = a.svd().unwrap();
    svd.sort_descending();
    // A^T A = [[25, -15], [-15, 25]] → σ² = 40, 10.
    assert!((svd.singular_values()[0] - 40.0_f32.sqrt()).abs() < 1e-5);
    assert!((svd.singular_values()[1] - 10.0_f32.sqrt()).abs() < 1e-5);
}

// ── Iteration cap ───────────────────────────────────────────────────

#[test]
fn exhausted_cap_still_returns_usable_factors() {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = random_matrix(&mut rng, 8, 8);
    for max_iter in [0, 1, 2] {
        let svd = a.svd_with(&SvdSettings { max_iter });
        let w = svd.singular_values();
        assert!(w.iter().all(|&s| s.is_finite() && s >= 0.0));
        assert!(svd.u().iter().all(|x| x.is_finite()));
        assert!(svd.v().iter().all(|x| x.is_finite()));
        // Every applied rotation is orthogonal, converged or not.
        assert!(orthogonality_error(svd.v(), 8) < 1e-12);
        assert!(orthogonality_error(svd.u(), 8) < 1e-12);
    }

    let svd = a.svd_with(&SvdSettings { max_iter: 0 });
    assert!(matches!(svd.status(), SvdStatus::IterationLimit { unconverged } if unconverged > 0));
    assert!(a.svd_with(&SvdSettings { max_iter: 0 }).status().into_result().is_err());
    assert!(a.svd().is_ok());
}
