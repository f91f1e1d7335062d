//! Columnwise correlation of two equally shaped matrices.
//!
//! `a`, `b`: [T, C]  →  one coefficient per column, length C.
//!
//! Standard mode is Pearson's r. `matlab_strict` reproduces MATLAB PREP's
//! RANSAC scoring, which skips mean removal:
//!
//! ```text
//! r = Σ a·b / (sqrt(Σ a²) · sqrt(Σ b²))
//! ```
//!
//! The two agree only when every column is already zero-mean.
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix2};

use crate::error::{invalid, Result};

/// Correlate column `k` of `a` with column `k` of `b` for every `k`.
///
/// A zero-variance column yields NaN in standard mode (`0 / 0`); an all-zero
/// column does the same in strict mode. NaN is returned, not masked.
///
/// # Errors
///
/// `InvalidArgument` if `a` and `b` differ in shape.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use prep_numerics::correlate_arrays;
///
/// let a = array![[1.0], [2.0], [3.0]];
/// let b = array![[2.0], [4.0], [6.5]];
/// let r = correlate_arrays(&a, &b, false).unwrap();
/// assert!(r[0] > 0.99);
/// ```
pub fn correlate_arrays<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix2>,
    matlab_strict: bool,
) -> Result<Array1<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if a.shape() != b.shape() {
        invalid!(
            "correlate_arrays needs equal shapes, got {:?} and {:?}",
            a.shape(),
            b.shape()
        );
    }
    log::debug!(
        "correlate_arrays: shape={:?} matlab_strict={matlab_strict}",
        a.shape()
    );

    let out = a
        .columns()
        .into_iter()
        .zip(b.columns())
        .map(|(x, y)| {
            if matlab_strict {
                uncentred(x, y)
            } else {
                pearson(x, y)
            }
        })
        .collect();
    Ok(out)
}

fn pearson(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let n = x.len() as f64;
    let mx = x.sum() / n;
    let my = y.sum() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    sxy / (sxx * syy).sqrt()
}

fn uncentred(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let sxy = x.dot(&y);
    let sxx = x.dot(&x);
    let syy = y.dot(&y);
    sxy / (sxx.sqrt() * syy.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    #[test]
    fn perfectly_correlated_columns() {
        let a = Array2::from_shape_fn((50, 3), |(t, c)| (t as f64 * 0.3 + c as f64).sin());
        let b = a.mapv(|v| 2.0 * v + 1.0);
        let r = correlate_arrays(&a, &b, false).unwrap();
        for &v in r.iter() {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn anti_correlated_column() {
        let a = array![[1.0], [2.0], [3.0], [4.0]];
        let b = a.mapv(|v| -v);
        assert_abs_diff_eq!(correlate_arrays(&a, &b, false).unwrap()[0], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn strict_is_not_offset_invariant() {
        // Pearson is offset-invariant, the strict form is not.
        let a = array![[1.0], [2.0], [3.0]];
        let b = array![[11.0], [12.0], [13.0]];
        assert_abs_diff_eq!(correlate_arrays(&a, &b, false).unwrap()[0], 1.0, epsilon = 1e-12);
        let strict = correlate_arrays(&a, &b, true).unwrap()[0];
        // 74 / (sqrt(14) · sqrt(434))
        assert_abs_diff_eq!(strict, 74.0 / (14f64.sqrt() * 434f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn modes_agree_on_zero_mean_columns() {
        let a = array![[1.0, -2.0], [-1.0, 0.5], [0.0, 1.5]];
        let b = array![[0.5, 1.0], [0.25, -3.0], [-0.75, 2.0]];
        let std = correlate_arrays(&a, &b, false).unwrap();
        let strict = correlate_arrays(&a, &b, true).unwrap();
        for (s, m) in std.iter().zip(strict.iter()) {
            assert_abs_diff_eq!(*s, *m, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_column_gives_nan() {
        let a = array![[3.0, 1.0], [3.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let r = correlate_arrays(&a, &b, false).unwrap();
        assert!(r[0].is_nan());
        assert!(r[1].is_finite());
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let a = Array2::<f64>::zeros((4, 3));
        let b = Array2::<f64>::zeros((3, 4));
        assert!(matches!(
            correlate_arrays(&a, &b, true),
            Err(crate::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn accepts_views() {
        let a = array![[1.0, 0.0], [2.0, 0.0], [3.0, 1.0]];
        let r = correlate_arrays(&a.view(), &a.t().t(), false).unwrap();
        assert_abs_diff_eq!(r[0], 1.0, epsilon = 1e-12);
    }
}
