//! MATLAB-compatible quantiles and the robust spread statistics built on them.
//!
//! MATLAB's `quantile` (and therefore `iqr`, `median` and `mad` as PREP uses
//! them) is Hyndman–Fan method 5: for `n` sorted values the level `q` sits at
//! the 0-based fractional rank
//!
//! ```text
//! r = clamp(q·n − 0.5, 0, n − 1)
//! Q = x[⌊r⌋] + (r − ⌊r⌋) · (x[⌈r⌉] − x[⌊r⌋])
//! ```
//!
//! numpy's default `np.quantile` is method 7 (`r = q·(n − 1)`); the two only
//! agree at `q ∈ {0, 1}` and at the median of symmetric samples.
//!
//! NaNs are sorted out of each lane before ranking, so `n` counts non-NaN
//! values only. A lane with no usable values yields NaN.
use ndarray::{Array1, ArrayBase, ArrayView1, Axis, Data, Ix2};

use crate::error::{invalid, Result};

/// Scale factor turning a MAD into a robust estimate of the standard
/// deviation for normally distributed data.
pub const MAD_TO_SD: f64 = 1.4826;

/// Method-5 quantile of every lane along `axis`.
///
/// `axis = Axis(0)` reduces down the rows and returns one value per column,
/// like MATLAB's `quantile(X, q)` on a `[T, C]` matrix.
///
/// # Errors
///
/// `InvalidArgument` if `q` is not in `[0, 1]` or `axis` is not 0 or 1.
///
/// # Examples
///
/// ```
/// use ndarray::{array, Axis};
/// use prep_numerics::mat_quantile;
///
/// let x = array![[1.0], [2.0], [3.0], [4.0]];
/// let q = mat_quantile(&x, 0.25, Axis(0)).unwrap();
/// assert_eq!(q[0], 1.5);
/// ```
pub fn mat_quantile<S>(data: &ArrayBase<S, Ix2>, q: f64, axis: Axis) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    check_level(q)?;
    check_axis(axis)?;
    log::debug!(
        "mat_quantile: q={q} axis={} shape={:?}",
        axis.index(),
        data.shape()
    );
    Ok(data.map_axis(axis, |lane| lane_quantile(lane, q)))
}

/// Method-5 quantile of a single vector.
pub fn mat_quantile_1d<S>(values: &ArrayBase<S, ndarray::Ix1>, q: f64) -> Result<f64>
where
    S: Data<Elem = f64>,
{
    check_level(q)?;
    Ok(lane_quantile(values.view(), q))
}

/// Interquartile range along `axis`: `Q(0.75) − Q(0.25)`.
///
/// Both quartiles come from [`mat_quantile`]; no other interpolation rule is
/// ever used for IQR.
pub fn mat_iqr<S>(data: &ArrayBase<S, Ix2>, axis: Axis) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    let upper = mat_quantile(data, 0.75, axis)?;
    let lower = mat_quantile(data, 0.25, axis)?;
    Ok(upper - lower)
}

/// Median along `axis` (the 0.5 quantile).
pub fn mat_median<S>(data: &ArrayBase<S, Ix2>, axis: Axis) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    mat_quantile(data, 0.5, axis)
}

/// Median absolute deviation along `axis`, as MATLAB's `mad(X, 1)`.
///
/// Per lane: `median(|x − median(x)|)`. Multiply by [`MAD_TO_SD`] for a
/// robust standard deviation.
pub fn mat_mad<S>(data: &ArrayBase<S, Ix2>, axis: Axis) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    check_axis(axis)?;
    Ok(data.map_axis(axis, |lane| {
        let centre = lane_quantile(lane, 0.5);
        let dev: Array1<f64> = lane.mapv(|v| (v - centre).abs());
        lane_quantile(dev.view(), 0.5)
    }))
}

fn check_level(q: f64) -> Result<()> {
    // Written so that NaN fails too.
    if !(0.0..=1.0).contains(&q) {
        invalid!("quantile level must lie in [0, 1], got {q}");
    }
    Ok(())
}

fn check_axis(axis: Axis) -> Result<()> {
    if axis.index() > 1 {
        invalid!("axis must be 0 or 1 for a 2-D matrix, got {}", axis.index());
    }
    Ok(())
}

fn lane_quantile(lane: ArrayView1<f64>, q: f64) -> f64 {
    let mut sorted: Vec<f64> = lane.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return f64::NAN;
    }
    sorted.sort_unstable_by(f64::total_cmp);
    interpolate_sorted(&sorted, q)
}

/// Method-5 interpolation on an already sorted, NaN-free slice.
fn interpolate_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    let r = (q * n as f64 - 0.5).clamp(0.0, (n - 1) as f64);
    let lo = r.floor();
    let frac = r - lo;
    let lo = lo as usize;
    if frac == 0.0 {
        // Avoids ∞ − ∞ when both neighbours are infinite.
        return sorted[lo];
    }
    let hi = r.ceil() as usize;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
