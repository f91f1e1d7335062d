//! Random channel subsets without replacement.
//!
//! Two procedures are provided and both are kept because they consume the
//! random stream differently:
//!
//! * [`get_random_subset`]: one draw per candidate, candidates ordered by
//!   their draw, first `size` kept. Always consumes `n` draws.
//! * [`prep_randsample`]: MATLAB PREP's own `randsample` replacement. One
//!   draw per pick, each pick removed from the pool. Consumes `size` draws.
//!
//! The generator is always caller owned and passed as `&mut R`; use
//! [`MatlabRng`](crate::MatlabRng) to reproduce MATLAB picks for a seed.
use rand::Rng;

use crate::config::SubsetConfig;
use crate::error::{invalid, Result};
use crate::round::mat_round;

/// Pick `size` distinct candidates by sorting on one uniform draw each.
///
/// Draws are taken in candidate order, so candidate `i` is paired with the
/// `i`-th draw. Ties keep candidate order. Exactly `candidates.len()` draws
/// are consumed whatever `size` is, including `size == 0`.
///
/// # Errors
///
/// `InvalidArgument` if `size > candidates.len()`; nothing is drawn then.
///
/// # Examples
///
/// ```
/// use prep_numerics::{get_random_subset, MatlabRng};
///
/// let mut rng = MatlabRng::new(1);
/// let picks = get_random_subset(&["a", "b", "c", "d", "e"], 3, &mut rng).unwrap();
/// assert_eq!(picks, ["c", "e", "d"]);
/// ```
pub fn get_random_subset<T, R>(candidates: &[T], size: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let n = candidates.len();
    if size > n {
        invalid!("cannot pick {size} items from {n} candidates");
    }

    let draws: Vec<f64> = (0..n).map(|_| rng.random::<f64>()).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| draws[i].total_cmp(&draws[j]));

    log::debug!("get_random_subset: {size} of {n} ({n} draws)");
    Ok(order[..size].iter().map(|&i| candidates[i].clone()).collect())
}

/// MATLAB PREP's sequential `randsample`.
///
/// For each pick, with `m` items left, draw `u` and take the item at the
/// 1-based position `round(1 + (m − 1)·u)`, rounding MATLAB-style. The item
/// is removed from the pool before the next pick.
///
/// # Errors
///
/// `InvalidArgument` if `size > candidates.len()`; nothing is drawn then.
pub fn prep_randsample<T, R>(candidates: &[T], size: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let n = candidates.len();
    if size > n {
        invalid!("cannot pick {size} items from {n} candidates");
    }

    let mut remaining = candidates.to_vec();
    let mut picks = Vec::with_capacity(size);
    for _ in 0..size {
        let u = rng.random::<f64>();
        let pos = mat_round(1.0 + (remaining.len() - 1) as f64 * u) as usize;
        picks.push(remaining.remove(pos - 1));
    }

    log::debug!("prep_randsample: {size} of {n} ({size} draws)");
    Ok(picks)
}

/// Draw `cfg.n_samples` predictor subsets of the channel indices `0..n_good`.
///
/// Each subset holds [`SubsetConfig::n_predictors`] channels picked with
/// [`prep_randsample`]. All subsets share `rng`, so subset `k + 1` continues
/// the stream where subset `k` stopped, matching the RANSAC draw pattern.
///
/// # Errors
///
/// `InvalidArgument` if the predictor count works out below 1 or above
/// `n_good`.
pub fn random_channel_subsets<R>(
    n_good: usize,
    cfg: &SubsetConfig,
    rng: &mut R,
) -> Result<Vec<Vec<usize>>>
where
    R: Rng + ?Sized,
{
    let n_pred = cfg.n_predictors(n_good);
    if n_pred < 1 || n_pred > n_good {
        invalid!(
            "channel_fraction {} of {n_good} good channels gives {n_pred} predictors",
            cfg.channel_fraction
        );
    }

    let channels: Vec<usize> = (0..n_good).collect();
    let subsets = (0..cfg.n_samples)
        .map(|_| prep_randsample(&channels, n_pred, &mut *rng))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "random_channel_subsets: {} subsets × {n_pred} of {n_good} channels",
        subsets.len()
    );
    Ok(subsets)
}
