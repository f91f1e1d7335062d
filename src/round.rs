//! MATLAB `round`: nearest integer, exact halves away from zero.
//!
//! `0.5 → 1`, `1.5 → 2`, `2.5 → 3`, `-0.5 → -1`. numpy's `np.round` rounds
//! halves to even (`2.5 → 2`), which shifts the channel counts PREP derives
//! from fractions.
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Round a scalar the MATLAB way. NaN and ±∞ pass through.
///
/// ```
/// use prep_numerics::mat_round;
/// assert_eq!(mat_round(0.5), 1.0);
/// assert_eq!(mat_round(-0.5), -1.0);
/// assert_eq!(mat_round(2.5), 3.0);
/// ```
#[inline]
pub fn mat_round(x: f64) -> f64 {
    // `f64::round` already breaks ties away from zero.
    x.round()
}

/// Elementwise [`mat_round`], shape preserved. The input is not modified.
pub fn mat_round_array<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(mat_round)
}
