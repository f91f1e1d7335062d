//! Subset-draw configuration.
//!
//! [`SubsetConfig`] holds the parameters PREP's RANSAC step uses when it
//! draws random predictor-channel subsets. All fields have defaults matching
//! MATLAB PREP.

use crate::round::mat_round;

/// Parameters for [`random_channel_subsets`](crate::random_channel_subsets).
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use prep_numerics::SubsetConfig;
///
/// let cfg = SubsetConfig {
///     n_samples:     20,    // fewer RANSAC draws
///     matlab_strict: true,  // round the predictor count like MATLAB
///     ..SubsetConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SubsetConfig {
    /// Number of random predictor subsets to draw.
    ///
    /// Default: `50`.
    pub n_samples: usize,

    /// Fraction of the good channels used as predictors in every subset.
    ///
    /// The predictor count is `round(channel_fraction × n_good)`; see
    /// [`SubsetConfig::n_predictors`].
    ///
    /// Default: `0.25`.
    pub channel_fraction: f64,

    /// Seed for [`MatlabRng`](crate::MatlabRng), as in MATLAB `rng(seed)`.
    ///
    /// Default: `435656`, the seed used for the published PREP comparison
    /// runs.
    pub seed: u32,

    /// Round the predictor count MATLAB-style (halves away from zero)
    /// instead of numpy-style (halves to even).
    ///
    /// Only matters when `channel_fraction × n_good` ends in exactly `.5`,
    /// e.g. 0.25 × 10 = 2.5 → 3 (strict) or 2 (default).
    ///
    /// Default: `false`.
    pub matlab_strict: bool,
}

impl Default for SubsetConfig {
    /// 50 subsets · 25 % of channels · seed 435656 · numpy rounding.
    fn default() -> Self {
        Self {
            n_samples: 50,
            channel_fraction: 0.25,
            seed: 435_656,
            matlab_strict: false,
        }
    }
}

impl SubsetConfig {
    /// Predictor channels per subset for `n_good` usable channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use prep_numerics::SubsetConfig;
    /// let cfg = SubsetConfig::default();
    /// assert_eq!(cfg.n_predictors(32), 8);
    /// assert_eq!(cfg.n_predictors(10), 2);
    /// ```
    pub fn n_predictors(&self, n_good: usize) -> usize {
        let exact = self.channel_fraction * n_good as f64;
        let rounded = if self.matlab_strict {
            mat_round(exact)
        } else {
            exact.round_ties_even()
        };
        rounded.max(0.0) as usize
    }
}
