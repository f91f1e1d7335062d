//! # prep-numerics — MATLAB numeric conventions for the PREP pipeline
//!
//! PREP's bad-channel detection and robust re-referencing were written in
//! MATLAB, and its thresholds were calibrated against MATLAB's numeric
//! conventions. Several of those differ quietly from numpy / ndarray
//! defaults, and each difference moves channels across detection
//! thresholds. This crate reproduces them exactly so that a Rust port
//! makes the same decisions as the MATLAB reference on the same seeded
//! input.
//!
//! ## Primitives
//!
//! ```text
//! round      mat_round            halves away from zero  (numpy: to even)
//! quantile   mat_quantile         Hyndman–Fan method 5   (numpy: method 7)
//!            mat_iqr / mat_median / mat_mad   built on mat_quantile
//! subset     get_random_subset    sort candidates by one draw each
//!            prep_randsample      PREP's sequential randsample
//! correlate  correlate_arrays     Pearson, or PREP's uncentred form
//! rng        MatlabRng            MT19937 + genrand_res53, MATLAB rng(seed)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use ndarray::Axis;
//! use prep_numerics::{correlate_arrays, mat_iqr, matlab_rand, prep_randsample, MatlabRng};
//!
//! // MATLAB: rng(435656); tst = rand(100, 3);
//! let mut rng = MatlabRng::new(435_656);
//! let tst = matlab_rand(&mut rng, 100, 3);
//!
//! let iqr = mat_iqr(&tst, Axis(0)).unwrap();
//! assert!((iqr[0] - 0.4776).abs() < 1e-3);
//!
//! let r = correlate_arrays(&tst, &tst, true).unwrap();
//! assert!((r[0] - 1.0).abs() < 1e-12);
//!
//! let channels: Vec<u32> = (1..=60).collect();
//! let picks = prep_randsample(&channels, 8, &mut MatlabRng::new(435_656)).unwrap();
//! assert_eq!(picks, [6, 47, 55, 31, 29, 44, 36, 15]);
//! ```
//!
//! Every primitive takes its matrices by reference and leaves them
//! untouched. The only state is the caller's random generator, passed as
//! `&mut R` for any `R: rand::Rng`.

pub mod config;
pub mod correlate;
pub mod error;
pub mod io;
pub mod quantile;
pub mod rng;
pub mod round;
pub mod subset;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use config::SubsetConfig;
pub use correlate::correlate_arrays;
pub use error::{Error, Result};
pub use quantile::{mat_iqr, mat_mad, mat_median, mat_quantile, mat_quantile_1d, MAD_TO_SD};
pub use rng::{matlab_rand, MatlabRng, MATLAB_DEFAULT_SEED};
pub use round::{mat_round, mat_round_array};
pub use subset::{get_random_subset, prep_randsample, random_channel_subsets};
