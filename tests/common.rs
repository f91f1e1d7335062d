/// Shared helpers for the MATLAB comparison tests.
use ndarray::{Array1, Array2};
use prep_numerics::{matlab_rand, MatlabRng};

/// Seed used by every published PREP comparison run.
#[allow(unused)]
pub const PREP_SEED: u32 = 435_656;

#[allow(unused)]
/// MATLAB: `rng(seed); x = rand(rows, cols);`
pub fn seeded_rand(seed: u32, rows: usize, cols: usize) -> Array2<f64> {
    matlab_rand(&mut MatlabRng::new(seed), rows, cols)
}

#[allow(unused)]
/// MATLAB: `rng(seed); a = rand(rows, cols) - 0.5; b = rand(rows, cols) - 0.5;`
pub fn seeded_centred_pair(seed: u32, rows: usize, cols: usize) -> (Array2<f64>, Array2<f64>) {
    let mut rng = MatlabRng::new(seed);
    let a = matlab_rand(&mut rng, rows, cols) - 0.5;
    let b = matlab_rand(&mut rng, rows, cols) - 0.5;
    (a, b)
}

#[allow(unused)]
/// Maximum absolute difference between two vectors.
pub fn max_abs_diff(a: &Array1<f64>, b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}
