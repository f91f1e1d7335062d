//! MATLAB's default random stream.
//!
//! MATLAB's `rng(seed)` with the default `twister` generator is MT19937
//! seeded through `init_genrand(seed)`, and `rand` builds each double from
//! two 32-bit outputs (`genrand_res53`):
//!
//! ```text
//! a = next_u32() >> 5      (27 bits)
//! b = next_u32() >> 6      (26 bits)
//! u = (a · 2^26 + b) / 2^53
//! ```
//!
//! numpy's legacy `RandomState(seed).rand()` is the same stream, which is
//! why seeded PREP comparisons line up across MATLAB and Python. The one
//! difference is seed 0: MATLAB maps `rng(0)` to the reference seed 5489.
//!
//! [`MatlabRng`] implements [`rand::RngCore`] with `next_u64` packed so that
//! `Rng::random::<f64>()` (which keeps the top 53 bits of `next_u64`)
//! returns exactly the `genrand_res53` value. Any code generic over
//! `R: rand::Rng` therefore sees MATLAB's `rand` sequence.
use ndarray::Array2;
use rand::{Rng, RngCore};
use rand_mt::Mt;

/// Seed MATLAB substitutes for `rng(0)` / `rng('default')`.
pub const MATLAB_DEFAULT_SEED: u32 = 5489;

const RES53_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0; // 2^-53

/// MT19937 generator reproducing MATLAB's `rand` for a given `rng(seed)`.
#[derive(Clone)]
pub struct MatlabRng {
    mt: Mt,
    seed: u32,
}

impl MatlabRng {
    /// Equivalent of MATLAB `rng(seed)`.
    pub fn new(seed: u32) -> Self {
        let effective = if seed == 0 { MATLAB_DEFAULT_SEED } else { seed };
        Self { mt: Mt::new(effective), seed }
    }

    /// The seed passed to [`MatlabRng::new`].
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// One uniform double in `[0, 1)`, identical to MATLAB's `rand`.
    pub fn rand(&mut self) -> f64 {
        self.res53_bits() as f64 * RES53_SCALE
    }

    /// 53-bit integer behind the next `rand()` value.
    fn res53_bits(&mut self) -> u64 {
        let a = u64::from(self.mt.next_u32() >> 5);
        let b = u64::from(self.mt.next_u32() >> 6);
        (a << 26) | b
    }
}

impl Default for MatlabRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for MatlabRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatlabRng").field("seed", &self.seed).finish_non_exhaustive()
    }
}

impl RngCore for MatlabRng {
    fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    /// Top 53 bits carry `genrand_res53`; consumes two 32-bit outputs.
    fn next_u64(&mut self) -> u64 {
        self.res53_bits() << 11
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let word = self.mt.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

/// MATLAB `rand(rows, cols)`: draws fill the matrix column by column.
///
/// ```
/// use prep_numerics::{matlab_rand, MatlabRng};
///
/// let mut rng = MatlabRng::new(0);
/// let x = matlab_rand(&mut rng, 2, 2);
/// assert!((x[[0, 0]] - 0.8147).abs() < 1e-4);
/// ```
pub fn matlab_rand<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Array2<f64> {
    let mut out = Array2::zeros((rows, cols));
    for mut col in out.columns_mut() {
        for v in col.iter_mut() {
            *v = rng.random::<f64>();
        }
    }
    log::trace!("matlab_rand: drew {} values", rows * cols);
    out
}
