/// compat_vectors: draw seeded data from MATLAB's random stream, run every
/// primitive on it and write all inputs and outputs to a safetensors file
/// for comparison against MATLAB / Python PREP.
///
/// Output keys:
///   data            [R, C]   f64  rand(R, C)
///   quantile        [C]      f64  quantile(data, q)
///   iqr             [C]      f64  iqr(data)
///   median          [C]      f64  median(data)
///   mad             [C]      f64  mad(data, 1)
///   corr_a, corr_b  [R, C]   f64  rand(R, C) − 0.5, drawn after `data`
///   corr            [C]      f64  Pearson
///   corr_strict     [C]      f64  PREP uncentred form
///   picks_sorted    [S]      i64  get_random_subset(1:N, S), fresh rng(seed)
///   picks_prep      [S]      i64  prep_randsample(1:N, S), fresh rng(seed)
///   subsets         [K, P]   i64  random_channel_subsets(N), fresh rng(seed)
use anyhow::Result;
use clap::Parser;
use ndarray::Axis;
use std::path::PathBuf;

use prep_numerics::{
    correlate_arrays, get_random_subset, io::StWriter, mat_iqr, mat_mad, mat_median,
    mat_quantile, matlab_rand, prep_randsample, random_channel_subsets, MatlabRng, SubsetConfig,
};

#[derive(Parser, Debug)]
#[command(name = "compat_vectors", about = "Seeded MATLAB-compatibility vectors")]
struct Args {
    /// Output safetensors path.
    #[arg(long)]
    output: PathBuf,

    /// MATLAB rng seed.
    #[arg(long, default_value_t = 435_656)]
    seed: u32,

    /// Rows of the random test matrix (samples).
    #[arg(long, default_value_t = 100)]
    rows: usize,

    /// Columns of the random test matrix (channels).
    #[arg(long, default_value_t = 3)]
    cols: usize,

    /// Quantile level.
    #[arg(long, default_value_t = 0.98)]
    q: f64,

    /// Number of candidate channels for the subset samplers.
    #[arg(long, default_value_t = 60)]
    n_chans: usize,

    /// Picks per subset for the single-subset samplers.
    #[arg(long, default_value_t = 8)]
    subset_size: usize,

    /// RANSAC-style subsets to draw.
    #[arg(long, default_value_t = 50)]
    n_samples: usize,

    /// Fraction of channels used as predictors per RANSAC subset.
    #[arg(long, default_value_t = 0.25)]
    channel_fraction: f64,

    /// Round the predictor count MATLAB-style.
    #[arg(long)]
    matlab_strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = SubsetConfig {
        n_samples: args.n_samples,
        channel_fraction: args.channel_fraction,
        seed: args.seed,
        matlab_strict: args.matlab_strict,
    };

    // ── 1. Quantile statistics ─────────────────────────────────────────────
    let mut rng = MatlabRng::new(cfg.seed);
    let data = matlab_rand(&mut rng, args.rows, args.cols);
    let quantile = mat_quantile(&data, args.q, Axis(0))?;
    let iqr = mat_iqr(&data, Axis(0))?;
    let median = mat_median(&data, Axis(0))?;
    let mad = mat_mad(&data, Axis(0))?;

    // ── 2. Correlation ─────────────────────────────────────────────────────
    let corr_a = matlab_rand(&mut rng, args.rows, args.cols) - 0.5;
    let corr_b = matlab_rand(&mut rng, args.rows, args.cols) - 0.5;
    let corr = correlate_arrays(&corr_a, &corr_b, false)?;
    let corr_strict = correlate_arrays(&corr_a, &corr_b, true)?;

    // ── 3. Subsets ─────────────────────────────────────────────────────────
    let chans: Vec<i64> = (1..=args.n_chans as i64).collect();
    let picks_sorted = get_random_subset(&chans, args.subset_size, &mut MatlabRng::new(cfg.seed))?;
    let picks_prep = prep_randsample(&chans, args.subset_size, &mut MatlabRng::new(cfg.seed))?;
    let subsets = random_channel_subsets(args.n_chans, &cfg, &mut MatlabRng::new(cfg.seed))?;
    let n_pred = cfg.n_predictors(args.n_chans);

    eprintln!(
        "  seed={}  data {}×{}  q={}  {} chans  {} subsets × {n_pred}",
        cfg.seed, args.rows, args.cols, args.q, args.n_chans, subsets.len()
    );
    eprintln!("  quantile    {quantile:.4}");
    eprintln!("  iqr         {iqr:.4}");
    eprintln!("  corr        {corr:.4}");
    eprintln!("  corr_strict {corr_strict:.4}");
    eprintln!("  picks_prep  {picks_prep:?}");

    // ── 4. Write output ────────────────────────────────────────────────────
    eprintln!("Writing → {}", args.output.display());
    let mut w = StWriter::new();
    w.add_f64_arr2("data", &data);
    w.add_f64_arr1("quantile", &quantile);
    w.add_f64_arr1("iqr", &iqr);
    w.add_f64_arr1("median", &median);
    w.add_f64_arr1("mad", &mad);
    w.add_f64_arr2("corr_a", &corr_a);
    w.add_f64_arr2("corr_b", &corr_b);
    w.add_f64_arr1("corr", &corr);
    w.add_f64_arr1("corr_strict", &corr_strict);
    w.add_i64("picks_sorted", &picks_sorted, &[picks_sorted.len()]);
    w.add_i64("picks_prep", &picks_prep, &[picks_prep.len()]);

    let flat: Vec<i64> = subsets.iter().flatten().map(|&c| c as i64).collect();
    w.add_i64("subsets", &flat, &[subsets.len(), n_pred]);
    w.write(&args.output)?;

    eprintln!("Done.");
    Ok(())
}
