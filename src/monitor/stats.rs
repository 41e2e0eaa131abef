//! Distributional-shift statistics.
//!
//! Two nonparametric two-sample measures: the Population Stability
//! Index over equal-probability-mass quantile buckets, and the
//! two-sample Kolmogorov-Smirnov statistic.
//!
//! Inputs are not filtered: NaN values are carried through as
//! ordinary floats and their bucket placement is undefined.

/// Default quantile bucket count for PSI.
pub const DEFAULT_BINS: usize = 10;

/// Lower clamp applied to bucket proportions before the logarithm.
const PROPORTION_FLOOR: f64 = 1e-6;

/// Population Stability Index between a reference and a current sample.
///
/// Bucket edges are the `bins + 1` linear-interpolation quantiles of
/// `reference` at evenly spaced probabilities in `[0, 1]`, with the
/// outer edges widened to ±infinity so every value lands in a bucket.
/// Buckets are right-closed, so a value equal to a tied interior edge
/// falls into the bucket to its left. Proportions are clamped into
/// `[1e-6, 1]` before the logarithm, and a zero total count divides by
/// one instead of raising (a deliberate degenerate-input
/// accommodation).
///
/// PSI is not symmetric in its arguments: the bucket edges derive from
/// `reference` only.
///
/// # Panics
///
/// Panics if `reference` is empty or `bins` is zero.
pub fn psi(reference: &[f64], current: &[f64], bins: usize) -> f64 {
    assert!(!reference.is_empty(), "psi requires a non-empty reference sample");
    assert!(bins > 0, "psi requires at least one bucket");

    let mut edges = quantile_edges(reference, bins);
    edges[0] = f64::NEG_INFINITY;
    let last = edges.len() - 1;
    edges[last] = f64::INFINITY;

    let ref_props = proportions(&histogram(reference, &edges));
    let cur_props = proportions(&histogram(current, &edges));

    ref_props.iter().zip(&cur_props).map(|(r, c)| (c - r) * (c / r).ln()).sum()
}

/// Two-sample Kolmogorov-Smirnov statistic.
///
/// The maximum absolute gap between the two empirical CDFs, evaluated
/// on the sorted set of unique values across both samples. Each CDF at
/// a grid point `x` is the right-side rank of `x` (count of elements
/// `<= x`) divided by the sample size. The result is in `[0, 1]`, is
/// `0` exactly when the empirical CDFs coincide on the grid, and is
/// symmetric in its arguments.
///
/// # Panics
///
/// Panics if either sample is empty.
pub fn ks_stat(reference: &[f64], current: &[f64]) -> f64 {
    assert!(!reference.is_empty(), "ks_stat requires a non-empty reference sample");
    assert!(!current.is_empty(), "ks_stat requires a non-empty current sample");

    let mut ref_sorted = reference.to_vec();
    ref_sorted.sort_by(f64::total_cmp);
    let mut cur_sorted = current.to_vec();
    cur_sorted.sort_by(f64::total_cmp);

    let mut grid = Vec::with_capacity(ref_sorted.len() + cur_sorted.len());
    grid.extend_from_slice(&ref_sorted);
    grid.extend_from_slice(&cur_sorted);
    grid.sort_by(f64::total_cmp);
    grid.dedup_by(|a, b| a == b);

    let ref_n = ref_sorted.len() as f64;
    let cur_n = cur_sorted.len() as f64;

    grid.iter()
        .map(|&x| {
            let cdf_r = rank_right(&ref_sorted, x) as f64 / ref_n;
            let cdf_c = rank_right(&cur_sorted, x) as f64 / cur_n;
            (cdf_r - cdf_c).abs()
        })
        .fold(0.0, f64::max)
}

/// Arithmetic mean. An empty sample yields NaN.
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// `bins + 1` quantiles of `sample` at probabilities evenly spaced in
/// `[0, 1]`, using linear interpolation between order statistics.
fn quantile_edges(sample: &[f64], bins: usize) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    (0..=bins)
        .map(|i| {
            let q = i as f64 / bins as f64;
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        })
        .collect()
}

/// Bucket counts of `sample` against sorted `edges`.
///
/// Buckets are right-closed, `(edges[i], edges[i+1]]`, so with tied
/// interior edges a value equal to the tie lands in the leftmost
/// bucket it closes and zero-width buckets stay empty.
fn histogram(sample: &[f64], edges: &[f64]) -> Vec<u64> {
    let buckets = edges.len() - 1;
    let mut counts = vec![0u64; buckets];
    for &v in sample {
        // Number of edges strictly below v; NaN compares below every
        // edge and saturates into the first bucket.
        let rank = edges.partition_point(|e| *e < v);
        let idx = rank.saturating_sub(1).min(buckets - 1);
        counts[idx] += 1;
    }
    counts
}

/// Counts to proportions with the degenerate-input guard: a zero
/// total divides by one instead of raising.
fn proportions(counts: &[u64]) -> Vec<f64> {
    let total = counts.iter().sum::<u64>().max(1) as f64;
    counts.iter().map(|&c| (c as f64 / total).clamp(PROPORTION_FLOOR, 1.0)).collect()
}

/// Number of elements in `sorted` that are `<= x` (right-side rank).
fn rank_right(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|v| *v <= x)
}
