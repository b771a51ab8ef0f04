//! Inverse-CDF lookup and uniform draws.

use rand::RngCore;

/// Smallest index `i` with `cdf[i] >= draw`.
///
/// A zero-mass (or empty) distribution maps every draw to index 0. Draws past
/// the final entry are clamped to the last index.
pub fn sample_index(cdf: &[u64], draw: f64) -> usize {
    match cdf.last() {
        None | Some(0) => 0,
        Some(_) => cdf
            .partition_point(|&v| (v as f64) < draw)
            .min(cdf.len() - 1),
    }
}

/// Uniform draw in `[0, 1)` with 53 bits of precision.
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
