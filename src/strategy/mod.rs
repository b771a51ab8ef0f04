//! Sampling strategies that turn darkness CDFs into ink dots.

use rand::RngCore;

use crate::canvas::InkDot;
use crate::cdf::Cdfs;
use crate::sample::{rand01, sample_index};

pub mod random;
pub mod stratified;

pub use random::RandomSampling;
pub use stratified::StratifiedSampling;

/// Draws ink dots proportional to local darkness.
pub trait StippleSampling {
    fn sample(&self, cdfs: &Cdfs, rng: &mut dyn RngCore) -> Vec<InkDot>;

    /// Short label used in logs and default output names.
    fn name(&self) -> &'static str;
}

/// Row-then-column lookup for a pair of stratum coordinates.
///
/// `u` and `v` are jittered positions in `[0, strata)`; the row and column
/// masses are split into `strata` equal slices. Plain random sampling is the
/// `strata == 1` case.
pub(crate) fn draw_dot(cdfs: &Cdfs, u: f64, v: f64, strata: f64) -> InkDot {
    let row = sample_index(cdfs.rows(), u * cdfs.row_mass() as f64 / strata);
    let col = sample_index(
        cdfs.columns(row),
        v * cdfs.column_mass(row) as f64 / strata,
    );
    InkDot::new(row, col)
}

/// Jittered coordinate inside stratum `cell`.
#[inline]
pub(crate) fn jitter(cell: usize, rng: &mut dyn RngCore) -> f64 {
    cell as f64 + rand01(rng)
}
