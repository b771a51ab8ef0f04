//! Stratified (jittered) importance sampling.

use rand::RngCore;
use tracing::debug;

use crate::canvas::InkDot;
use crate::cdf::Cdfs;
use crate::strategy::{draw_dot, jitter, StippleSampling};
use crate::{Result, StipplerError};

/// Jittered sampling over an `s × s` grid of row/column mass strata.
///
/// Each pass draws one sample per stratum pair, and `W·H / n` passes are
/// made, where `n = s²`. Compared to [`RandomSampling`](super::RandomSampling)
/// this spreads the same number of dots more evenly across the darkness mass.
#[derive(Debug, Clone)]
pub struct StratifiedSampling {
    n: usize,
    side: usize,
}

impl StratifiedSampling {
    /// `n` must be a non-zero perfect square.
    pub fn new(n: usize) -> Result<Self> {
        let side = n.isqrt();
        if n == 0 || side * side != n {
            return Err(StipplerError::InvalidStratification(n));
        }
        Ok(Self { n, side })
    }

    /// Samples drawn per pass.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Strata per axis.
    pub fn side(&self) -> usize {
        self.side
    }
}

impl StippleSampling for StratifiedSampling {
    fn sample(&self, cdfs: &Cdfs, rng: &mut dyn RngCore) -> Vec<InkDot> {
        if cdfs.is_empty() {
            return Vec::new();
        }

        let passes = cdfs.width() * cdfs.height() / self.n;
        let strata = self.side as f64;
        debug!(passes, side = self.side, mass = cdfs.row_mass(), "stratified sampling");

        let mut dots = Vec::with_capacity(passes * self.n);
        for _ in 0..passes {
            for j in 0..self.side {
                for k in 0..self.side {
                    let u = jitter(j, rng);
                    let v = jitter(k, rng);
                    dots.push(draw_dot(cdfs, u, v, strata));
                }
            }
        }
        dots
    }

    fn name(&self) -> &'static str {
        "stratified"
    }
}
