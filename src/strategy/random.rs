//! Independent importance sampling over the whole field.

use rand::RngCore;
use tracing::debug;

use crate::canvas::InkDot;
use crate::cdf::Cdfs;
use crate::sample::rand01;
use crate::strategy::{draw_dot, StippleSampling};

/// I.i.d. samples drawn from the row CDF, then the chosen row's column CDF.
#[derive(Debug, Clone, Default)]
pub struct RandomSampling {
    /// Number of draws; `None` means one per pixel.
    pub count: Option<usize>,
}

impl RandomSampling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count) }
    }
}

impl StippleSampling for RandomSampling {
    fn sample(&self, cdfs: &Cdfs, rng: &mut dyn RngCore) -> Vec<InkDot> {
        if cdfs.is_empty() {
            return Vec::new();
        }

        let count = self.count.unwrap_or(cdfs.width() * cdfs.height());
        debug!(count, mass = cdfs.row_mass(), "random sampling");

        (0..count)
            .map(|_| {
                let u = rand01(rng);
                let v = rand01(rng);
                draw_dot(cdfs, u, v, 1.0)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
