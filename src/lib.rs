//! Grayscale image to stipple converter using importance sampling over pixel darkness.

pub mod canvas;
pub mod cdf;
pub mod io;
pub mod job;
pub mod sample;
pub mod strategy;

pub use canvas::{rasterize, InkDot};
pub use cdf::Cdfs;
pub use io::{load_grayscale_image, write_binary_image};
pub use job::{run_jobs, BatchReport, Job, StrategyConfig};
pub use strategy::{RandomSampling, StippleSampling, StratifiedSampling};

use image::GrayImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum StipplerError {
    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {} has no pixels", .path.display())]
    EmptyImage { path: PathBuf },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("stratification factor {0} is not a non-zero perfect square")]
    InvalidStratification(usize),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StipplerError>;

/// Stipples images with one sampling strategy and a fixed seed.
pub struct Stippler {
    strategy: Box<dyn StippleSampling>,
    seed: u64,
}

impl Stippler {
    pub fn new(strategy: impl StippleSampling + 'static) -> Self {
        Self::from_boxed(Box::new(strategy))
    }

    pub fn from_boxed(strategy: Box<dyn StippleSampling>) -> Self {
        Self { strategy, seed: 0 }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Produce a binary image of the same size where dot density follows darkness.
    pub fn stipple(&self, image: &GrayImage) -> GrayImage {
        let cdfs = Cdfs::build(image);
        if !cdfs.is_empty() && cdfs.row_mass() == 0 {
            warn!("image has no dark pixels; all samples fall on the origin");
        }

        // reseeded per call
        let mut rng = StdRng::seed_from_u64(self.seed);
        let dots = self.strategy.sample(&cdfs, &mut rng);
        debug!(
            strategy = self.strategy_name(),
            dots = dots.len(),
            "sampled ink dots"
        );

        rasterize(&dots, image.width(), image.height())
    }
}
