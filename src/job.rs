//! Batch processing of (input, strategy, output) jobs.
//!
//! A failed job is logged and counted; it never stops the jobs after it.

use crate::strategy::{RandomSampling, StippleSampling, StratifiedSampling};
use crate::{load_grayscale_image, write_binary_image, Result, Stippler, StipplerError};
use image::GrayImage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Sampling strategy and its parameters as written in a job list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategyConfig {
    Random {
        /// Defaults to one sample per pixel.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        samples: Option<usize>,
    },
    Stratified {
        n: usize,
    },
}

impl StrategyConfig {
    pub fn build(&self) -> Result<Box<dyn StippleSampling>> {
        Ok(match *self {
            Self::Random { samples: None } => Box::new(RandomSampling::new()),
            Self::Random { samples: Some(count) } => Box::new(RandomSampling::with_count(count)),
            Self::Stratified { n } => Box::new(StratifiedSampling::new(n)?),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random { .. } => "random",
            Self::Stratified { .. } => "stratified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub strategy: StrategyConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Job {
    /// Job writing next to the input as `<stem>_<strategy>_stipple.png`.
    pub fn with_default_output(input: impl Into<PathBuf>, strategy: StrategyConfig) -> Self {
        let input = input.into();
        let output = default_output(&input, strategy.name());
        Self { input, output, strategy, seed: None }
    }
}

pub fn default_output(input: &Path, strategy: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    input.with_file_name(format!("{stem}_{strategy}_stipple.png"))
}

/// Parse a JSON array of jobs.
pub fn parse_jobs(json: &str) -> Result<Vec<Job>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<Job>> {
    parse_jobs(&std::fs::read_to_string(path)?)
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: Vec<(Job, StipplerError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every job in order. Jobs without a seed use `default_seed`.
///
/// Consecutive jobs on the same input decode it once.
pub fn run_jobs(jobs: &[Job], default_seed: u64) -> BatchReport {
    let mut report = BatchReport::default();
    let mut cached: Option<(PathBuf, GrayImage)> = None;

    for job in jobs {
        match run_job(job, default_seed, &mut cached) {
            Ok(()) => {
                info!(
                    input = %job.input.display(),
                    output = %job.output.display(),
                    strategy = job.strategy.name(),
                    "stippled"
                );
                report.succeeded += 1;
            }
            Err(err) => {
                error!(input = %job.input.display(), "{err}");
                report.failed.push((job.clone(), err));
            }
        }
    }
    report
}

fn run_job(job: &Job, default_seed: u64, cached: &mut Option<(PathBuf, GrayImage)>) -> Result<()> {
    let stippler =
        Stippler::from_boxed(job.strategy.build()?).with_seed(job.seed.unwrap_or(default_seed));

    let image = match cached.take() {
        Some((path, image)) if path == job.input => image,
        _ => load_grayscale_image(&job.input)?,
    };
    let written = write_binary_image(&job.output, &stippler.stipple(&image));
    *cached = Some((job.input.clone(), image));
    written
}
