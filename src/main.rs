//! stippler CLI - Convert grayscale images to stipple drawings

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use stippler::job::load_jobs;
use stippler::{run_jobs, Job, StipplerError, StrategyConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Random,
    Stratified,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "stippler", about = "Convert grayscale images to stipple drawings")]
struct Args {
    /// Input image files
    #[arg(required_unless_present = "jobs")]
    inputs: Vec<PathBuf>,
    /// Output file (single input and strategy only; default: <stem>_<strategy>_stipple.png)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Sampling strategy
    #[arg(short, long, value_enum, default_value = "both")]
    strategy: Strategy,
    /// Samples per stratified pass, must be a perfect square
    #[arg(short = 'n', long, default_value = "100")]
    strata: usize,
    /// Number of random samples (default: one per pixel)
    #[arg(long)]
    samples: Option<usize>,
    /// Random seed (default: current time)
    #[arg(long)]
    seed: Option<u64>,
    /// JSON job list to run instead of the positional inputs
    #[arg(short, long, conflicts_with_all = ["inputs", "output"])]
    jobs: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode, StipplerError> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let jobs = match &args.jobs {
        Some(path) => load_jobs(path)?,
        None => jobs_from_args(&args).unwrap_or_else(|e| e.exit()),
    };

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, jobs = jobs.len(), "starting");

    let report = run_jobs(&jobs, seed);
    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        error!(failed = report.failed.len(), succeeded = report.succeeded, "some jobs failed");
        Ok(ExitCode::FAILURE)
    }
}

fn jobs_from_args(args: &Args) -> Result<Vec<Job>, clap::Error> {
    let strategies = match args.strategy {
        Strategy::Random => vec![random(args)],
        Strategy::Stratified => vec![StrategyConfig::Stratified { n: args.strata }],
        Strategy::Both => vec![random(args), StrategyConfig::Stratified { n: args.strata }],
    };

    if let Some(output) = &args.output {
        if args.inputs.len() != 1 || strategies.len() != 1 {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                "--output needs exactly one input and a single --strategy",
            ));
        }
        return Ok(vec![Job {
            input: args.inputs[0].clone(),
            output: output.clone(),
            strategy: strategies[0].clone(),
            seed: None,
        }]);
    }

    Ok(args
        .inputs
        .iter()
        .flat_map(|input| {
            strategies
                .iter()
                .map(move |strategy| Job::with_default_output(input, strategy.clone()))
        })
        .collect())
}

fn random(args: &Args) -> StrategyConfig {
    StrategyConfig::Random { samples: args.samples }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs_for(argv: &[&str]) -> Result<Vec<Job>, clap::Error> {
        let args = Args::try_parse_from(std::iter::once("stippler").chain(argv.iter().copied()))?;
        jobs_from_args(&args)
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn both_strategies_per_input_by_default() {
        let jobs = jobs_for(&["img_1.png", "img_2.png"]).unwrap();
        let outputs: Vec<_> = jobs.iter().map(|j| j.output.clone()).collect();
        assert_eq!(
            outputs,
            [
                "img_1_random_stipple.png",
                "img_1_stratified_stipple.png",
                "img_2_random_stipple.png",
                "img_2_stratified_stipple.png",
            ]
            .map(PathBuf::from)
        );
        assert_eq!(jobs[0].strategy, StrategyConfig::Random { samples: None });
        assert_eq!(jobs[1].strategy, StrategyConfig::Stratified { n: 100 });
    }

    #[test]
    fn strategy_flags_map_to_config() {
        let jobs = jobs_for(&["--strategy", "stratified", "-n", "256", "a.png"]).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].strategy, StrategyConfig::Stratified { n: 256 });

        let jobs = jobs_for(&["-s", "random", "--samples", "500", "a.png"]).unwrap();
        assert_eq!(jobs[0].strategy, StrategyConfig::Random { samples: Some(500) });
    }

    #[test]
    fn explicit_output_for_single_job() {
        let jobs = jobs_for(&["-s", "random", "-o", "out.png", "a.png"]).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].output, PathBuf::from("out.png"));

        let err = jobs_for(&["-o", "out.png", "a.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn job_list_conflicts_with_inputs() {
        let err = Args::try_parse_from(["stippler", "--jobs", "j.json", "x.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(Args::try_parse_from(["stippler", "--jobs", "j.json"]).is_ok());
        assert!(Args::try_parse_from(["stippler"]).is_err());
    }
}
