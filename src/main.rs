//! bearing-aco CLI: fit a target trajectory to a CSV of bearing observations.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use bearing_aco::colony::{AcoConfig, AcoSolver};
use bearing_aco::diagnostics::ColonyResult;
use bearing_aco::fitness::arctan::AtanMode;
use bearing_aco::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use bearing_aco::observation::csv::{CsvLoader, RecordPolicy};
use bearing_aco::params::presets::ParameterSet;
use bearing_aco::sampler::SamplingPolicy;
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bearing-aco")]
#[command(about = "Bearing-only target motion analysis with ant colony optimization")]
#[command(version)]
struct Cli {
    /// Random seed (signed 64-bit integer)
    #[arg(allow_negative_numbers = true)]
    seed: i64,

    /// Observation file: header, then time,ownship_x,ownship_y,bearing rows
    input: PathBuf,

    /// Number of trajectory coefficients (4, 6 or 8)
    #[arg(short, long)]
    dimensions: Option<usize>,

    /// Number of iterations
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Ants per iteration
    #[arg(short, long)]
    ants: Option<usize>,

    /// Pheromone evaporation rate, in (0, 1)
    #[arg(long)]
    evaporation_rate: Option<f64>,

    /// Exploration probability, in [0, 1]
    #[arg(long)]
    epsilon: Option<f64>,

    /// Synthetic time step between observations
    #[arg(long)]
    sampling_time: Option<f64>,

    /// Sampling policy (uniform, biased)
    #[arg(long)]
    policy: Option<SamplingPolicy>,

    /// Coefficient ranges (synthetic, real-world)
    #[arg(long)]
    param_set: Option<ParameterSet>,

    /// Bearing evaluation (exact, lut)
    #[arg(long)]
    atan: Option<AtanMode>,

    /// Evaluate the ants of each iteration in parallel
    #[arg(long)]
    parallel: bool,

    /// Read at most this many rows
    #[arg(long)]
    max_rows: Option<usize>,

    /// Drop malformed rows instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// JSON colony configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,

    /// Log format (compact, pretty, json)
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: i64,
    best_solution: Option<&'a [f64]>,
    best_fitness: f64,
    iterations: usize,
    evaluations: usize,
    elapsed_seconds: f64,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(&LogConfig::new(cli.log_level, cli.log_format));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    check_extension(&cli.input)?;
    let config = build_config(cli)?;
    let solver = AcoSolver::new(config)?;

    let mut loader = CsvLoader::new();
    if cli.skip_malformed {
        loader = loader.policy(RecordPolicy::Skip);
    }
    if let Some(max_rows) = cli.max_rows {
        loader = loader.max_rows(max_rows);
    }

    let observations = loader.load(&cli.input)?;
    if observations.is_empty() {
        return Err("No data loaded".into());
    }
    info!(entries = observations.len(), "Data loaded");

    let start = Instant::now();
    let result = solver.solve_seeded(&observations, cli.seed as u64)?;
    let elapsed = start.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", render_json(cli.seed, &result, elapsed)?);
    } else {
        print!("{}", render_text(&result, elapsed)?);
    }
    Ok(())
}

fn check_extension(input: &Path) -> Result<(), Box<dyn Error>> {
    if input.to_string_lossy().ends_with(".csv") {
        Ok(())
    } else {
        Err(format!("Input file must end in .csv: {}", input.display()).into())
    }
}

fn build_config(cli: &Cli) -> Result<AcoConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => AcoConfig::from_json_file(path)?,
        None => AcoConfig::default(),
    };

    if let Some(set) = cli.param_set {
        config.parameter_set = set;
        config.sampling_time = set.default_sampling_time();
    }
    if let Some(dimensions) = cli.dimensions {
        config.dimensions = dimensions;
    }
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(ants) = cli.ants {
        config.population_size = ants;
    }
    if let Some(rate) = cli.evaporation_rate {
        config.evaporation_rate = rate;
    }
    if let Some(epsilon) = cli.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(sampling_time) = cli.sampling_time {
        config.sampling_time = sampling_time;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }
    if let Some(atan) = cli.atan {
        config.atan_mode = atan;
    }
    if cli.parallel {
        config.parallel = true;
    }

    config.validate()?;
    Ok(config)
}

fn render_text(result: &ColonyResult, elapsed: f64) -> Result<String, Box<dyn Error>> {
    let solution = result
        .best_solution
        .as_ref()
        .ok_or("No candidate scored a finite fitness")?;
    Ok(format!(
        "Best Solution: {}\nBest Fitness: {}\nElapsed Time: {} seconds\n",
        solution, result.best_fitness, elapsed
    ))
}

fn render_json(seed: i64, result: &ColonyResult, elapsed: f64) -> Result<String, Box<dyn Error>> {
    let report = Report {
        seed,
        best_solution: result.best_solution.as_ref().map(|s| s.coefficients()),
        best_fitness: result.best_fitness,
        iterations: result.iterations,
        evaluations: result.evaluations,
        elapsed_seconds: elapsed,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
