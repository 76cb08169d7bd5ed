//! bearing-aco-tb: drive the stream kernel from a CSV file.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use bearing_aco::colony::AcoConfig;
use bearing_aco::fitness::arctan::AtanMode;
use bearing_aco::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use bearing_aco::observation::csv::CsvLoader;
use bearing_aco::params::presets::ParameterSet;
use bearing_aco_axis::prelude::*;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bearing-aco-tb")]
#[command(about = "Run the bearing-aco stream kernel on a CSV observation file")]
#[command(version)]
struct Cli {
    /// Observation file: header, then time,ownship_x,ownship_y,bearing rows
    input: PathBuf,

    /// Random seed
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Number of trajectory coefficients (4, 6 or 8)
    #[arg(short, long, default_value_t = 4)]
    dimensions: usize,

    /// Number of iterations
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Ants per iteration
    #[arg(short, long, default_value_t = 20)]
    ants: usize,

    /// Coefficient ranges (synthetic, real-world)
    #[arg(long, default_value = "synthetic")]
    param_set: ParameterSet,

    /// Bearing evaluation (exact, lut)
    #[arg(long, default_value = "lut")]
    atan: AtanMode,

    /// Write the packed input frame to this file
    #[arg(long)]
    dump_input: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig::new(cli.log_level, LogFormat::Compact));

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = AcoConfig::for_parameter_set(cli.param_set)
        .dimensions(cli.dimensions)
        .iterations(cli.iterations)
        .population_size(cli.ants)
        .atan_mode(cli.atan);
    let kernel = StreamKernel::new(config, cli.seed)?;

    let observations = CsvLoader::new()
        .max_rows(kernel.capacity())
        .load(&cli.input)?;
    if observations.is_empty() {
        return Err("No data loaded".into());
    }

    let mut buffer = Vec::with_capacity(observations.len() * INPUT_RECORD_BYTES);
    write_input_frame(&mut buffer, &encode_input_frame(&observations))?;
    if let Some(path) = &cli.dump_input {
        fs::write(path, &buffer)?;
        info!(path = %path.display(), bytes = buffer.len(), "Input frame written");
    }
    let input = read_input_frame(&buffer)?;

    println!("Running ACO minimisation...");
    let start = Instant::now();
    let words = kernel.run(&input, kernel.capacity())?;
    let elapsed = start.elapsed().as_secs_f64();

    let output = decode_output_frame(&words, kernel.dimensions())?;
    println!("Best Fitness: {:.6}", output.fitness);
    let solution: Vec<String> = output.solution.iter().map(|v| format!("{v:.6}")).collect();
    println!("Best Solution: {}", solution.join(" "));
    println!("Elapsed Time: {elapsed} seconds");
    Ok(())
}
