//! # tour-ga CLI
//!
//! Generates a random symmetric distance matrix, computes the exact optimum
//! by brute force, then runs several independent GA trials against it and
//! prints a per-generation report.

use clap::Parser;
use log::{error, warn};
use std::process::ExitCode;
use tour_ga::ga::{find_optimal, GaConfig, GaRunner, GenerationStats, MAX_ORACLE_CITIES};
use tour_ga::random::rng_from_seed;
use tour_ga::{ConfigError, DistanceMatrix, GaError};

/// Command-line interface for tour-ga
#[derive(Parser, Debug)]
#[command(name = "tour-ga")]
#[command(about = "Genetic algorithm for short open-path tours, checked against a brute-force optimum")]
#[command(version)]
struct Cli {
    /// Number of locations
    #[arg(long, default_value_t = 8)]
    cities: usize,

    /// Tours carried from one generation to the next
    #[arg(long, default_value_t = 100)]
    population_size: usize,

    /// Fraction of the parent + child pool that survives; population_size / elite_ratio must be integral
    #[arg(long, default_value_t = 0.25)]
    elite_ratio: f64,

    /// Fraction of the tour length used as the per-generation swap budget
    #[arg(long, default_value_t = 0.2)]
    mutation_ratio: f64,

    /// Generation cap (the initial population is generation 1)
    #[arg(long, default_value_t = 20)]
    max_generation: usize,

    /// Independent trials on the same matrix
    #[arg(long, default_value_t = 3)]
    trials: usize,

    /// Random distances are integers in 0..max_distance
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    max_distance: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the brute-force optimum and run every trial to the generation cap
    #[arg(long)]
    no_oracle: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GaError> {
    if cli.cities == 0 {
        return Err(ConfigError::EmptyMatrix.into());
    }

    let config = GaConfig::new(
        cli.cities,
        cli.population_size,
        cli.elite_ratio,
        cli.mutation_ratio,
        cli.max_generation,
    )
    .with_oracle(!cli.no_oracle);
    config.validate()?;

    let mut rng = rng_from_seed(cli.seed);
    let matrix = DistanceMatrix::random(cli.cities, cli.max_distance, &mut rng);
    println!("Adjacency matrix:\n{matrix}");

    let optimum = if !config.use_oracle {
        None
    } else if cli.cities > MAX_ORACLE_CITIES {
        warn!(
            "{} locations exceed the brute-force limit of {MAX_ORACLE_CITIES}; running without an optimum",
            cli.cities
        );
        None
    } else {
        let optimum = find_optimal(&matrix)?;
        println!("The optimal fitness (the shortest route distance): {optimum}\n");
        Some(optimum)
    };

    for trial in 1..=cli.trials {
        println!("**********************************************\n{trial}. trial started...\n");
        let result = GaRunner::run_with_target(&matrix, &config, optimum, &mut rng, print_generation)?;
        println!(
            "Algorithm terminated ({:?}) after {} generations...\nTotal time passed (ms): {}\n",
            result.termination,
            result.generations,
            result.elapsed.as_millis()
        );
    }
    Ok(())
}

fn print_generation(stats: &GenerationStats) {
    let route: Vec<String> = stats.best_tour.iter().map(ToString::to_string).collect();
    println!(
        "Generation: {}\nThe best route: {}\nThe shortest distance: {}\nAverage distance of generation: {:.3}\n",
        stats.generation,
        route.join(","),
        stats.best_fitness,
        stats.mean_fitness
    );
}
