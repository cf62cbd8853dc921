//! Headless pond trainer.
//!
//! Runs generations as fast as possible and reports the average fitness of
//! each one.

use std::process::ExitCode;

use chrono::Utc;
use pond::{Params, Pond, PondError};

const DEFAULT_SEED: u64 = 0x5EED_F15E;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|arg| arg == "--example") {
        return match serde_json::to_string_pretty(&Params::default()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing config: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if args.get(1).is_some_and(|arg| arg == "--help" || arg == "-h") {
        eprintln!("Usage: {} [config.json|-] [generations] [seed]", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Parameter file, '-' for defaults");
        eprintln!("  generations  Generations to run (default: run forever)");
        eprintln!("  seed         Random seed (default: fixed)");
        eprintln!();
        eprintln!("Print the default configuration with --example.");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), PondError> {
    let params = match args.get(1).map(String::as_str) {
        None | Some("-") => Params::default(),
        Some(path) => Params::load(path)?,
    };
    let generations: Option<u32> = args.get(2).and_then(|s| s.parse().ok());
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SEED);

    println!("Pond Simulation");
    println!("===============");
    println!(
        "Population: {}, lifespan: {} steps, genome: {} genes",
        params.population_size,
        params.generation_lifespan,
        params.genome_length()
    );
    println!("Seed: {seed}");
    println!();

    let start = Utc::now();
    let mut pond = Pond::new(params, seed)?;

    while generations.is_none_or(|limit| pond.generation() < limit) {
        let average_fitness = pond.run_generation()?;
        let minutes = (Utc::now() - start).num_milliseconds() as f64 / 60_000.0;

        println!("Generation: {}", pond.generation() - 1);
        println!("  Minutes: {minutes:.2}");
        println!("  Top: {:.5}", pond.history().top_average_fitness());
        println!("  Average: {average_fitness:.5}");
    }

    Ok(())
}
