//! Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;
use puzzle_solver::{RegistryBuilder, SolverRegistry};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let store = build_store(&config);

    let executor = Executor::new(registry, store, &config)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing input files up front; their puzzles still produce
    // per-part error results so the rest of the batch runs.
    let missing = missing_inputs(&executor, &config);
    if !missing.is_empty() && !config.quiet {
        eprintln!("Missing {} input file(s):", missing.len());
        for (year, day) in &missing {
            eprintln!("  - {}/day{:02}", year, day);
        }
    }

    run_executor(executor, config.quiet)
}

/// Check which input files are absent from the store
fn missing_inputs(executor: &Executor, config: &Config) -> Vec<(u16, u8)> {
    let store = build_store(config);
    executor
        .collect_work_items()
        .iter()
        .filter(|w| !store.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

fn build_store(config: &Config) -> InputStore {
    let store = InputStore::new(config.input_dir.clone());
    match (&config.input_file, config.year_filter, config.day_filter) {
        (Some(path), Some(year), Some(day)) => store.with_explicit(year, day, path.clone()),
        _ => store,
    }
}

/// Run the executor and print results as they become ready, in order
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let mut formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Stragglers only show up if a result never arrived for an earlier key
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry from linked plugins with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
