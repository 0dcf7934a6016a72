//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Explicit input file for the selected puzzle
    pub input_file: Option<PathBuf>,
    /// Directory holding puzzle input files
    pub input_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, validating argument combinations
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input requires both --year and --day".to_string(),
            ));
        }
        if let Some(0) = args.threads {
            return Err(CliError::Config(
                "--threads must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_file: args.input,
            input_dir: args.input_dir,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn input_requires_year_and_day() {
        let args = Args::parse_from(["aoc", "--input", "foo.txt", "--year", "2022"]);
        assert!(matches!(
            Config::from_args(args),
            Err(CliError::Config(_))
        ));

        let args = Args::parse_from([
            "aoc", "--input", "foo.txt", "--year", "2022", "--day", "3",
        ]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.day_filter, Some(3));
        assert!(config.input_file.is_some());
    }

    #[test]
    fn zero_threads_rejected() {
        let args = Args::parse_from(["aoc", "--threads", "0"]);
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }

    #[test]
    fn defaults_resolve() {
        let args = Args::parse_from(["aoc"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert_eq!(config.parallelize_by, ParallelizeBy::Day);
        assert!(config.thread_count >= 1);
        assert!(!config.quiet);
    }
}
