//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use chrono::TimeDelta;
use itertools::Itertools;
use puzzle_solver::{ParseError, SolverError, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse time, attached to the first part solved for each day
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

struct ExecutionContext {
    registry: SolverRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: ExecutionContext,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(
        registry: SolverRegistry,
        store: InputStore,
        config: &Config,
    ) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: ExecutionContext {
                registry,
                store,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.context;
        ctx.registry
            .iter_info()
            .filter(|info| ctx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.context.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ExecutorError> {
        let work_items = self.collect_work_items();
        let ctx = &self.context;

        match ctx.parallelize_by {
            ParallelizeBy::Sequential => {
                for work in work_items {
                    run_work_item(&work, &tx, ctx)?;
                }
                Ok(())
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using the configured pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.thread_pool.install(|| {
                    by_year.into_par_iter().try_for_each(|items| {
                        items.iter().try_for_each(|work| run_work_item(work, &tx, ctx))
                    })
                })
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .try_for_each(|work| run_work_item(&work, &tx, ctx))
            }),
        }
    }
}

/// Result carrying a failure that happened before the solver could run
fn failed_result(year: u16, day: u8, part: u8, error: ParseError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(SolverError::Parse(error)),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Run every part of one work item, sending one result per part.
///
/// Missing inputs and parse failures become per-part error results; only a
/// closed channel aborts the run.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    ctx: &ExecutionContext,
) -> Result<(), ExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match ctx.store.read(year, day) {
        Ok(input) => input,
        Err(e) => {
            let error = ParseError::MissingData(e.to_string());
            for part in work.parts.clone() {
                tx.send(failed_result(year, day, part, error.clone()))
                    .map_err(|_| ExecutorError::ChannelSend)?;
            }
            return Ok(());
        }
    };

    if ctx.parallelize_by == ParallelizeBy::Part {
        // Each part parses its own instance so they can run concurrently
        work.parts.clone().into_par_iter().try_for_each(|part| {
            let result = match ctx.registry.create_solver(year, day, &input) {
                Ok(mut solver) => solve_part(year, day, part, &mut *solver, true),
                Err(SolverError::Parse(e)) => failed_result(year, day, part, e),
                Err(e) => SolverResult {
                    year,
                    day,
                    part,
                    answer: Err(e),
                    parse_duration: None,
                    solve_duration: TimeDelta::zero(),
                },
            };
            tx.send(result).map_err(|_| ExecutorError::ChannelSend)
        })
    } else {
        let mut solver = match ctx.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                let error = match e {
                    SolverError::Parse(e) => e,
                    other => ParseError::InvalidFormat(other.to_string()),
                };
                for part in work.parts.clone() {
                    tx.send(failed_result(year, day, part, error.clone()))
                        .map_err(|_| ExecutorError::ChannelSend)?;
                }
                return Ok(());
            }
        };
        for (index, part) in work.parts.clone().enumerate() {
            let result = solve_part(year, day, part, &mut *solver, index == 0);
            tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
        }
        Ok(())
    }
}

/// Solve a single part on an already-parsed solver
fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn puzzle_solver::DynSolver,
    report_parse: bool,
) -> SolverResult {
    let outcome = solver.solve(part);
    let (answer, solve_duration) = match outcome {
        Ok(result) => {
            let solve_duration = result.duration();
            (Ok(result.answer), solve_duration)
        }
        Err(e) => (Err(SolverError::Solve(e)), TimeDelta::zero()),
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration: report_parse.then(|| solver.parse_duration()),
        solve_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use puzzle_solver::{InputParser, RegistryBuilder, SolveError, Solver, SolverInstance};
    use std::fs;
    use tempfile::TempDir;

    struct Echo;

    impl InputParser for Echo {
        type Shared<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
            Ok(input.trim())
        }
    }

    impl Solver for Echo {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut &str, part: u8) -> Result<String, SolveError> {
            Ok(format!("{}-{}", shared, part))
        }
    }

    fn executor_for(temp: &TempDir, argv: &[&str]) -> Executor {
        let registry = RegistryBuilder::new()
            .register_solver::<Echo>(2022, 1)
            .unwrap()
            .register_solver::<Echo>(2022, 2)
            .unwrap()
            .build();
        let args = Args::parse_from(argv);
        let config = Config::from_args(args).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        Executor::new(registry, store, &config).unwrap()
    }

    fn write_input(temp: &TempDir, day: u8, content: &str) {
        let dir = temp.path().join("2022");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("day{:02}.txt", day)), content).unwrap();
    }

    #[test]
    fn work_items_respect_filters() {
        let temp = TempDir::new().unwrap();
        let executor = executor_for(&temp, &["aoc", "--day", "2", "--part", "1"]);
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].day, 2);
        assert_eq!(items[0].parts, 1..=1);
    }

    #[test]
    fn answers_flow_through_channel() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, "hello\n");
        write_input(&temp, 2, "world\n");

        let executor = executor_for(&temp, &["aoc", "--parallelize-by", "sequential"]);
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();

        let results: Vec<SolverResult> = rx.into_iter().collect();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].answer.as_deref().unwrap(), "hello-1");
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn missing_input_reported_per_part() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, "hello\n");

        let executor = executor_for(&temp, &["aoc", "--parallelize-by", "sequential"]);
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();

        let results: Vec<SolverResult> = rx.into_iter().collect();
        assert_eq!(results.len(), 4);
        let failed: Vec<_> = results.iter().filter(|r| r.answer.is_err()).collect();
        assert_eq!(failed.len(), 2);
        assert!(failed.iter().all(|r| r.day == 2));
    }

    #[test]
    fn solve_part_keeps_answer_and_timing() {
        let mut instance = SolverInstance::<Echo>::new(2022, 1, "hello").unwrap();
        let result = solve_part(2022, 1, 1, &mut instance, true);
        assert_eq!(result.answer.as_deref().unwrap(), "hello-1");
        assert!(result.solve_duration >= TimeDelta::zero());
        assert!(result.parse_duration.is_some());
    }

    #[test]
    fn part_parallel_covers_all_parts() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 1, "hello\n");
        write_input(&temp, 2, "world\n");

        let executor = executor_for(&temp, &["aoc", "--parallelize-by", "part"]);
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();

        let mut seen: Vec<(u8, u8)> = rx.into_iter().map(|r| (r.day, r.part)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }
}
