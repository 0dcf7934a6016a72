//! Solver instances and type erasure

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with solve timing
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string (may be multi-line, e.g. a rendered image)
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving finished (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// How long solving took
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver bound to one year/day with its parsed shared data.
///
/// Parse timing is recorded on construction.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::Shared<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and create an instance.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased solver interface.
///
/// Lets the registry and the runner treat every day's solver uniformly,
/// whatever its shared data type.
pub trait DynSolver {
    /// Solve the given part, recording timing.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Year of the bound puzzle
    fn year(&self) -> u16;

    /// Day of the bound puzzle
    fn day(&self) -> u8;

    /// Number of parts the solver implements
    fn parts(&self) -> u8;

    /// How long parsing took
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
