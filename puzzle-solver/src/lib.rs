//! Framework for Advent of Code solvers.
//!
//! Each day's puzzle is a type implementing [`InputParser`] (how to turn the
//! raw input into shared data) and one [`PartSolver`] impl per part. The
//! `Solution` derive from `puzzle-solver-derive` generates the dynamic
//! [`Solver`] dispatch and submits the type to the plugin inventory, from
//! which [`RegistryBuilder`] assembles a [`SolverRegistry`] at startup.
//!
//! # Example
//!
//! ```
//! use puzzle_solver::{InputParser, ParseError, PartSolver, SolveError, Solver};
//!
//! struct Day1;
//!
//! impl InputParser for Day1 {
//!     type Shared<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             p => Err(SolveError::PartNotImplemented(p)),
//!         }
//!     }
//! }
//!
//! let mut shared = Day1::parse("1\n2\n3").unwrap();
//! assert_eq!(Day1::solve_part(&mut shared, 1).unwrap(), "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS, RegisterableSolver, RegistryBuilder,
    SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{InputParser, PartSolver, Solver, SolverExt};

// Re-exported for the code generated by the `Solution` derive
pub use inventory;
