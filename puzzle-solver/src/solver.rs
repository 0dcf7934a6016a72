//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parsing half of a solver: turns raw puzzle input into shared data.
///
/// The shared data holds the parsed input and any intermediate results the
/// parts want to exchange. Borrowed representations (`&'a str` slices into
/// the input) and owned ones are both fine.
///
/// # Example
///
/// ```
/// use puzzle_solver::{InputParser, ParseError};
///
/// struct Day1;
///
/// impl InputParser for Day1 {
///     type Shared<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("expected integer".into())))
///             .collect()
///     }
/// }
/// ```
pub trait InputParser {
    /// Parsed input plus any state shared between parts.
    type Shared<'a>;

    /// Parse the raw input.
    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError>;
}

/// One part of a puzzle, checked at compile time via the part number `N`.
///
/// Implement `PartSolver<1>` and `PartSolver<2>` (and so on) for a solver
/// type; the `Solution` derive wires them into [`Solver::solve_part`].
pub trait PartSolver<const N: u8>: InputParser {
    /// Solve this part, with mutable access to the shared data so expensive
    /// intermediate results can be cached for the other part.
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle solver: parsing plus dynamic part dispatch.
///
/// Usually generated by `#[derive(Solution)]` from the `PartSolver` impls
/// rather than written by hand.
pub trait Solver: InputParser {
    /// Number of parts this solver implements (1 for day 25, otherwise 2)
    const PARTS: u8;

    /// Solve the given part.
    fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, blanket-implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS`
    /// with [`SolveError::PartOutOfRange`].
    fn solve_part_checked(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
