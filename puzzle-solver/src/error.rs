//! Error types shared by the solver framework

use thiserror::Error;

/// Error produced while parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected shape
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle requires is absent from the input
    #[error("missing data: {0}")]
    MissingData(String),
}

/// Error produced while solving a part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part number is outside `1..=PARTS` for this solver
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part exists but has no implementation
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Solving failed for a puzzle-specific reason
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error produced by registry operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for this year/day
    #[error("no solver registered for {0} day {1}")]
    NotFound(u16, u8),
    /// Year/day outside the supported range
    #[error("year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Parsing the input failed
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error produced while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year/day
    #[error("duplicate solver registration for {0} day {1}")]
    Duplicate(u16, u8),
    /// Year/day outside the supported range
    #[error("cannot register solver for {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
