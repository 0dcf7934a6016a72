//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors.
///
/// Per-puzzle failures (missing input, parse errors, solve errors) travel
/// inside each result instead; these variants abort the whole run.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Channel send error
    #[error("Result channel closed before execution finished")]
    ChannelSend,
}
