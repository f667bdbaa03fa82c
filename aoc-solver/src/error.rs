//! Errors raised while registering, parsing and solving

use thiserror::Error;

/// Puzzle input the solver could not turn into its parsed form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input doesn't follow the puzzle's format; the message says where
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number has no `PartSolver` behind it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is 0 or exceeds the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The parsed input cannot produce an answer for this part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Shorthand for a `SolveFailed` carrying only a message
    pub fn failed(message: impl Into<String>) -> Self {
        SolveError::SolveFailed(message.into().into())
    }
}

/// Anything that can go wrong between a year/day lookup and an answer
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    /// Year or day outside the range the registry can address
    #[error("Invalid year/day: {0}/{1}")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year-day combination
    #[error("Solver for {0}/{1:02} registered twice")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the range the registry can address
    #[error("Cannot register a solver for {0}/{1}")]
    InvalidYearDay(u16, u8),
}
