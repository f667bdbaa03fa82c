//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Answer, Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: Answer,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle input bound to the solver that will answer it
///
/// Holds the parsed data and the parse timestamps. The data is never
/// mutated after parsing, so parts can be solved in any order, any number
/// of times, from any thread.
pub struct SolverInstance<S: Solver> {
    year: u16,
    day: u8,
    parsed: S::Parsed,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Parse `input` and record how long it took
    pub fn new(year: u16, day: u8, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let parsed = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            parsed,
            parse_start,
            parse_end,
        })
    }

    pub fn parsed(&self) -> &S::Parsed {
        &self.parsed
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &dyn DynSolver) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} (took {})", part, result.answer, result.duration());
///     }
///     println!("Parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver: Send + Sync {
    /// Solve the specified part, recording solve timestamps
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: Solver> DynSolver for SolverInstance<S> {
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&self.parsed, part)?;
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
