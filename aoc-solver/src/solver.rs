//! Core solver traits

use crate::error::{ParseError, SolveError};

/// The answer every puzzle part produces
pub type Answer = i64;

/// Trait for parsing puzzle input into the data every part reads
///
/// Parsing happens once per input; the parts only ever see `&Self::Parsed`,
/// so the parsed value must be shareable across threads.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed form of the puzzle input
    type Parsed: Send + Sync;

    /// Parse the input string
    fn parse(input: &str) -> Result<Self::Parsed, ParseError>;
}

/// Trait for solving part `N` of a puzzle.
///
/// The const generic makes a missing part a compile-time error at the
/// dispatch site generated by `#[derive(AocSolver)]`.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, PartSolver, ParseError, SolveError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
///         Ok(parsed.iter().sum())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part from the parsed input
    fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError>;
}

/// Core trait that every registered solver implements.
///
/// Usually derived with `#[derive(AocSolver)]`, which forwards each part to
/// the matching [`PartSolver`] impl. A hand-written impl looks like this:
///
/// ```
/// use aoc_solver::{Answer, AocParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<Answer, SolveError> {
///         match part {
///             1 => Ok(parsed.iter().sum()),
///             2 => Ok(parsed.iter().product()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let parsed = Day1Solver::parse("2\n3\n4").unwrap();
/// assert_eq!(Day1Solver::solve_part(&parsed, 1).unwrap(), 9);
/// assert_eq!(Day1Solver::solve_part(&parsed, 2).unwrap(), 24);
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part
    ///
    /// # Returns
    /// * `Ok(Answer)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - The input cannot produce an answer
    fn solve_part(parsed: &Self::Parsed, part: u8) -> Result<Answer, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`
    /// before dispatching.
    fn solve_part_checked_range(parsed: &Self::Parsed, part: u8) -> Result<Answer, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(parsed, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
