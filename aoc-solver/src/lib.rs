//! Advent of Code Solver Library
//!
//! A small framework for puzzle solvers that parse their input once and then
//! answer each part from the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns the puzzle text into an immutable `Parsed` value
//! - [`PartSolver<N>`] answers part `N` from `&Parsed`
//! - [`Solver`] ties the parts together (usually via `#[derive(AocSolver)]`)
//! - [`DynSolver`] is the type-erased, timed view the runner works with
//! - [`SolverRegistryBuilder`] / [`SolverRegistry`] map (year, day) to
//!   factories, filled by hand or from `#[derive(AutoRegisterSolver)]` plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError};
//! use aoc_solver::SolverRegistryBuilder;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type Parsed = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
//!         Ok(parsed.iter().sum())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(parsed: &Self::Parsed) -> Result<Answer, SolveError> {
//!         Ok(parsed.iter().max().copied().unwrap_or_default())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, 6);
//! assert_eq!(solver.solve(2).unwrap().answer, 3);
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1;
//! ```
//!
//! The crate defining the solver must be linked into the final binary
//! (`use aoc_2023 as _;`) for `inventory` to see the plugin.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{Answer, AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
