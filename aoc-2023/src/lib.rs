//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Every day derives `AutoRegisterSolver`, so linking this crate
//! (`use aoc_2023 as _;`) is enough for
//! [`SolverRegistryBuilder::register_all_plugins`](aoc_solver::SolverRegistryBuilder::register_all_plugins)
//! to pick the days up. Day 5's range mapping is exported for direct use.

pub mod utils;

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
