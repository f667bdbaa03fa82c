//! Day 5: If You Give A Seed A Fertilizer
//!
//! Seeds are pushed through seven range tables (seed → soil → … → location).
//! Part 1 treats the seed list as individual seeds; part 2 reads it as
//! `(start, length)` pairs covering billions of seeds, answered through the
//! critical-point search in [`Pipeline::min_over`].

mod range_map;


pub use range_map::{Interval, Pipeline, RangeTable};

use crate::utils::parse::{NumberedLine, blocks, invalid_format, labelled, numbers};
use anyhow::{Context, anyhow, ensure};
use aoc_solver::{
    Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverError,
};
use std::ops::RangeInclusive;
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Day05;

/// Parsed puzzle input: the raw seed numbers and the table pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    seeds: Vec<i64>,
    pipeline: Pipeline,
}

impl Almanac {
    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Seed numbers read as `(start, length)` pairs, as closed ranges.
    /// Pairs with a length below 1 give empty ranges.
    pub fn seed_ranges(&self) -> Result<Vec<RangeInclusive<i64>>, SolveError> {
        if self.seeds.len() % 2 != 0 {
            return Err(SolveError::failed(format!(
                "seed ranges need an even number of values, got {}",
                self.seeds.len()
            )));
        }

        self.seeds
            .chunks_exact(2)
            .map(|pair| {
                let (start, length) = (pair[0], pair[1]);
                length
                    .checked_sub(1)
                    .and_then(|span| start.checked_add(span))
                    .map(|end| start..=end)
                    .ok_or_else(|| SolveError::failed(format!("seed range {start} + {length} overflows")))
            })
            .collect()
    }
}

impl FromStr for Almanac {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let blocks = blocks(input);
        let (seed_block, table_blocks) = blocks
            .split_first()
            .ok_or_else(|| anyhow!("empty almanac"))?;

        let seeds = seed_block
            .iter()
            .enumerate()
            .map(|(idx, &(line_no, line))| {
                let values = if idx == 0 { labelled(line, "seeds") } else { Ok(line) };
                values
                    .and_then(numbers::<i64>)
                    .with_context(|| format!("(line {line_no})"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
            .concat();

        let pipeline = table_blocks
            .iter()
            .map(|block| parse_table(block))
            .collect::<anyhow::Result<Pipeline>>()?;

        Ok(Self { seeds, pipeline })
    }
}

/// A `<name> map:` header followed by one interval per line
fn parse_table(block: &[NumberedLine<'_>]) -> anyhow::Result<RangeTable> {
    let ((header_no, header), rows) = block
        .split_first()
        .ok_or_else(|| anyhow!("empty map block"))?;
    ensure!(
        header.trim_end().ends_with("map:"),
        "(line {header_no}) expected a \"<name> map:\" header, got {header:?}"
    );

    rows.iter()
        .map(|&(line_no, line)| {
            line.parse::<Interval>()
                .with_context(|| format!("(line {line_no})"))
        })
        .collect()
}

impl AocParser for Day05 {
    type Parsed = Almanac;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input.parse::<Almanac>().map_err(invalid_format)
    }
}

impl PartSolver<1> for Day05 {
    fn solve(almanac: &Self::Parsed) -> Result<Answer, SolveError> {
        almanac
            .seeds
            .iter()
            .map(|&seed| almanac.pipeline.map(seed))
            .min()
            .ok_or_else(|| SolveError::failed("almanac lists no seeds"))
    }
}

impl PartSolver<2> for Day05 {
    fn solve(almanac: &Self::Parsed) -> Result<Answer, SolveError> {
        let ranges = almanac.seed_ranges()?;
        tracing::debug!(
            ranges = ranges.len(),
            stages = almanac.pipeline.tables().len(),
            "searching seed ranges through critical points"
        );

        almanac
            .pipeline
            .min_over(&ranges)
            .ok_or_else(|| SolveError::failed("almanac lists no non-empty seed ranges"))
    }
}

/// Lowest location for the seeds read as a flat list
pub fn solve_part_one(input: &str) -> Result<Answer, SolverError> {
    let almanac = Day05::parse(input)?;
    Ok(<Day05 as PartSolver<1>>::solve(&almanac)?)
}

/// Lowest location for the seeds read as `(start, length)` ranges
pub fn solve_part_two(input: &str) -> Result<Answer, SolverError> {
    let almanac = Day05::parse(input)?;
    Ok(<Day05 as PartSolver<2>>::solve(&almanac)?)
}
