//! Day 6: Wait For It

use crate::utils::parse::{blocks, invalid_format, labelled, numbers};
use anyhow::{Context, bail, ensure};
use aoc_solver::{Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Day06;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    /// Holding the button for `hold` ms leaves `time - hold` ms at speed `hold`
    pub fn beats_record(&self, hold: u64) -> bool {
        let travelled = u128::from(hold) * u128::from(self.time - hold);
        travelled > u128::from(self.record)
    }

    /// Number of hold times that beat the record.
    ///
    /// Winning holds form the interval `[lo, time - lo]` around `time / 2`;
    /// `lo` comes from the quadratic's smaller root and is then nudged onto
    /// the exact integer boundary.
    pub fn ways_to_win(&self) -> u64 {
        let time = u128::from(self.time);
        let Some(discriminant) = (time * time).checked_sub(4 * u128::from(self.record)) else {
            return 0;
        };

        let half = self.time / 2;
        let root = discriminant.isqrt();
        let mut lo = u64::try_from((time - root) / 2).unwrap_or(half).min(half);
        while lo <= half && !self.beats_record(lo) {
            lo += 1;
        }
        if lo > half {
            return 0;
        }
        while lo > 0 && self.beats_record(lo - 1) {
            lo -= 1;
        }
        self.time - 2 * lo + 1
    }
}

/// The `Time:` and `Distance:` lines, read both as separate races and as
/// one race with the digits run together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSheet {
    pub races: Vec<Race>,
    pub combined: Race,
}

impl FromStr for RaceSheet {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lines = blocks(input).concat();
        let &[(time_no, time_line), (record_no, record_line)] = lines.as_slice() else {
            bail!("expected a Time line and a Distance line, got {} lines", lines.len());
        };

        let times = labelled(time_line, "Time").with_context(|| format!("(line {time_no})"))?;
        let records =
            labelled(record_line, "Distance").with_context(|| format!("(line {record_no})"))?;

        let races = numbers::<u64>(times)
            .with_context(|| format!("(line {time_no})"))?
            .into_iter()
            .zip(numbers::<u64>(records).with_context(|| format!("(line {record_no})"))?)
            .map(|(time, record)| Race { time, record })
            .collect::<Vec<_>>();
        ensure!(!races.is_empty(), "no races listed");
        ensure!(
            times.split_whitespace().count() == records.split_whitespace().count(),
            "{} times but {} distances",
            times.split_whitespace().count(),
            records.split_whitespace().count()
        );

        let joined = |digits: &str, line_no: usize| {
            digits
                .split_whitespace()
                .collect::<String>()
                .parse::<u64>()
                .with_context(|| format!("(line {line_no}) combined value out of range"))
        };
        let combined = Race {
            time: joined(times, time_no)?,
            record: joined(records, record_no)?,
        };

        Ok(Self { races, combined })
    }
}

impl AocParser for Day06 {
    type Parsed = RaceSheet;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        input.parse::<RaceSheet>().map_err(invalid_format)
    }
}

impl PartSolver<1> for Day06 {
    fn solve(sheet: &Self::Parsed) -> Result<Answer, SolveError> {
        sheet
            .races
            .iter()
            .try_fold(1 as Answer, |product, race| {
                Answer::try_from(race.ways_to_win())
                    .ok()
                    .and_then(|ways| product.checked_mul(ways))
            })
            .ok_or_else(|| SolveError::failed("product of ways to win overflows"))
    }
}

impl PartSolver<2> for Day06 {
    fn solve(sheet: &Self::Parsed) -> Result<Answer, SolveError> {
        Answer::try_from(sheet.combined.ways_to_win())
            .map_err(|_| SolveError::failed("ways to win overflows"))
    }
}
