//! Day 1: Trebuchet?!

use crate::utils::parse::parse_lines;
use anyhow::ensure;
use aoc_solver::{Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023"])]
pub struct Day01;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Day01 {
    type Parsed = Vec<String>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input, |line| {
            ensure!(line.is_ascii(), "calibration line must be ASCII, got {line:?}");
            Ok(line.trim().to_owned())
        })
    }
}

/// Digit starting at byte `idx`, written as an ASCII digit or, if
/// `spelled`, as an English word
fn digit_at(line: &str, idx: usize, spelled: bool) -> Option<i64> {
    let rest = &line[idx..];
    let first = rest.as_bytes()[0];
    if first.is_ascii_digit() {
        return Some(i64::from(first - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|pos| pos as i64 + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Result<i64, SolveError> {
    let mut digits = (0..line.len()).filter_map(|idx| digit_at(line, idx, spelled));
    let first = digits
        .next()
        .ok_or_else(|| SolveError::failed(format!("no digit in line {line:?}")))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn calibration_sum(lines: &[String], spelled: bool) -> Result<Answer, SolveError> {
    lines
        .iter()
        .map(|line| calibration_value(line, spelled))
        .try_fold(0 as Answer, |sum, value| {
            sum.checked_add(value?)
                .ok_or_else(|| SolveError::failed("calibration sum overflows"))
        })
}

impl PartSolver<1> for Day01 {
    fn solve(lines: &Self::Parsed) -> Result<Answer, SolveError> {
        calibration_sum(lines, false)
    }
}

impl PartSolver<2> for Day01 {
    fn solve(lines: &Self::Parsed) -> Result<Answer, SolveError> {
        calibration_sum(lines, true)
    }
}
