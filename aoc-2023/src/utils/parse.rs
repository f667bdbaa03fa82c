//! Line and block parsing with line-numbered errors
//!
//! Day modules parse with `anyhow` internally and convert to
//! [`ParseError::InvalidFormat`] once, at the `AocParser::parse` boundary.

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;
use itertools::Itertools;
use std::str::FromStr;

/// A line of input with its 1-based line number
pub type NumberedLine<'a> = (usize, &'a str);

/// Flatten an `anyhow` chain into a `ParseError`
pub fn invalid_format(error: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{error:#}"))
}

/// Whitespace-separated values, failing on the first token that doesn't parse
pub fn numbers<T>(text: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .with_context(|| format!("invalid number {token:?}"))
        })
        .collect()
}

/// Parse every non-blank line with `parse_line`.
///
/// Failures are prefixed with the line number, e.g. `(line 3) invalid number "x"`.
pub fn parse_lines<T>(
    input: &str,
    mut parse_line: impl FnMut(&str) -> anyhow::Result<T>,
) -> Result<Vec<T>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(invalid_format)
}

/// Split input into blocks of lines separated by one or more blank lines
pub fn blocks(input: &str) -> Vec<Vec<NumberedLine<'_>>> {
    let chunks = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .chunk_by(|(_, line)| line.trim().is_empty());

    let blocks: Vec<Vec<NumberedLine<'_>>> = chunks
        .into_iter()
        .filter(|(blank, _)| !blank)
        .map(|(_, block)| block.collect())
        .collect();
    blocks
}

/// Strip `label:` from the start of a line, returning the remainder
pub fn labelled<'a>(line: &'a str, label: &str) -> anyhow::Result<&'a str> {
    line.trim_start()
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| anyhow!("expected line to start with \"{label}:\", got {line:?}"))
}
